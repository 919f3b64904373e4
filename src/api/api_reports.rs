use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::{api_bad_request, api_stats_log};
use crate::api::structs::api_service_data::ApiServiceData;

/// Count from the optional `{count}` segment, the configured default when
/// absent. Negative values are accepted here and clamped by the coordinator.
pub fn api_report_count(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Result<i64, HttpResponse>
{
    match request.match_info().get("count") {
        None => Ok(data.statistics_manager.config.statistics.default_report_count as i64),
        Some(count) => count.parse::<i64>().map_err(|_| api_bad_request("invalid count")),
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_recent_matches_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let count = match api_report_count(&request, &data) {
        Ok(count) => count,
        Err(response) => return response,
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(data.statistics_manager.get_recent_matches(count))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_best_players_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let count = match api_report_count(&request, &data) {
        Ok(count) => count,
        Err(response) => return response,
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(data.statistics_manager.get_best_players(count))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_popular_servers_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let count = match api_report_count(&request, &data) {
        Ok(count) => count,
        Err(response) => return response,
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(data.statistics_manager.get_popular_servers(count))
}
