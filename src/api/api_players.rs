use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::{api_blocking, api_not_found, api_stats_log};
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_player_stats_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let name = path.into_inner();
    match api_blocking(&data, move |manager| manager.get_player_stats(&name)).await {
        Ok(Some(stats)) => HttpResponse::Ok().content_type(ContentType::json()).json(stats),
        Ok(None) => api_not_found("player not found"),
        Err(response) => response,
    }
}
