use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_stats_log;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    HttpResponse::Ok().content_type(ContentType::json()).json(data.statistics_manager.get_stats())
}
