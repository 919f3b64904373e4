use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_bad_request, api_blocking, api_not_found, api_parse_body, api_stats_log};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::statistics::structs::advertise_info::AdvertiseInfo;
use crate::statistics::structs::match_info::MatchInfo;

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_server_info_put(request: HttpRequest, path: web::Path<String>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let body = match api_parse_body(payload, data.api_server_config.max_body_size).await {
        Ok(body) => { body }
        Err(error) => { return api_bad_request(&error.to_string()); }
    };
    let info = match serde_json::from_slice::<AdvertiseInfo>(&body) {
        Ok(info) => { info }
        Err(_) => { return api_bad_request("bad json body"); }
    };

    let endpoint = path.into_inner();
    match api_blocking(&data, move |manager| manager.put_advertise(&endpoint, &info)).await {
        Ok(true) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok"})),
        Ok(false) => api_bad_request("invalid advertise"),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_server_info_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let endpoint = path.into_inner();
    match api_blocking(&data, move |manager| manager.get_advertise(&endpoint)).await {
        Ok(Some(info)) => HttpResponse::Ok().content_type(ContentType::json()).json(info),
        Ok(None) => api_not_found("server not found"),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_match_put(request: HttpRequest, path: web::Path<(String, String)>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let body = match api_parse_body(payload, data.api_server_config.max_body_size).await {
        Ok(body) => { body }
        Err(error) => { return api_bad_request(&error.to_string()); }
    };
    let info = match serde_json::from_slice::<MatchInfo>(&body) {
        Ok(info) => { info }
        Err(_) => { return api_bad_request("bad json body"); }
    };

    let (endpoint, timestamp) = path.into_inner();
    match api_blocking(&data, move |manager| manager.put_match(&endpoint, &timestamp, &info)).await {
        Ok(true) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok"})),
        Ok(false) => api_bad_request("match rejected"),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_match_get(request: HttpRequest, path: web::Path<(String, String)>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let (endpoint, timestamp) = path.into_inner();
    match api_blocking(&data, move |manager| manager.get_match(&endpoint, &timestamp)).await {
        Ok(Some(info)) => HttpResponse::Ok().content_type(ContentType::json()).json(info),
        Ok(None) => api_not_found("match not found"),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_servers_info_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    match api_blocking(&data, |manager| manager.list_all_servers()).await {
        Ok(servers) => HttpResponse::Ok().content_type(ContentType::json()).json(servers),
        Err(response) => response,
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_server_stats_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);

    let endpoint = path.into_inner();
    match api_blocking(&data, move |manager| manager.get_server_stats(&endpoint)).await {
        Ok(Some(stats)) => HttpResponse::Ok().content_type(ContentType::json()).json(stats),
        Ok(None) => api_not_found("server stats not found"),
        Err(response) => response,
    }
}
