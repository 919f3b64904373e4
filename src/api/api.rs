use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{http, web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{BytesMut, Data, ServiceConfig};
use futures_util::StreamExt;
use log::{error, info};
use serde_json::json;
use crate::api::api_players::api_service_player_stats_get;
use crate::api::api_reports::{api_service_best_players_get, api_service_popular_servers_get, api_service_recent_matches_get};
use crate::api::api_servers::{api_service_match_get, api_service_match_put, api_service_server_info_get, api_service_server_info_put, api_service_server_stats_get, api_service_servers_info_get};
use crate::api::api_stats::api_service_stats_get;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::statistics::enums::statistics_error::StatisticsError;
use crate::statistics::structs::statistics_manager::StatisticsManager;
use crate::stats::enums::stats_event::StatsEvent;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "PUT"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/servers/info").route(web::get().to(api_service_servers_info_get)));
        cfg.service(web::resource("/servers/{endpoint}/info")
            .route(web::put().to(api_service_server_info_put))
            .route(web::get().to(api_service_server_info_get))
        );
        cfg.service(web::resource("/servers/{endpoint}/matches/{timestamp}")
            .route(web::put().to(api_service_match_put))
            .route(web::get().to(api_service_match_get))
        );
        cfg.service(web::resource("/servers/{endpoint}/stats").route(web::get().to(api_service_server_stats_get)));
        cfg.service(web::resource("/players/{name}/stats").route(web::get().to(api_service_player_stats_get)));
        cfg.service(web::resource("/reports/recent-matches").route(web::get().to(api_service_recent_matches_get)));
        cfg.service(web::resource("/reports/recent-matches/{count}").route(web::get().to(api_service_recent_matches_get)));
        cfg.service(web::resource("/reports/best-players").route(web::get().to(api_service_best_players_get)));
        cfg.service(web::resource("/reports/best-players/{count}").route(web::get().to(api_service_best_players_get)));
        cfg.service(web::resource("/reports/popular-servers").route(web::get().to(api_service_popular_servers_get)));
        cfg.service(web::resource("/reports/popular-servers/{count}").route(web::get().to(api_service_popular_servers_get)));
        cfg.service(web::resource("/stats").route(web::get().to(api_service_stats_get)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    config: Arc<ApiServerConfig>,
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub fn api_stats_log(data: &Data<Arc<ApiServiceData>>)
{
    data.statistics_manager.update_stats(StatsEvent::ApiRequests, 1);
}

/// Reads the request body, refusing anything above `limit` bytes.
pub async fn api_parse_body(mut payload: web::Payload, limit: usize) -> Result<BytesMut, CustomError>
{
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(_) => return Err(CustomError::new("chunk error")),
        };
        if body.len() + chunk.len() > limit {
            return Err(CustomError::new("body overflow"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Runs a coordinator operation on the blocking pool, turning failures into
/// a 500 response.
pub async fn api_blocking<F, R>(data: &Data<Arc<ApiServiceData>>, operation: F) -> Result<R, HttpResponse>
where
    F: FnOnce(&StatisticsManager) -> Result<R, StatisticsError> + Send + 'static,
    R: Send + 'static,
{
    let manager = data.statistics_manager.clone();
    match web::block(move || operation(&manager)).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(error)) => Err(api_internal_error(data, &error.to_string())),
        Err(error) => Err(api_internal_error(data, &error.to_string())),
    }
}

pub fn api_internal_error(data: &Data<Arc<ApiServiceData>>, message: &str) -> HttpResponse
{
    error!("[API] Internal error: {}", message);
    data.statistics_manager.update_stats(StatsEvent::InternalErrors, 1);
    HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
        "status": "internal error"
    }))
}

pub fn api_bad_request(status: &str) -> HttpResponse
{
    HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
        "status": status
    }))
}

pub fn api_not_found(status: &str) -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": status
    }))
}

pub async fn api_service_not_found(_request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_stats_log(&data);
    data.statistics_manager.update_stats(StatsEvent::ApiNotFound, 1);
    api_not_found("not found")
}
