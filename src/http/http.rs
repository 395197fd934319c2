use crate::api::api::{api_service_data, api_service_routes};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::ssl::ssl::create_server_config_with_resolver;
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::ServiceConfig;
use actix_web::{web, App, HttpResponse, HttpServer};
use log::{info, warn};
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub fn http_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(api_service_data(Arc::clone(&data)));
        cfg.service(web::resource("/").route(web::get().to(http_service_health)));
        cfg.service(web::resource("/health").route(web::get().to(http_service_health)));
        if data.config.api.enabled {
            api_service_routes(cfg);
        }
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Starts the listener. With a reloader, TLS certificates come from its store
/// on every handshake, so reloads never touch the listener. Without one the
/// listener serves plain HTTP.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let http_config = data.config.http_server.clone();
    let tls_config = match &data.cert_reloader {
        Some(reloader) => Some(
            create_server_config_with_resolver(reloader.resolver()).map_err(std::io::Error::other)?
        ),
        None => None,
    };

    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(Arc::clone(&data)))
    })
        .keep_alive(Duration::from_secs(http_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_config.disconnect_timeout))
        .workers(http_config.threads as usize);

    let server = match tls_config {
        Some(tls_config) => {
            info!("[HTTP] Starting server listener with TLS on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            warn!("[HTTP] No certificate configured, starting plain server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    };
    let server = server
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_health() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok"
    }))
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
