use crate::api::api_certificate::{api_service_certificate_reload, api_service_certificate_status};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::config::structs::configuration::Configuration;
use actix_web::http::header::ContentType;
use actix_web::web::ServiceConfig;
use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;

pub fn api_service_routes(cfg: &mut ServiceConfig) {
    cfg.service(web::resource("/api/certificate/status").route(web::get().to(api_service_certificate_status)));
    cfg.service(web::resource("/api/certificate/reload").route(web::post().to(api_service_certificate_reload)));
}

pub fn api_service_data(data: Arc<ApiServiceData>) -> web::Data<Arc<ApiServiceData>> {
    web::Data::new(data)
}

pub async fn api_service_token(token: Option<String>, config: Arc<Configuration>) -> Option<HttpResponse>
{
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != config.api.api_key {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}
