use crate::api::api::api_service_token;
use crate::api::structs::api_certificate::{
    CertificateReloadError,
    CertificateReloadResult,
    CertificateStatusItem
};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::reload::traits::reloadable::Reloadable;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

fn api_service_tls_disabled() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "tls disabled"
    }))
}

fn api_service_query_token(request: &HttpRequest) -> Option<String> {
    web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|params| params.into_inner().token)
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_reload(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), Arc::clone(&data.config)).await {
        return response;
    }

    let Some(reloader) = data.cert_reloader.clone() else {
        return api_service_tls_disabled();
    };
    info!("[API] Certificate reload requested for {}", reloader.describe());
    match web::block(move || reloader.reload_certificates()).await {
        Ok(Ok(installed)) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "status": "ok",
                "reloaded": CertificateReloadResult {
                    loaded_at: installed.pair.loaded_at().to_rfc3339(),
                    not_after: installed.pair.not_after().map(|t| t.to_rfc3339()),
                    fingerprint: installed.pair.fingerprint().to_string(),
                    generation: installed.generation,
                }
            }))
        }
        Ok(Err(e)) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "status": "failed",
                "error": CertificateReloadError {
                    kind: e.kind(),
                    error: e.to_string(),
                }
            }))
        }
        Err(e) => {
            warn!("[API] Certificate reload could not be scheduled: {}", e);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": "failed",
                "error": CertificateReloadError {
                    kind: "internal",
                    error: e.to_string(),
                }
            }))
        }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_certificate_status(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(api_service_query_token(&request), Arc::clone(&data.config)).await {
        return response;
    }

    let Some(reloader) = data.cert_reloader.as_ref() else {
        return api_service_tls_disabled();
    };
    let paths = reloader.paths();
    let store = reloader.store();
    let current = store.current();
    let status = CertificateStatusItem {
        cert_path: paths.cert_path,
        key_path: paths.key_path,
        state: reloader.state(),
        generation: store.generation(),
        loaded_at: current.as_ref().map(|pair| pair.loaded_at().to_rfc3339()),
        not_before: current.as_ref().and_then(|pair| pair.not_before()).map(|t| t.to_rfc3339()),
        not_after: current.as_ref().and_then(|pair| pair.not_after()).map(|t| t.to_rfc3339()),
        subject: current.as_ref().and_then(|pair| pair.subject().map(str::to_string)),
        fingerprint: current.as_ref().map(|pair| pair.fingerprint().to_string()),
        last_failure: reloader.last_failure(),
    };
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "certificate": status
    }))
}
