mod common;

use actix_web::{test, App};
use hotcert::api::structs::api_service_data::ApiServiceData;
use hotcert::http::http::http_service_routes;
use hotcert::ssl::structs::cert_reloader::CertReloader;
use serde_json::Value;
use std::sync::Arc;

fn create_service_data(dir: &common::CertificateDir) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        cert_reloader: Some(Arc::new(CertReloader::new(dir.cert_path(), dir.key_path()).unwrap())),
        config: common::create_test_config(),
    })
}

fn reloader(data: &ApiServiceData) -> &CertReloader {
    data.cert_reloader.as_deref().unwrap()
}

#[actix_web::test]
async fn test_health() {
    let dir = common::CertificateDir::with_pair(&common::self_signed());
    let app = test::init_service(App::new().configure(http_service_routes(create_service_data(&dir)))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/nothing/here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_status_requires_token() {
    let dir = common::CertificateDir::with_pair(&common::self_signed());
    let app = test::init_service(App::new().configure(http_service_routes(create_service_data(&dir)))).await;

    let req = test::TestRequest::get().uri("/api/certificate/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    let req = test::TestRequest::get().uri("/api/certificate/status?token=wrong").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn test_status_reports_current_pair() {
    let dir = common::CertificateDir::with_pair(&common::self_signed());
    let data = create_service_data(&dir);
    let fingerprint = reloader(&data).store().current().unwrap().fingerprint().to_string();
    let app = test::init_service(App::new().configure(http_service_routes(data))).await;

    let req = test::TestRequest::get().uri("/api/certificate/status?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["certificate"]["state"], "loaded");
    assert_eq!(body["certificate"]["generation"], 1);
    assert_eq!(body["certificate"]["fingerprint"], fingerprint.as_str());
    assert_eq!(body["certificate"]["cert_path"], dir.cert_path().as_str());
    assert!(body["certificate"]["last_failure"].is_null());
}

#[actix_web::test]
async fn test_reload_endpoint_rotates_and_reports_failures() {
    let first = common::self_signed();
    let second = common::self_signed();
    let dir = common::CertificateDir::with_pair(&first);
    let data = create_service_data(&dir);
    let app = test::init_service(App::new().configure(http_service_routes(Arc::clone(&data)))).await;

    dir.write_pair(&second);
    let req = test::TestRequest::post().uri("/api/certificate/reload?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reloaded"]["generation"], 2);
    let current = reloader(&data).store().current().unwrap();
    assert_eq!(current.certificate_chain()[0], common::leaf_der(&second.cert_pem));

    dir.write_key(&first.key_pem);
    let req = test::TestRequest::post().uri("/api/certificate/reload?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "failed");
    assert_eq!(body["error"]["kind"], "key_mismatch");
    assert!(Arc::ptr_eq(&current, &reloader(&data).store().current().unwrap()));

    let req = test::TestRequest::get().uri("/api/certificate/status?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["certificate"]["state"], "loaded");
    assert_eq!(body["certificate"]["last_failure"]["kind"], "key_mismatch");
}

#[actix_web::test]
async fn test_certificate_endpoints_without_tls() {
    let data = Arc::new(ApiServiceData {
        cert_reloader: None,
        config: common::create_test_config(),
    });
    let app = test::init_service(App::new().configure(http_service_routes(data))).await;

    let req = test::TestRequest::get().uri("/api/certificate/status?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "tls disabled");

    let req = test::TestRequest::post().uri("/api/certificate/reload?token=TestApiKey").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "tls disabled");

    let req = test::TestRequest::post().uri("/api/certificate/reload").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}
