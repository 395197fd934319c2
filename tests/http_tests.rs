mod common;

use hotcert::api::structs::api_service_data::ApiServiceData;
use hotcert::http::http::http_service;
use hotcert::ssl::structs::cert_reloader::CertReloader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

fn free_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn plain_get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
    if stream.write_all(request.as_bytes()).await.is_err() {
        return String::new();
    }
    let mut response = Vec::new();
    let _ = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response)).await;
    String::from_utf8_lossy(&response).to_string()
}

#[actix_web::test]
async fn test_plain_listener_without_certificate() {
    let mut config = (*common::create_test_config()).clone();
    config.tls.cert_path = String::new();
    config.tls.key_path = String::new();
    assert!(config.validate().is_ok());
    assert!(!config.tls_enabled());

    let data = Arc::new(ApiServiceData {
        cert_reloader: None,
        config: Arc::new(config),
    });
    let addr = free_address();
    let (handle, server) = http_service(addr, data).unwrap();
    actix_web::rt::spawn(server);

    let response = plain_get(addr, "/health").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {}", response);
    assert!(response.contains("\"status\":\"ok\""));

    let response = plain_get(addr, "/api/certificate/status?token=TestApiKey").await;
    assert!(response.contains("tls disabled"));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_tls_listener_refuses_plain_http() {
    let dir = common::CertificateDir::with_pair(&common::self_signed());
    let data = Arc::new(ApiServiceData {
        cert_reloader: Some(Arc::new(CertReloader::new(dir.cert_path(), dir.key_path()).unwrap())),
        config: common::create_test_config(),
    });
    let addr = free_address();
    let (handle, server) = http_service(addr, data).unwrap();
    actix_web::rt::spawn(server);

    let response = plain_get(addr, "/health").await;
    assert!(!response.starts_with("HTTP/1.1 200"));

    handle.stop(true).await;
}
