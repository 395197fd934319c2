use crate::ssl::structs::handshake_info::HandshakeInfo;
use rustls::server::ClientHello;

impl HandshakeInfo {
    pub fn from_client_hello(client_hello: &ClientHello<'_>) -> Self {
        Self {
            server_name: client_hello.server_name().map(|name| name.to_string()),
            alpn_protocols: client_hello
                .alpn()
                .map(|protocols| protocols.map(|protocol| protocol.to_vec()).collect())
                .unwrap_or_default(),
        }
    }

    pub fn with_server_name(server_name: &str) -> Self {
        Self {
            server_name: Some(server_name.to_string()),
            alpn_protocols: Vec::new(),
        }
    }
}
