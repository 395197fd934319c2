/// The parts of a ClientHello handed to the certificate accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandshakeInfo {
    pub server_name: Option<String>,
    pub alpn_protocols: Vec<Vec<u8>>,
}
