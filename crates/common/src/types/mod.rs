use serde::Serialize;

/// Health check payload returned by the transport layer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Health {
    pub status: &'static str,
}
