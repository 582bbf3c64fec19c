pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

pub(super) const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub(super) const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
