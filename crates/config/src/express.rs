use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Host to bind the HTTP server to
    ///
    /// Env: LTR_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: LTR_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Maximum request body size in bytes, enforced by the transport layer
    ///
    /// Env: LTR_EXPRESS_REQUEST_LIMIT
    /// Default: 512000
    pub request_limit: usize,
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_request_limit() -> usize {
    512_000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ExpressError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.is_empty() {
            return Err(ConfigError::ExpressError(
                "Express bind host cannot be empty".to_string(),
            ));
        }

        if self.request_limit == 0 {
            return Err(ConfigError::ExpressError(
                "Express request limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            request_limit: default_request_limit(),
        }
    }
}
