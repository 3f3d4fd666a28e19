pub mod http_logger;
pub mod logger;
pub use http_logger::http_logger_middleware;
pub use logger::{LoggingConfig, LoggingError, init_with_config};
