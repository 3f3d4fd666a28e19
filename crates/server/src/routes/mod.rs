pub mod gov;
pub mod metrics;
pub mod registry;
pub mod root;

pub use registry::{RegisterRoute, RouteRegistry};
