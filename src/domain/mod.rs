pub mod error;
pub mod render;
pub mod service;
pub mod styles;
pub mod validation;

pub use error::AppError;
pub use service::{
    Artifact, ConfigurationError, InitStyle, LimitTable, RunAs, ServiceSpec,
};
pub use styles::{StyleRenderer, renderer_for};
