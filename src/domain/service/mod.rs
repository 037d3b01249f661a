//! Service description model: the engine's input and output types.

mod artifact;
mod error;
mod init_style;
mod limit_table;
mod service_spec;

pub use artifact::{Artifact, CONFIG_MODE, EXECUTABLE_MODE};
pub use error::ConfigurationError;
pub use init_style::InitStyle;
pub use limit_table::LimitTable;
pub use service_spec::{RunAs, ServiceSpec};
