mod spec_file;

pub use spec_file::{SpecFormat, load_service_spec, parse_service_spec};
