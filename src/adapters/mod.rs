pub mod template;

pub use template::EmbeddedTemplates;
