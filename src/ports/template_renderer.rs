use crate::domain::AppError;

/// Port for rendering the style boilerplate templates.
///
/// Keeps the template engine out of the style renderers.
pub trait TemplateRenderer {
    /// Render the named template with a serialized context.
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String, AppError>;
}
