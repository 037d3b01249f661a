mod template_renderer;

pub use template_renderer::TemplateRenderer;
