use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::render::{shell_escape, xml_escape};
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template renderer over the style templates bundled into the binary.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("shell_escape", |value: &str| -> String { shell_escape(value) });
        env.add_filter("xml_escape", |value: &str| -> String { xml_escape(value) });

        for file in TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| AppError::Template {
                template: file.path().display().to_string(),
                details: "template name is not UTF-8".into(),
            })?;
            let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                template: name.to_string(),
                details: "template is not UTF-8".into(),
            })?;
            env.add_template(name, source).map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String, AppError> {
        let template =
            self.env.get_template(template_name).map_err(|e| template_error(template_name, e))?;
        template.render(context).map_err(|e| template_error(template_name, e))
    }
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), details: err.to_string() }
}
