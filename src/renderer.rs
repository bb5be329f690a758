//! Template rendering for configgen.
//! Templates are loaded by name from a template root directory and rendered
//! with MiniJinja in strict-undefined mode.

use crate::context::Context;
use crate::error::{Error, Result};
use log::debug;
use minijinja::{path_loader, AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::path::{Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template called `name` with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name, relative to the template root
    /// * `context` - Values for the template's placeholders
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render_template(&self, name: &str, context: &Context) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    template_root: PathBuf,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that resolves templates, includes and imports
    /// relative to `template_root`.
    ///
    /// Referencing a value missing from the context is an error rather than
    /// an empty substitution. Output is never auto-escaped, whatever the
    /// template's extension.
    pub fn new<P: AsRef<Path>>(template_root: P) -> Self {
        let template_root = template_root.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(path_loader(template_root.clone()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env, template_root }
    }

    fn classify(&self, name: &str, err: minijinja::Error) -> Error {
        match err.kind() {
            ErrorKind::UndefinedError => {
                Error::UndefinedValue { template: name.to_string(), source: err }
            }
            _ => Error::TemplateError { template: name.to_string(), source: err },
        }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a named template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the template root or the template is missing
    /// * `Error::UndefinedValue` if the template uses a name absent from the context
    /// * `Error::TemplateError` for syntax errors and any other evaluation failure
    fn render_template(&self, name: &str, context: &Context) -> Result<String> {
        debug!("Loading template '{}' from '{}'.", name, self.template_root.display());

        let tmpl = self.env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound {
                template: name.to_string(),
                template_root: self.template_root.clone(),
            },
            _ => self.classify(name, e),
        })?;

        tmpl.render(context).map_err(|e| self.classify(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn template_root(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_renders_placeholders() {
        let root = template_root(&[("hello.txt", "Hello {{ name }}, {{ value }}!")]);
        let renderer = MiniJinjaRenderer::new(root.path());
        let context = Context::new().with("name", "test").with("value", &42);

        let result = renderer.render_template("hello.txt", &context).unwrap();
        assert_eq!(result, "Hello test, 42!");
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let root = template_root(&[("hello.txt", "Hello {{ name }}!")]);
        let renderer = MiniJinjaRenderer::new(root.path());

        match renderer.render_template("hello.txt", &Context::new()) {
            Err(Error::UndefinedValue { template, .. }) => assert_eq!(template, "hello.txt"),
            other => panic!("Expected UndefinedValue, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_loop_source_is_an_error() {
        let root = template_root(&[("loop.txt", "{% for k in clusters %}{{ k }}{% endfor %}")]);
        let renderer = MiniJinjaRenderer::new(root.path());

        let result = renderer.render_template("loop.txt", &Context::new());
        assert!(matches!(result, Err(Error::UndefinedValue { .. })));
    }

    #[test]
    fn test_missing_template() {
        let root = template_root(&[]);
        let renderer = MiniJinjaRenderer::new(root.path());

        match renderer.render_template("absent.json", &Context::new()) {
            Err(Error::TemplateNotFound { template, template_root }) => {
                assert_eq!(template, "absent.json");
                assert_eq!(template_root, root.path());
            }
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_template_root() {
        let renderer = MiniJinjaRenderer::new("/nonexistent/configgen/templates");
        let result = renderer.render_template("front.json", &Context::new());
        assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
    }

    #[test]
    fn test_syntax_error_is_template_error() {
        let root = template_root(&[("broken.txt", "{% if %}")]);
        let renderer = MiniJinjaRenderer::new(root.path());

        let result = renderer.render_template("broken.txt", &Context::new());
        assert!(matches!(result, Err(Error::TemplateError { .. })));
    }

    #[test]
    fn test_json_templates_are_not_escaped() {
        let root = template_root(&[("value.template.json", r#"{"name": "{{ name }}"}"#)]);
        let renderer = MiniJinjaRenderer::new(root.path());
        let context = Context::new().with("name", "service1");

        let result = renderer.render_template("value.template.json", &context).unwrap();
        assert_eq!(result, r#"{"name": "service1"}"#);
    }

    #[test]
    fn test_include_resolves_against_root() {
        let root = template_root(&[
            ("main.txt", "[{% include 'partials/item.txt' %}]"),
            ("partials/item.txt", "{{ item }}"),
        ]);
        let renderer = MiniJinjaRenderer::new(root.path());
        let context = Context::new().with("item", "x");

        assert_eq!(renderer.render_template("main.txt", &context).unwrap(), "[x]");
    }

    #[test]
    fn test_mapping_iteration_follows_context_order() {
        let root = template_root(&[(
            "keys.txt",
            "{% for name in clusters %}{{ name }}{% if not loop.last %},{% endif %}{% endfor %}",
        )]);
        let renderer = MiniJinjaRenderer::new(root.path());
        let context = Context::new().with("clusters", &json!({"zeta": {}, "alpha": {}, "mid": {}}));

        assert_eq!(renderer.render_template("keys.txt", &context).unwrap(), "zeta,alpha,mid");
    }
}
