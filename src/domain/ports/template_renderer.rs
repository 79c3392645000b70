//! TemplateRenderer port - the rendering capability the core consumes
//!
//! The core never parses template syntax itself. It only asks a renderer to
//! render a string or a file against a variable map.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Variables;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("undefined variable '{name}' in template")]
    UndefinedVariable { name: String },

    #[error("template syntax error: {message}")]
    Syntax { message: String },

    #[error("failed to read template {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// Rendering capability injected into resolver, checker and sync
pub trait TemplateRenderer {
    fn render_string(&self, template: &str, vars: &Variables) -> Result<String, TemplateError>;

    fn render_file(&self, path: &Path, vars: &Variables) -> Result<Vec<u8>, TemplateError>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    fn render_string(&self, template: &str, vars: &Variables) -> Result<String, TemplateError> {
        (**self).render_string(template, vars)
    }

    fn render_file(&self, path: &Path, vars: &Variables) -> Result<Vec<u8>, TemplateError> {
        (**self).render_file(path, vars)
    }
}
