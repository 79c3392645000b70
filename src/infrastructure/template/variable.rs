//! Variable placeholder renderer
//!
//! Implements the TemplateRenderer port with a small placeholder language:
//! - `{{ name }}` substitutes a variable
//! - `{{ a.b }}` looks up a nested object field
//! - `{{ not name }}` renders the negated truthiness of a variable
//!
//! Everything outside `{{ ... }}` is copied verbatim.

use std::path::Path;

use serde_json::Value;

use crate::domain::ports::{TemplateError, TemplateRenderer};
use crate::domain::value_objects::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// What to do when a placeholder names an undefined variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingVariable {
    /// Fail with `TemplateError::UndefinedVariable`
    #[default]
    Error,
    /// Treat as the zero value (empty string, falsy)
    Zero,
}

/// Renderer constructed once and passed to the resolver, checker and sync
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableRenderer {
    missing: MissingVariable,
}

impl VariableRenderer {
    pub fn new(missing: MissingVariable) -> Self {
        Self { missing }
    }

    /// Renderer used for condition expressions
    pub fn zero_fill() -> Self {
        Self::new(MissingVariable::Zero)
    }

    pub fn missing_variable(&self) -> MissingVariable {
        self.missing
    }

    fn evaluate(&self, expr: &str, vars: &Variables) -> Result<String, TemplateError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(TemplateError::Syntax {
                message: "empty placeholder".to_string(),
            });
        }

        if let Some(operand) = expr.strip_prefix("not ") {
            let value = self.lookup(operand.trim(), vars)?;
            return Ok((!is_truthy(value.as_ref())).to_string());
        }

        let value = self.lookup(expr, vars)?;
        Ok(value.as_ref().map(display_value).unwrap_or_default())
    }

    /// `Ok(None)` only in zero-fill mode
    fn lookup(&self, name: &str, vars: &Variables) -> Result<Option<Value>, TemplateError> {
        if name.is_empty() || name.split('.').any(|part| !is_identifier(part)) {
            return Err(TemplateError::Syntax {
                message: format!("invalid variable reference '{}'", name),
            });
        }

        let mut parts = name.split('.');
        let found = parts.next().and_then(|head| vars.get(head)).and_then(|root| {
            parts.try_fold(root, |current, part| current.get(part))
        });

        match (found, self.missing) {
            (Some(value), _) => Ok(Some(value.clone())),
            (None, MissingVariable::Zero) => Ok(None),
            (None, MissingVariable::Error) => Err(TemplateError::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }
}

impl TemplateRenderer for VariableRenderer {
    fn render_string(&self, template: &str, vars: &Variables) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + OPEN.len()..];
            let end = after.find(CLOSE).ok_or_else(|| TemplateError::Syntax {
                message: "unclosed '{{'".to_string(),
            })?;
            out.push_str(&self.evaluate(&after[..end], vars)?);
            rest = &after[end + CLOSE.len()..];
        }
        out.push_str(rest);

        Ok(out)
    }

    fn render_file(&self, path: &Path, vars: &Variables) -> Result<Vec<u8>, TemplateError> {
        let bytes = std::fs::read(path).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| TemplateError::Read {
            path: path.to_path_buf(),
            message: "template is not valid UTF-8".to_string(),
        })?;
        Ok(self.render_string(&text, vars)?.into_bytes())
    }
}

fn is_identifier(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
