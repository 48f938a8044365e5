//! Resolution of `${...}` data-binding references.
//!
//! Only dotted paths (`payload.general.controlId`, `ordinal`) are evaluated.
//! Anything else, such as conditionals or resource lookups, is host territory and
//! reported as unsupported.

use serde_json::{Map, Value};

use crate::error::BindingError;

/// Named values a binding may reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    vars: Map<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.vars.get(first)?, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

/// Resolves a template string.
///
/// A template that is exactly one reference yields the referenced value with its
/// JSON type intact. References embedded in other text are spliced in as text.
pub fn resolve(template: &str, scope: &Scope) -> Result<Value, BindingError> {
    if let Some(expr) = sole_reference(template) {
        return lookup(expr, scope).cloned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| BindingError::Unterminated(template.to_string()))?;
        match lookup(&after[..end], scope)? {
            Value::String(text) => out.push_str(text),
            other => out.push_str(&other.to_string()),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(Value::String(out))
}

/// Resolves a value from the document: strings are templates, everything else is literal.
pub fn resolve_value(value: &Value, scope: &Scope) -> Result<Value, BindingError> {
    match value {
        Value::String(template) => resolve(template, scope),
        other => Ok(other.clone()),
    }
}

fn sole_reference(template: &str) -> Option<&str> {
    let inner = template.strip_prefix("${")?.strip_suffix('}')?;
    (!inner.contains("${") && !inner.contains('}')).then_some(inner)
}

fn lookup<'a>(expr: &str, scope: &'a Scope) -> Result<&'a Value, BindingError> {
    let expr = expr.trim();
    if !is_path(expr) {
        return Err(BindingError::Unsupported(expr.to_string()));
    }
    scope
        .path(expr)
        .ok_or_else(|| BindingError::Unresolved(expr.to_string()))
}

fn is_path(expr: &str) -> bool {
    !expr.is_empty()
        && expr.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
