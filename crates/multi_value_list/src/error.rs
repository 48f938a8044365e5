use shared::{domain::Ordinal, error::EventError};
use thiserror::Error;

use crate::data_source::ListKind;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single render request. Nothing is produced when this is returned.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("value renderer failed on {list} item '{value}'")]
    Renderer {
        list: ListKind,
        value: String,
        #[source]
        source: BoxError,
    },
    #[error("control {operation} failed")]
    Collaborator {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl RenderError {
    pub(crate) fn renderer(list: ListKind, value: &str, source: anyhow::Error) -> Self {
        Self::Renderer {
            list,
            value: value.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn collaborator(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Collaborator {
            operation,
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to parse text bundle for locale '{locale}'")]
    Parse {
        locale: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("unterminated data binding in '{0}'")]
    Unterminated(String),
    #[error("unsupported binding expression '{0}'")]
    Unsupported(String),
    #[error("binding '{0}' does not resolve")]
    Unresolved(String),
}

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("document has no {0} action")]
    MissingAction(&'static str),
    #[error("ordinal {ordinal} is outside the rendered {list} list of {len} items")]
    OrdinalOutOfRange {
        list: ListKind,
        ordinal: Ordinal,
        len: usize,
    },
    #[error("SetValue targets unknown property '{property}' on '{component_id}'")]
    UnknownProperty {
        component_id: String,
        property: String,
    },
    #[error("SetValue for '{property}' has a value of the wrong type")]
    InvalidValue { property: String },
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error("failed to serialize data source")]
    Payload(#[from] serde_json::Error),
}
