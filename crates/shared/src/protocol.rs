use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{ControlId, Ordinal},
    error::EventError,
};

/// Name of an event kind as it appears in the second `SendEvent` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Complete,
    Select,
    Remove,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Complete => "Complete",
            EventKind::Select => "Select",
            EventKind::Remove => "Remove",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EventError> {
        match raw {
            "Complete" => Ok(EventKind::Complete),
            "Select" => Ok(EventKind::Select),
            "Remove" => Ok(EventKind::Remove),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }

    fn arity(self) -> usize {
        match self {
            EventKind::Complete => 2,
            EventKind::Select | EventKind::Remove => 3,
        }
    }
}

/// An interaction reported by the host and routed back to the owning control.
///
/// Ordinals are positional within the list that was on screen when the user acted.
/// They are not stable across renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ControlEvent {
    Complete {
        control_id: ControlId,
    },
    Select {
        control_id: ControlId,
        ordinal: Ordinal,
    },
    Remove {
        control_id: ControlId,
        ordinal: Ordinal,
    },
}

impl ControlEvent {
    pub fn control_id(&self) -> &ControlId {
        match self {
            ControlEvent::Complete { control_id }
            | ControlEvent::Select { control_id, .. }
            | ControlEvent::Remove { control_id, .. } => control_id,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            ControlEvent::Complete { .. } => EventKind::Complete,
            ControlEvent::Select { .. } => EventKind::Select,
            ControlEvent::Remove { .. } => EventKind::Remove,
        }
    }

    pub fn ordinal(&self) -> Option<Ordinal> {
        match self {
            ControlEvent::Complete { .. } => None,
            ControlEvent::Select { ordinal, .. } | ControlEvent::Remove { ordinal, .. } => {
                Some(*ordinal)
            }
        }
    }

    /// Decodes the argument array of a host user event: `[controlId, kind, ordinal?]`.
    pub fn from_arguments(arguments: &[Value]) -> Result<Self, EventError> {
        let control_id = string_at(arguments, 0)?;
        if control_id.is_empty() {
            return Err(EventError::EmptyControlId);
        }
        let control_id = ControlId::new(control_id);
        let kind = EventKind::parse(string_at(arguments, 1)?)?;

        if arguments.len() > kind.arity() {
            return Err(EventError::TrailingArguments {
                kind: kind.as_str(),
                expected: kind.arity(),
                actual: arguments.len(),
            });
        }

        match kind {
            EventKind::Complete => Ok(ControlEvent::Complete { control_id }),
            EventKind::Select => Ok(ControlEvent::Select {
                control_id,
                ordinal: ordinal_at(arguments, 2)?,
            }),
            EventKind::Remove => Ok(ControlEvent::Remove {
                control_id,
                ordinal: ordinal_at(arguments, 2)?,
            }),
        }
    }

    /// The argument array the rendered document sends for this event.
    pub fn to_arguments(&self) -> Vec<Value> {
        let mut arguments = vec![
            Value::String(self.control_id().to_string()),
            Value::String(self.kind().as_str().to_string()),
        ];
        if let Some(ordinal) = self.ordinal() {
            arguments.push(Value::from(ordinal.get()));
        }
        arguments
    }
}

fn string_at(arguments: &[Value], position: usize) -> Result<&str, EventError> {
    arguments
        .get(position)
        .ok_or(EventError::MissingArgument { position })?
        .as_str()
        .ok_or(EventError::NotAString { position })
}

// Hosts deliver `${ordinal}` as a number, but string forms show up after
// template substitution, so both are accepted.
fn ordinal_at(arguments: &[Value], position: usize) -> Result<Ordinal, EventError> {
    let raw = arguments
        .get(position)
        .ok_or(EventError::MissingArgument { position })?;

    let parsed = match raw {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f > 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };

    parsed
        .and_then(Ordinal::new)
        .ok_or_else(|| EventError::InvalidOrdinal(raw.to_string()))
}
