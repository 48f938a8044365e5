//! Replays the document's touch actions against a rendered data source.
//!
//! The host owns real execution. This mirrors the part of it the event contract
//! depends on: activations are ignored while the screen is locked, the event is
//! sent first, then the `SetValue` commands run in order.

use serde::Serialize;
use serde_json::Value;
use shared::{
    domain::Ordinal,
    protocol::{ControlEvent, EventKind},
};
use tracing::warn;

use crate::{
    apl::{AplDocument, Command, Component},
    binding::{resolve, resolve_value, Scope},
    data_source::{ListKind, RenderPayload},
    document::{COMPLETE_BUTTON_ID, DEBUG_TEXT, DISABLE_SCREEN, ROOT_ID, SHOW_DEBUG},
    error::InteractionError,
};

/// A user gesture on the rendered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Complete,
    Select(Ordinal),
    Remove(Ordinal),
}

impl Activation {
    pub fn kind(self) -> EventKind {
        match self {
            Activation::Complete => EventKind::Complete,
            Activation::Select(_) => EventKind::Select,
            Activation::Remove(_) => EventKind::Remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Sent(ControlEvent),
    Set { property: String, value: Value },
}

/// What one activation did, in execution order. Empty when it was ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub steps: Vec<Step>,
}

impl Outcome {
    pub fn ignored(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn event(&self) -> Option<&ControlEvent> {
        self.steps.iter().find_map(|step| match step {
            Step::Sent(event) => Some(event),
            Step::Set { .. } => None,
        })
    }
}

/// The transient state declared on the document's root container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub debug_text: String,
    pub disable_screen: bool,
    pub show_debug: bool,
}

impl ViewState {
    /// State right after a render, taken from the root container's `bind` list.
    pub fn initial(document: &AplDocument) -> Self {
        let mut state = Self::default();
        if let Some(Component::Container(root)) = document.find_by_id(ROOT_ID) {
            for binding in &root.bind {
                // A bind with an unknown name or mismatched type keeps the default.
                if let Err(err) = state.apply(ROOT_ID, &binding.name, &binding.value) {
                    warn!(name = %binding.name, error = %err, "ignoring root bind");
                }
            }
        }
        state
    }

    /// Whether the diagnostic text is on screen.
    pub fn debug_visible(&self, payload: &RenderPayload) -> bool {
        self.show_debug || payload.general.debug
    }

    pub fn activate(
        &mut self,
        document: &AplDocument,
        payload: &RenderPayload,
        activation: Activation,
    ) -> Result<Outcome, InteractionError> {
        let mut scope = Scope::new()
            .with("payload", serde_json::to_value(payload)?)
            .with(DEBUG_TEXT, self.debug_text.clone())
            .with(DISABLE_SCREEN, self.disable_screen)
            .with(SHOW_DEBUG, self.show_debug);

        let (action, disabled) = find_action(document, activation)?;

        if let Some(disabled) = disabled {
            match resolve(disabled, &scope)? {
                Value::Bool(true) => return Ok(Outcome::default()),
                Value::Bool(false) => {}
                _ => {
                    return Err(InteractionError::InvalidValue {
                        property: "disabled".into(),
                    })
                }
            }
        }

        if let Activation::Select(ordinal) | Activation::Remove(ordinal) = activation {
            let kind = match activation {
                Activation::Remove(_) => ListKind::Selections,
                _ => ListKind::Choices,
            };
            let list = payload.list(kind);
            let item = list
                .list_items
                .get(ordinal.index())
                .ok_or(InteractionError::OrdinalOutOfRange {
                    list: kind,
                    ordinal,
                    len: list.len(),
                })?;
            scope.set("ordinal", ordinal.get());
            scope.set("data", serde_json::to_value(item)?);
        }

        // Commands run against a copy; the state changes only if all of them succeed.
        let mut next = self.clone();
        let mut outcome = Outcome::default();
        for command in action.flatten() {
            match command {
                Command::SendEvent { arguments } => {
                    let arguments = arguments
                        .iter()
                        .map(|argument| resolve(argument, &scope))
                        .collect::<Result<Vec<_>, _>>()?;
                    outcome
                        .steps
                        .push(Step::Sent(ControlEvent::from_arguments(&arguments)?));
                }
                Command::SetValue {
                    component_id,
                    property,
                    value,
                } => {
                    let value = resolve_value(value, &scope)?;
                    next.apply(component_id, property, &value)?;
                    scope.set(property.clone(), value.clone());
                    outcome.steps.push(Step::Set {
                        property: property.clone(),
                        value,
                    });
                }
                Command::Sequential { .. } => {}
            }
        }
        *self = next;
        Ok(outcome)
    }

    fn apply(
        &mut self,
        component_id: &str,
        property: &str,
        value: &Value,
    ) -> Result<(), InteractionError> {
        let invalid = || InteractionError::InvalidValue {
            property: property.to_string(),
        };
        match (component_id, property) {
            (ROOT_ID, DEBUG_TEXT) => self.debug_text = value.as_str().ok_or_else(invalid)?.into(),
            (ROOT_ID, DISABLE_SCREEN) => self.disable_screen = value.as_bool().ok_or_else(invalid)?,
            (ROOT_ID, SHOW_DEBUG) => self.show_debug = value.as_bool().ok_or_else(invalid)?,
            _ => {
                return Err(InteractionError::UnknownProperty {
                    component_id: component_id.to_string(),
                    property: property.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn find_action(
    document: &AplDocument,
    activation: Activation,
) -> Result<(&Command, Option<&str>), InteractionError> {
    let found = match activation {
        Activation::Complete => match document.find_by_id(COMPLETE_BUTTON_ID) {
            Some(Component::AlexaButton(button)) => Some((&button.primary_action, None)),
            _ => None,
        },
        Activation::Select(_) => document.components().into_iter().find_map(|c| match c {
            Component::AlexaTextListItem(item) => {
                Some((&item.primary_action, Some(item.disabled.as_str())))
            }
            _ => None,
        }),
        Activation::Remove(_) => document.components().into_iter().find_map(|c| match c {
            Component::AlexaSwipeToAction(item) => {
                Some((&item.on_swipe_done, Some(item.disabled.as_str())))
            }
            _ => None,
        }),
    };
    found.ok_or(InteractionError::MissingAction(activation.kind().as_str()))
}

#[cfg(test)]
#[path = "tests/interaction_tests.rs"]
mod tests;
