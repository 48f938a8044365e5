use serde::{Deserialize, Serialize};
use shared::domain::{ControlId, ControlInput};

use crate::error::RenderError;

/// State a multi-value list control exposes to its screen content.
///
/// Implementations must not mutate anything observable while these are called.
pub trait MultiValueListControl {
    fn id(&self) -> &ControlId;

    /// Every selectable choice, in the order it should be displayed.
    fn choices_list(&self, input: &ControlInput) -> anyhow::Result<Vec<String>>;

    /// The choices currently selected, in display order.
    fn slot_ids(&self, input: &ControlInput) -> anyhow::Result<Vec<String>>;
}

/// One consistent read of a control's state, shared by everything rendered from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub control_id: ControlId,
    pub choices: Vec<String>,
    pub selections: Vec<String>,
}

impl ControlSnapshot {
    pub fn capture<C>(control: &C, input: &ControlInput) -> Result<Self, RenderError>
    where
        C: MultiValueListControl + ?Sized,
    {
        let choices = control
            .choices_list(input)
            .map_err(|err| RenderError::collaborator("choices_list", err))?;
        let selections = control
            .slot_ids(input)
            .map_err(|err| RenderError::collaborator("slot_ids", err))?;

        Ok(Self {
            control_id: control.id().clone(),
            choices,
            selections,
        })
    }
}

/// A control whose state is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticListControl {
    pub id: ControlId,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub selections: Vec<String>,
}

impl StaticListControl {
    pub fn new(id: impl Into<String>, choices: Vec<String>, selections: Vec<String>) -> Self {
        Self {
            id: ControlId::new(id),
            choices,
            selections,
        }
    }
}

impl MultiValueListControl for StaticListControl {
    fn id(&self) -> &ControlId {
        &self.id
    }

    fn choices_list(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        Ok(self.choices.clone())
    }

    fn slot_ids(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        Ok(self.selections.clone())
    }
}

impl MultiValueListControl for ControlSnapshot {
    fn id(&self) -> &ControlId {
        &self.control_id
    }

    fn choices_list(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        Ok(self.choices.clone())
    }

    fn slot_ids(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        Ok(self.selections.clone())
    }
}
