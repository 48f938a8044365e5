use std::fmt;

use serde::{Deserialize, Serialize};
use shared::domain::{ControlId, ControlInput};
use tracing::debug;

use crate::{
    config::PresentationConfig,
    control::{ControlSnapshot, MultiValueListControl},
    error::RenderError,
    renderer::ValueRenderer,
    text::{TextKey, TextResolver},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Choices,
    Selections,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Choices => f.write_str("choices"),
            ListKind::Selections => f.write_str("selections"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub primary_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSection {
    pub list_items: Vec<ListItem>,
}

impl ListSection {
    pub fn len(&self) -> usize {
        self.list_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list_items.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.list_items
            .iter()
            .map(|item| item.primary_text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSection {
    pub header_title: String,
    pub header_subtitle: String,
    pub selection_list_title: String,
    pub selection_list_subtitle: String,
    pub submit_button_text: String,
    pub control_id: ControlId,
    pub debug: bool,
}

/// Everything the document's `${payload...}` references bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub general: GeneralSection,
    pub choices: ListSection,
    pub selections: ListSection,
}

impl RenderPayload {
    pub fn list(&self, kind: ListKind) -> &ListSection {
        match kind {
            ListKind::Choices => &self.choices,
            ListKind::Selections => &self.selections,
        }
    }
}

/// Reads the control's state and projects it into a data source.
pub fn multi_value_list_data_source<C, T>(
    control: &C,
    input: &ControlInput,
    config: &PresentationConfig,
    texts: &T,
) -> Result<RenderPayload, RenderError>
where
    C: MultiValueListControl + ?Sized,
    T: TextResolver + ?Sized,
{
    let snapshot = ControlSnapshot::capture(control, input)?;
    data_source_from_snapshot(&snapshot, input, config, texts)
}

/// Projects an already captured snapshot. Lists keep the snapshot's order and
/// length exactly; any renderer failure aborts the whole payload.
pub fn data_source_from_snapshot<T>(
    snapshot: &ControlSnapshot,
    input: &ControlInput,
    config: &PresentationConfig,
    texts: &T,
) -> Result<RenderPayload, RenderError>
where
    T: TextResolver + ?Sized,
{
    let choices = render_list(
        ListKind::Choices,
        &snapshot.choices,
        &config.value_renderer,
        input,
    )?;
    let selections = render_list(
        ListKind::Selections,
        &snapshot.selections,
        &config.value_renderer,
        input,
    )?;

    debug!(
        control_id = %snapshot.control_id,
        choices = choices.len(),
        selections = selections.len(),
        "built multi-value list data source"
    );

    Ok(RenderPayload {
        general: GeneralSection {
            header_title: resolve_text(&config.title, TextKey::HeaderTitle, texts),
            header_subtitle: resolve_text(&config.subtitle, TextKey::HeaderSubtitle, texts),
            selection_list_title: resolve_text(
                &config.selection_list_title,
                TextKey::SelectionTitle,
                texts,
            ),
            selection_list_subtitle: resolve_text(
                &config.selection_list_subtitle,
                TextKey::SelectionSubtitle,
                texts,
            ),
            submit_button_text: resolve_text(
                &config.submit_button_text,
                TextKey::SubmitText,
                texts,
            ),
            control_id: snapshot.control_id.clone(),
            debug: config.debug,
        },
        choices,
        selections,
    })
}

fn render_list(
    kind: ListKind,
    values: &[String],
    renderer: &ValueRenderer,
    input: &ControlInput,
) -> Result<ListSection, RenderError> {
    let list_items = values
        .iter()
        .map(|value| {
            renderer
                .render(value, input)
                .map(|primary_text| ListItem { primary_text })
                .map_err(|err| RenderError::renderer(kind, value, err))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ListSection { list_items })
}

fn resolve_text<T>(configured: &Option<String>, key: TextKey, texts: &T) -> String
where
    T: TextResolver + ?Sized,
{
    match configured {
        Some(text) => text.clone(),
        None => texts.lookup(key.as_str()),
    }
}

#[cfg(test)]
#[path = "tests/data_source_tests.rs"]
mod tests;
