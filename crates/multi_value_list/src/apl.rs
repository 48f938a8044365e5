//! Typed model of the subset of APL the multi-value list document uses.
//!
//! Field names serialize to the camelCase property names the host runtime expects.
//! Values that the host evaluates at render time (`${...}` expressions) are kept
//! as plain strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AplDocument {
    #[serde(rename = "type")]
    pub document_type: String,
    pub version: String,
    pub import: Vec<Import>,
    pub layouts: Map<String, Value>,
    pub main_template: MainTemplate,
    pub graphics: BTreeMap<String, VectorGraphic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainTemplate {
    pub parameters: Vec<String>,
    pub items: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    Container(Container),
    AlexaBackground(AlexaBackground),
    AlexaHeader(AlexaHeader),
    AlexaButton(AlexaButton),
    Text(Text),
    Sequence(Sequence),
    AlexaTextListItem(AlexaTextListItem),
    AlexaSwipeToAction(AlexaSwipeToAction),
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Container(c) => c.id.as_deref(),
            Component::AlexaButton(b) => Some(&b.id),
            Component::Text(t) => t.id.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Component] {
        match self {
            Component::Container(c) => &c.items,
            Component::Sequence(s) => &s.items,
            _ => &[],
        }
    }
}

/// Transient view state declared on a component with `bind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    #[serde(rename = "type")]
    pub binding_type: BindingType,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingType {
    String,
    Boolean,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrink: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind: Vec<Binding>,
    #[serde(default)]
    pub items: Vec<Component>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaBackground {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaHeader {
    pub header_divider: bool,
    pub header_title: String,
    pub header_subtitle: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaButton {
    pub button_text: String,
    pub id: String,
    pub primary_action: Command,
    pub right: String,
    pub top: String,
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    pub scroll_direction: String,
    pub data: String,
    pub width: String,
    pub padding_left: String,
    pub numbered: bool,
    pub grow: u32,
    pub items: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaTextListItem {
    pub touch_forward: bool,
    pub disabled: String,
    pub primary_text: String,
    pub primary_action: Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaSwipeToAction {
    pub touch_forward: bool,
    pub hide_ordinal: bool,
    pub theme: String,
    pub action_icon_type: String,
    pub action_icon: String,
    pub action_icon_background: String,
    pub disabled: String,
    pub primary_text: String,
    pub on_swipe_done: Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Sequential {
        commands: Vec<Command>,
    },
    SendEvent {
        arguments: Vec<String>,
    },
    SetValue {
        #[serde(rename = "componentId")]
        component_id: String,
        property: String,
        value: Value,
    },
}

impl Command {
    /// Commands in execution order, with `Sequential` groups flattened.
    pub fn flatten(&self) -> Vec<&Command> {
        match self {
            Command::Sequential { commands } => commands.iter().flat_map(Command::flatten).collect(),
            other => vec![other],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorGraphic {
    #[serde(rename = "type")]
    pub graphic_type: String,
    pub version: String,
    pub width: u32,
    pub height: u32,
    pub parameters: Vec<String>,
    pub items: Vec<GraphicPath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicPath {
    #[serde(rename = "type")]
    pub path_type: String,
    pub fill: String,
    pub path_data: String,
}

impl AplDocument {
    /// Every component in the main template, depth first in document order.
    pub fn components(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        let mut stack: Vec<&Component> = self.main_template.items.iter().rev().collect();
        while let Some(component) = stack.pop() {
            out.push(component);
            stack.extend(component.children().iter().rev());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Component> {
        self.components()
            .into_iter()
            .find(|component| component.id() == Some(id))
    }

    /// The scrolling list regions in document order.
    pub fn sequences(&self) -> Vec<&Sequence> {
        self.components()
            .into_iter()
            .filter_map(|component| match component {
                Component::Sequence(sequence) => Some(sequence),
                _ => None,
            })
            .collect()
    }
}
