use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use shared::{domain::ControlInput, protocol::EventKind};

use crate::{
    apl::{
        AlexaBackground, AlexaButton, AlexaHeader, AlexaSwipeToAction, AlexaTextListItem,
        AplDocument, Binding, BindingType, Command, Component, Container, GraphicPath, Import,
        MainTemplate, Sequence, Text, VectorGraphic,
    },
    control::MultiValueListControl,
};

pub const APL_VERSION: &str = "1.5";
pub const ROOT_ID: &str = "root";
pub const COMPLETE_BUTTON_ID: &str = "actionComplete";
pub const DEBUG_TEXT_ID: &str = "DebugText";
pub const CANCEL_ICON: &str = "cancel";

pub const DEBUG_TEXT: &str = "debugText";
pub const DISABLE_SCREEN: &str = "disableScreen";
pub const SHOW_DEBUG: &str = "showDebug";

pub const CHOICES_DATA: &str = "${payload.choices.listItems}";
pub const SELECTIONS_DATA: &str = "${payload.selections.listItems}";

const CONTROL_ID_REF: &str = "${payload.general.controlId}";
const ORDINAL_REF: &str = "${ordinal}";
const DISABLED_REF: &str = "${disableScreen}";

const CANCEL_PATH: &str = "M19.07 17.66L13.41 12l5.66-5.66C19.41 5.94 19.39 5.35 19.02 4.98 \
18.65 4.61 18.06 4.59 17.66 4.93L12 10.59 6.34 4.93C5.94 4.59 5.35 4.61 4.98 4.98 4.61 5.35 \
4.59 5.94 4.93 6.34L10.59 12l-5.66 5.66C4.64 17.9 4.52 18.29 4.61 18.65 4.7 19.02 4.98 19.3 \
5.35 19.39 5.71 19.48 6.1 19.36 6.34 19.07L12 13.41l5.66 5.66C18.06 19.41 18.65 19.39 19.02 \
19.02 19.39 18.65 19.41 18.06 19.07 17.66z";

/// Builds the dual-list document for a multi-value list control.
///
/// The document never reads the control's choices or selections. Everything that
/// varies between renders is a `${payload...}` reference resolved by the host
/// against the data source, so the result is identical for every call.
pub fn multi_value_list_document<C>(_control: &C, _input: &ControlInput) -> AplDocument
where
    C: MultiValueListControl + ?Sized,
{
    AplDocument {
        document_type: "APL".into(),
        version: APL_VERSION.into(),
        import: vec![Import {
            name: "alexa-layouts".into(),
            version: "1.2.0".into(),
        }],
        layouts: Map::new(),
        main_template: MainTemplate {
            parameters: vec!["payload".into()],
            items: vec![root_container()],
        },
        graphics: BTreeMap::from([(CANCEL_ICON.to_string(), cancel_icon())]),
    }
}

fn root_container() -> Component {
    Component::Container(Container {
        id: Some(ROOT_ID.into()),
        width: Some("100%".into()),
        bind: vec![
            binding(DEBUG_TEXT, BindingType::String, json!("")),
            binding(DISABLE_SCREEN, BindingType::Boolean, json!(false)),
            binding(SHOW_DEBUG, BindingType::Boolean, json!(false)),
        ],
        items: vec![
            Component::AlexaBackground(AlexaBackground::default()),
            Component::AlexaHeader(AlexaHeader {
                header_divider: true,
                header_title: "${payload.general.headerTitle}".into(),
                header_subtitle: "${payload.general.headerSubtitle}".into(),
                height: "20vh".into(),
            }),
            complete_button(),
            debug_text(),
            Component::Container(Container {
                padding_right: Some("@marginHorizontal".into()),
                padding_top: Some("@spacingSmall".into()),
                direction: Some("row".into()),
                width: Some("100%".into()),
                shrink: Some(1),
                items: vec![choices_pane(), selections_pane()],
                ..Container::default()
            }),
        ],
        ..Container::default()
    })
}

fn binding(name: &str, binding_type: BindingType, value: Value) -> Binding {
    Binding {
        name: name.into(),
        binding_type,
        value,
    }
}

fn complete_button() -> Component {
    Component::AlexaButton(AlexaButton {
        button_text: "${payload.general.submitButtonText}".into(),
        id: COMPLETE_BUTTON_ID.into(),
        primary_action: transition(EventKind::Complete, "Done Selected"),
        right: "@marginHorizontal".into(),
        top: "${@viewportProfile == @hubLandscapeSmall ? '1vw' : '2vw'}".into(),
        position: "absolute".into(),
    })
}

// Visible when a user toggles the transient flag or the payload asks for it.
fn debug_text() -> Component {
    Component::Text(Text {
        id: Some(DEBUG_TEXT_ID.into()),
        text: format!("${{{DEBUG_TEXT}}}"),
        display: Some(format!(
            "${{{SHOW_DEBUG} || payload.general.debug ? 'normal' : 'invisible'}}"
        )),
        position: Some("absolute".into()),
        right: Some("0vw".into()),
        ..Text::default()
    })
}

fn choices_pane() -> Component {
    let item = Component::AlexaTextListItem(AlexaTextListItem {
        touch_forward: true,
        disabled: DISABLED_REF.into(),
        primary_text: "${data.primaryText}".into(),
        primary_action: transition(EventKind::Select, "selected ${ordinal}"),
    });

    pane(vec![numbered_sequence(CHOICES_DATA, item)])
}

fn selections_pane() -> Component {
    let item = Component::AlexaSwipeToAction(AlexaSwipeToAction {
        touch_forward: true,
        hide_ordinal: true,
        theme: "light".into(),
        action_icon_type: "AVG".into(),
        action_icon: CANCEL_ICON.into(),
        action_icon_background: "red".into(),
        disabled: DISABLED_REF.into(),
        primary_text: "${data.primaryText}".into(),
        on_swipe_done: transition(EventKind::Remove, "removed ${ordinal}"),
    });

    pane(vec![
        Component::AlexaBackground(AlexaBackground {
            background_color: Some("white".into()),
        }),
        pane_heading(
            "textStyleMetadata",
            Some("@spacingXSmall"),
            "${payload.general.selectionListTitle}",
        ),
        pane_heading(
            "textStyleMetadataAlt",
            None,
            "${payload.general.selectionListSubtitle}",
        ),
        numbered_sequence(SELECTIONS_DATA, item),
    ])
}

fn pane(items: Vec<Component>) -> Component {
    Component::Container(Container {
        width: Some("55%".into()),
        height: Some("80vh".into()),
        items,
        ..Container::default()
    })
}

fn pane_heading(style: &str, padding_top: Option<&str>, text: &str) -> Component {
    Component::Text(Text {
        style: Some(style.into()),
        color: Some("black".into()),
        text_align: Some("center".into()),
        text_align_vertical: Some("center".into()),
        max_lines: Some(1),
        padding_top: padding_top.map(str::to_string),
        text: text.into(),
        ..Text::default()
    })
}

fn numbered_sequence(data: &str, item: Component) -> Component {
    Component::Sequence(Sequence {
        scroll_direction: "vertical".into(),
        data: data.into(),
        width: "100%".into(),
        padding_left: "0".into(),
        numbered: true,
        grow: 1,
        items: vec![Component::Container(Container {
            items: vec![item],
            ..Container::default()
        })],
    })
}

/// Emits `kind` for the owning control, then locks the screen.
///
/// The event goes out before `disableScreen` is set; some hosts drop the first
/// dispatch when the lock lands first.
fn transition(kind: EventKind, debug_text: &str) -> Command {
    let mut arguments = vec![CONTROL_ID_REF.to_string(), kind.as_str().to_string()];
    if kind != EventKind::Complete {
        arguments.push(ORDINAL_REF.to_string());
    }

    Command::Sequential {
        commands: vec![
            Command::SendEvent { arguments },
            set_root(DISABLE_SCREEN, json!(true)),
            set_root(DEBUG_TEXT, json!(debug_text)),
        ],
    }
}

fn set_root(property: &str, value: Value) -> Command {
    Command::SetValue {
        component_id: ROOT_ID.into(),
        property: property.into(),
        value,
    }
}

fn cancel_icon() -> VectorGraphic {
    VectorGraphic {
        graphic_type: "AVG".into(),
        version: "1.0".into(),
        width: 24,
        height: 24,
        parameters: vec!["fillColor".into()],
        items: vec![GraphicPath {
            path_type: "path".into(),
            fill: "${fillColor}".into(),
            path_data: CANCEL_PATH.into(),
        }],
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
