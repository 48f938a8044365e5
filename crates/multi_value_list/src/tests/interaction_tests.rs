use serde_json::json;
use shared::domain::ControlId;

use super::*;
use crate::{
    apl::{AlexaButton, Container},
    config::PresentationConfig,
    content::{AplContent, ContentProvider},
    control::StaticListControl,
    renderer::ValueRenderer,
    text::TextBundle,
};

fn render(choices: &[&str], selections: &[&str], debug: bool) -> AplContent {
    let control = StaticListControl::new(
        "fruit",
        choices.iter().map(|s| s.to_string()).collect(),
        selections.iter().map(|s| s.to_string()).collect(),
    );
    ContentProvider::new(
        PresentationConfig::new(ValueRenderer::infallible(|v, _| v.to_uppercase()))
            .with_debug(debug),
        std::sync::Arc::new(TextBundle::builtin("en").expect("bundle")),
    )
    .render(&control, &Default::default())
    .expect("content")
}

fn ordinal(n: u32) -> Ordinal {
    Ordinal::new(n).expect("ordinal")
}

#[test]
fn initial_state_is_unlocked_and_quiet() {
    let content = render(&["a"], &[], false);
    let state = ViewState::initial(&content.document);
    assert_eq!(state, ViewState::default());
    assert!(!state.debug_visible(&content.data_source));
}

#[test]
fn selecting_second_choice_emits_select_two() {
    let content = render(&["apple", "banana", "cherry"], &[], false);
    let mut state = ViewState::initial(&content.document);

    let outcome = state
        .activate(
            &content.document,
            &content.data_source,
            Activation::Select(ordinal(2)),
        )
        .expect("activate");

    assert_eq!(
        outcome.event(),
        Some(&ControlEvent::Select {
            control_id: ControlId::from("fruit"),
            ordinal: ordinal(2),
        })
    );
    assert!(state.disable_screen);
    assert_eq!(state.debug_text, "selected 2");
}

#[test]
fn event_is_sent_before_screen_locks() {
    let content = render(&["a"], &["a"], false);
    for activation in [
        Activation::Complete,
        Activation::Select(ordinal(1)),
        Activation::Remove(ordinal(1)),
    ] {
        let mut state = ViewState::initial(&content.document);
        let outcome = state
            .activate(&content.document, &content.data_source, activation)
            .expect("activate");

        assert!(matches!(outcome.steps[0], Step::Sent(_)), "{activation:?}");
        assert_eq!(
            outcome.steps[1],
            Step::Set {
                property: DISABLE_SCREEN.into(),
                value: json!(true)
            }
        );
        assert!(matches!(
            &outcome.steps[2],
            Step::Set { property, .. } if property == DEBUG_TEXT
        ));
        assert_eq!(outcome.event().map(ControlEvent::kind), Some(activation.kind()));
    }
}

#[test]
fn locked_screen_ignores_list_activations() {
    let content = render(&["a", "b"], &["a"], false);
    let mut state = ViewState::initial(&content.document);

    state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(1)))
        .expect("first");
    let repeat = state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(2)))
        .expect("second");
    let swipe = state
        .activate(&content.document, &content.data_source, Activation::Remove(ordinal(1)))
        .expect("swipe");

    assert!(repeat.ignored());
    assert!(swipe.ignored());
    assert_eq!(state.debug_text, "selected 1");
}

#[test]
fn next_render_resets_the_lock() {
    let content = render(&["a"], &[], false);
    let mut state = ViewState::initial(&content.document);
    state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(1)))
        .expect("select");
    assert!(state.disable_screen);

    let rerendered = render(&["a"], &["a"], false);
    let state = ViewState::initial(&rerendered.document);
    assert!(!state.disable_screen);
}

#[test]
fn remove_uses_position_in_selections() {
    let content = render(&["a", "b", "c"], &["c", "a"], false);
    let mut state = ViewState::initial(&content.document);
    let outcome = state
        .activate(&content.document, &content.data_source, Activation::Remove(ordinal(2)))
        .expect("remove");

    assert_eq!(
        outcome.event(),
        Some(&ControlEvent::Remove {
            control_id: ControlId::from("fruit"),
            ordinal: ordinal(2),
        })
    );
    assert_eq!(state.debug_text, "removed 2");
}

#[test]
fn complete_reports_done() {
    let content = render(&[], &[], false);
    let mut state = ViewState::initial(&content.document);
    let outcome = state
        .activate(&content.document, &content.data_source, Activation::Complete)
        .expect("complete");
    assert_eq!(
        outcome.event(),
        Some(&ControlEvent::Complete {
            control_id: ControlId::from("fruit")
        })
    );
    assert_eq!(state.debug_text, "Done Selected");
}

#[test]
fn ordinal_past_rendered_list_is_rejected() {
    let content = render(&["a", "b"], &[], false);
    let mut state = ViewState::initial(&content.document);
    let err = state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(3)))
        .expect_err("should fail");
    assert!(matches!(
        err,
        InteractionError::OrdinalOutOfRange {
            list: ListKind::Choices,
            len: 2,
            ..
        }
    ));

    let err = state
        .activate(&content.document, &content.data_source, Activation::Remove(ordinal(1)))
        .expect_err("should fail");
    assert!(matches!(
        err,
        InteractionError::OrdinalOutOfRange {
            list: ListKind::Selections,
            len: 0,
            ..
        }
    ));
    assert!(!state.disable_screen);
}

#[test]
fn debug_flag_in_payload_shows_overlay() {
    let content = render(&["a"], &[], true);
    let state = ViewState::initial(&content.document);
    assert!(!state.show_debug);
    assert!(state.debug_visible(&content.data_source));
}

#[test]
fn missing_action_is_reported() {
    let mut content = render(&["a"], &[], false);
    content.document.main_template.items = vec![Component::Container(Container::default())];
    let mut state = ViewState::default();
    let err = state
        .activate(&content.document, &content.data_source, Activation::Complete)
        .expect_err("should fail");
    assert!(matches!(err, InteractionError::MissingAction("Complete")));
}

#[test]
fn set_value_on_unknown_property_fails() {
    let mut content = render(&["a"], &[], false);
    content.document.main_template.items = vec![Component::AlexaButton(AlexaButton {
        button_text: "Go".into(),
        id: COMPLETE_BUTTON_ID.into(),
        primary_action: Command::SetValue {
            component_id: ROOT_ID.into(),
            property: "volume".into(),
            value: json!(11),
        },
        right: "0".into(),
        top: "0".into(),
        position: "absolute".into(),
    })];
    let mut state = ViewState::default();
    let err = state
        .activate(&content.document, &content.data_source, Activation::Complete)
        .expect_err("should fail");
    assert!(matches!(
        err,
        InteractionError::UnknownProperty { ref property, .. } if property == "volume"
    ));
}

#[test]
fn locked_screen_ignores_stale_ordinals() {
    let content = render(&["a", "b"], &[], false);
    let mut state = ViewState::initial(&content.document);
    state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(1)))
        .expect("first");

    let stale = state
        .activate(&content.document, &content.data_source, Activation::Select(ordinal(5)))
        .expect("ignored");
    assert!(stale.ignored());
    assert_eq!(state.debug_text, "selected 1");
}

#[test]
fn failed_command_leaves_state_untouched() {
    let mut content = render(&["a"], &[], false);
    content.document.main_template.items = vec![Component::AlexaButton(AlexaButton {
        button_text: "Go".into(),
        id: COMPLETE_BUTTON_ID.into(),
        primary_action: Command::Sequential {
            commands: vec![
                Command::SendEvent {
                    arguments: vec!["${payload.general.controlId}".into(), "Complete".into()],
                },
                Command::SetValue {
                    component_id: ROOT_ID.into(),
                    property: DISABLE_SCREEN.into(),
                    value: json!(true),
                },
                Command::SetValue {
                    component_id: ROOT_ID.into(),
                    property: "volume".into(),
                    value: json!(11),
                },
            ],
        },
        right: "0".into(),
        top: "0".into(),
        position: "absolute".into(),
    })];
    let mut state = ViewState::default();
    state
        .activate(&content.document, &content.data_source, Activation::Complete)
        .expect_err("should fail");

    assert_eq!(state, ViewState::default());
}

#[test]
fn malformed_root_bind_keeps_default() {
    let mut content = render(&["a"], &[], false);
    if let Some(Component::Container(root)) = content.document.main_template.items.first_mut() {
        for binding in &mut root.bind {
            if binding.name == DISABLE_SCREEN {
                binding.value = json!("yes");
            }
        }
        root.bind.push(crate::apl::Binding {
            name: "volume".into(),
            binding_type: crate::apl::BindingType::String,
            value: json!("11"),
        });
    }

    let state = ViewState::initial(&content.document);
    assert_eq!(state, ViewState::default());
}
