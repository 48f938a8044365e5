use serde_json::json;

use crate::{
    domain::{ControlId, Ordinal},
    error::EventError,
    protocol::{ControlEvent, EventKind},
};

fn args(value: serde_json::Value) -> Vec<serde_json::Value> {
    value.as_array().cloned().expect("array")
}

#[test]
fn decodes_select_with_numeric_ordinal() {
    let event = ControlEvent::from_arguments(&args(json!(["shopping", "Select", 2])))
        .expect("decode");
    assert_eq!(
        event,
        ControlEvent::Select {
            control_id: ControlId::from("shopping"),
            ordinal: Ordinal::new(2).expect("ordinal"),
        }
    );
}

#[test]
fn decodes_remove_with_string_ordinal() {
    let event =
        ControlEvent::from_arguments(&args(json!(["shopping", "Remove", "3"]))).expect("decode");
    assert_eq!(event.kind(), EventKind::Remove);
    assert_eq!(event.ordinal().map(Ordinal::get), Some(3));
}

#[test]
fn decodes_complete_without_ordinal() {
    let event = ControlEvent::from_arguments(&args(json!(["shopping", "Complete"]))).expect("decode");
    assert_eq!(
        event,
        ControlEvent::Complete {
            control_id: ControlId::from("shopping")
        }
    );
    assert_eq!(event.ordinal(), None);
}

#[test]
fn rejects_zero_and_negative_ordinals() {
    for raw in [json!(0), json!(-1), json!("0"), json!(1.5), json!(null)] {
        let err = ControlEvent::from_arguments(&[json!("c"), json!("Select"), raw.clone()])
            .expect_err("should fail");
        assert!(
            matches!(err, EventError::InvalidOrdinal(_)),
            "unexpected error for {raw}: {err:?}"
        );
    }
}

#[test]
fn rejects_unknown_kind_and_missing_pieces() {
    assert_eq!(
        ControlEvent::from_arguments(&args(json!(["c", "Toggle", 1]))),
        Err(EventError::UnknownKind("Toggle".into()))
    );
    assert_eq!(
        ControlEvent::from_arguments(&args(json!(["c", "Select"]))),
        Err(EventError::MissingArgument { position: 2 })
    );
    assert_eq!(
        ControlEvent::from_arguments(&[]),
        Err(EventError::MissingArgument { position: 0 })
    );
    assert_eq!(
        ControlEvent::from_arguments(&args(json!([7, "Select", 1]))),
        Err(EventError::NotAString { position: 0 })
    );
    assert_eq!(
        ControlEvent::from_arguments(&args(json!(["", "Complete"]))),
        Err(EventError::EmptyControlId)
    );
}

#[test]
fn rejects_trailing_arguments() {
    let err = ControlEvent::from_arguments(&args(json!(["c", "Complete", 1])))
        .expect_err("should fail");
    assert_eq!(
        err,
        EventError::TrailingArguments {
            kind: "Complete",
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn to_arguments_matches_host_shape() {
    let event = ControlEvent::Remove {
        control_id: ControlId::from("shopping"),
        ordinal: Ordinal::new(4).expect("ordinal"),
    };
    assert_eq!(
        serde_json::Value::Array(event.to_arguments()),
        json!(["shopping", "Remove", 4])
    );
    assert_eq!(
        ControlEvent::from_arguments(&event.to_arguments()).expect("decode"),
        event
    );
}

#[test]
fn serializes_with_type_tag() {
    let event = ControlEvent::Select {
        control_id: ControlId::from("c1"),
        ordinal: Ordinal::new(1).expect("ordinal"),
    };
    let value = serde_json::to_value(&event).expect("serialize");
    assert_eq!(value["type"], "select");
    assert_eq!(value["payload"]["control_id"], "c1");
    assert_eq!(value["payload"]["ordinal"], 1);
}

#[test]
fn ordinal_deserialization_rejects_zero() {
    assert!(serde_json::from_value::<Ordinal>(json!(0)).is_err());
    assert_eq!(
        serde_json::from_value::<Ordinal>(json!(5)).expect("ordinal").index(),
        4
    );
}

#[test]
fn generated_control_ids_are_unique_and_prefixed() {
    let a = ControlId::generate();
    let b = ControlId::generate();
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("multiValueList-"));
}
