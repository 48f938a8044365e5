use std::cell::Cell;

use shared::domain::ControlId;

use super::*;
use crate::{
    control::StaticListControl, data_source::multi_value_list_data_source,
    renderer::ValueRenderer, text::TextBundle,
};

fn provider(config: PresentationConfig) -> ContentProvider {
    ContentProvider::new(
        config,
        Arc::new(TextBundle::builtin("en-US").expect("bundle")),
    )
}

fn fruit() -> StaticListControl {
    StaticListControl::new(
        "fruit",
        vec!["apple".into(), "banana".into(), "cherry".into()],
        vec!["cherry".into()],
    )
}

#[test]
fn content_pairs_document_and_data_source() {
    let content = provider(PresentationConfig::default())
        .render(&fruit(), &ControlInput::default())
        .expect("content");

    let value = serde_json::to_value(&content).expect("serialize");
    assert_eq!(value["document"]["type"], "APL");
    assert_eq!(value["dataSource"]["general"]["controlId"], "fruit");
    assert_eq!(
        value["dataSource"]["choices"]["listItems"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
    assert_eq!(
        value["dataSource"]["selections"]["listItems"][0]["primaryText"],
        "cherry"
    );
}

#[test]
fn data_source_matches_standalone_generator() {
    let config = PresentationConfig::default().with_title("Fruit salad");
    let texts = TextBundle::builtin("en-US").expect("bundle");
    let content = provider(config.clone())
        .render(&fruit(), &ControlInput::default())
        .expect("content");
    let standalone =
        multi_value_list_data_source(&fruit(), &ControlInput::default(), &config, &texts)
            .expect("payload");
    assert_eq!(content.data_source, standalone);
}

#[test]
fn rendering_is_idempotent() {
    let provider = provider(
        PresentationConfig::new(ValueRenderer::infallible(|v, _| v.to_uppercase())).with_debug(true),
    );
    let first = provider
        .render(&fruit(), &ControlInput::default())
        .expect("content");
    let second = provider
        .render(&fruit(), &ControlInput::default())
        .expect("content");
    assert_eq!(
        serde_json::to_vec(&first).expect("serialize"),
        serde_json::to_vec(&second).expect("serialize")
    );
}

/// Returns a different list on every read, to catch double reads.
struct DriftingControl {
    id: ControlId,
    reads: Cell<usize>,
}

impl MultiValueListControl for DriftingControl {
    fn id(&self) -> &ControlId {
        &self.id
    }

    fn choices_list(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        Ok((0..reads).map(|i| format!("item-{i}")).collect())
    }

    fn slot_ids(&self, _input: &ControlInput) -> anyhow::Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[test]
fn control_state_is_read_once_per_request() {
    let control = DriftingControl {
        id: ControlId::from("drift"),
        reads: Cell::new(0),
    };
    let content = provider(PresentationConfig::default())
        .render(&control, &ControlInput::default())
        .expect("content");

    assert_eq!(control.reads.get(), 1);
    assert_eq!(content.data_source.choices.texts(), vec!["item-0"]);
}

#[test]
fn render_fn_accepts_trait_objects() {
    let render = default_multi_value_list_content(
        PresentationConfig::default().with_subtitle("Tap to add"),
        Arc::new(|key: &str| key.to_lowercase()),
    );
    let control: Box<dyn MultiValueListControl> = Box::new(fruit());
    let content = render(control.as_ref(), &ControlInput::default()).expect("content");

    assert_eq!(content.data_source.general.header_subtitle, "Tap to add");
    assert_eq!(
        content.data_source.general.header_title,
        "multivaluelist_control_default_apl_header_title"
    );
}

#[test]
fn renderer_failure_yields_no_content() {
    let provider = provider(PresentationConfig::new(ValueRenderer::new(|value, _| {
        anyhow::ensure!(value != "banana", "cannot render banana");
        Ok(value.to_string())
    })));
    let err = provider
        .render(&fruit(), &ControlInput::default())
        .expect_err("should fail");
    assert!(matches!(err, RenderError::Renderer { ref value, .. } if value == "banana"));
}
