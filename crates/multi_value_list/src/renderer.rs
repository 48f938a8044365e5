use std::{fmt, sync::Arc};

use shared::domain::ControlInput;

type RenderFn = dyn Fn(&str, &ControlInput) -> anyhow::Result<String> + Send + Sync;

/// Maps a choice identifier to the text shown for it on screen.
///
/// Called once per list item per render, for both lists, so it should be pure.
#[derive(Clone)]
pub struct ValueRenderer(Arc<RenderFn>);

impl ValueRenderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&str, &ControlInput) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    pub fn infallible<F>(render: F) -> Self
    where
        F: Fn(&str, &ControlInput) -> String + Send + Sync + 'static,
    {
        Self::new(move |value, input| Ok(render(value, input)))
    }

    /// Shows identifiers unchanged.
    pub fn identity() -> Self {
        Self::infallible(|value, _| value.to_string())
    }

    pub fn render(&self, value: &str, input: &ControlInput) -> anyhow::Result<String> {
        (self.0)(value, input)
    }
}

impl Default for ValueRenderer {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for ValueRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueRenderer(..)")
    }
}
