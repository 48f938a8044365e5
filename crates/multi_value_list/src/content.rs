use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::domain::ControlInput;
use tracing::debug;

use crate::{
    apl::AplDocument,
    config::PresentationConfig,
    control::{ControlSnapshot, MultiValueListControl},
    data_source::{data_source_from_snapshot, RenderPayload},
    document::multi_value_list_document,
    error::RenderError,
    text::TextResolver,
};

/// A document and the data source it binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AplContent {
    pub document: AplDocument,
    pub data_source: RenderPayload,
}

/// Binds presentation options once and renders screen content per request.
#[derive(Clone)]
pub struct ContentProvider {
    config: PresentationConfig,
    texts: Arc<dyn TextResolver + Send + Sync>,
}

impl ContentProvider {
    pub fn new(config: PresentationConfig, texts: Arc<dyn TextResolver + Send + Sync>) -> Self {
        Self { config, texts }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Control state is read once; the document and the data source are both
    /// built from that single snapshot.
    pub fn render<C>(&self, control: &C, input: &ControlInput) -> Result<AplContent, RenderError>
    where
        C: MultiValueListControl + ?Sized,
    {
        let snapshot = ControlSnapshot::capture(control, input)?;
        let document = multi_value_list_document(&snapshot, input);
        let data_source = data_source_from_snapshot(&snapshot, input, &self.config, &*self.texts)?;

        debug!(control_id = %snapshot.control_id, locale = %input.locale, "rendered multi-value list content");
        Ok(AplContent {
            document,
            data_source,
        })
    }

    pub fn into_render_fn(
        self,
    ) -> impl Fn(&dyn MultiValueListControl, &ControlInput) -> Result<AplContent, RenderError> {
        move |control, input| self.render(control, input)
    }
}

/// Binds `config` and `texts`, returning the per-request render function.
pub fn default_multi_value_list_content(
    config: PresentationConfig,
    texts: Arc<dyn TextResolver + Send + Sync>,
) -> impl Fn(&dyn MultiValueListControl, &ControlInput) -> Result<AplContent, RenderError> {
    ContentProvider::new(config, texts).into_render_fn()
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
