use serde::{Deserialize, Serialize};

use crate::renderer::ValueRenderer;

/// Presentation options for the multi-value list screen.
///
/// Text fields left as `None` fall back to the locale's default text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub submit_button_text: Option<String>,
    #[serde(default)]
    pub selection_list_title: Option<String>,
    #[serde(default)]
    pub selection_list_subtitle: Option<String>,
    #[serde(default)]
    pub debug: bool,
    #[serde(skip)]
    pub value_renderer: ValueRenderer,
}

impl PresentationConfig {
    pub fn new(value_renderer: ValueRenderer) -> Self {
        Self {
            value_renderer,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_submit_button_text(mut self, text: impl Into<String>) -> Self {
        self.submit_button_text = Some(text.into());
        self
    }

    pub fn with_selection_list_title(mut self, title: impl Into<String>) -> Self {
        self.selection_list_title = Some(title.into());
        self
    }

    pub fn with_selection_list_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.selection_list_subtitle = Some(subtitle.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_value_renderer(mut self, value_renderer: ValueRenderer) -> Self {
        self.value_renderer = value_renderer;
        self
    }
}
