use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File};
use multi_value_list::{PresentationConfig, ValueRenderer};
use serde::Deserialize;

const ENV_PREFIX: &str = "WIDGET";
const DEFAULT_FILE: &str = "widget";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererStyle {
    Identity,
    Uppercase,
    TitleCase,
}

impl RendererStyle {
    pub fn value_renderer(self) -> ValueRenderer {
        match self {
            RendererStyle::Identity => ValueRenderer::identity(),
            RendererStyle::Uppercase => ValueRenderer::infallible(|value, _| value.to_uppercase()),
            RendererStyle::TitleCase => ValueRenderer::infallible(|value, _| title_case(value)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PresentationSettings {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub submit_button_text: Option<String>,
    pub selection_list_title: Option<String>,
    pub selection_list_subtitle: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub locale: String,
    pub renderer: RendererStyle,
    pub pretty: bool,
    #[serde(default)]
    pub presentation: PresentationSettings,
}

impl Settings {
    pub fn presentation_config(&self) -> PresentationConfig {
        let p = &self.presentation;
        PresentationConfig {
            title: p.title.clone(),
            subtitle: p.subtitle.clone(),
            submit_button_text: p.submit_button_text.clone(),
            selection_list_title: p.selection_list_title.clone(),
            selection_list_subtitle: p.selection_list_subtitle.clone(),
            debug: p.debug,
            value_renderer: self.renderer.value_renderer(),
        }
    }
}

/// Defaults, then `widget.toml` (or the explicit path), then `WIDGET__*` variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_FILE).required(false),
    };

    Config::builder()
        .set_default("locale", "en-US")?
        .set_default("renderer", "identity")?
        .set_default("pretty", true)?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .and_then(Config::try_deserialize)
        .with_context(|| match path {
            Some(path) => format!("failed to load settings from '{}'", path.display()),
            None => "failed to load settings".to_string(),
        })
}

fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
