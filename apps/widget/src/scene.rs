use std::{fs, path::Path};

use anyhow::Context;
use multi_value_list::StaticListControl;
use serde::Deserialize;
use shared::domain::ControlId;
use tracing::info;

/// Control state to render, as written in a scene file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scene {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub selections: Vec<String>,
}

impl Scene {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let scene: Scene = toml::from_str(raw)?;
        if scene.id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            anyhow::bail!("scene id must not be empty");
        }
        Ok(scene)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene '{}'", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid scene '{}'", path.display()))
    }

    pub fn into_control(self) -> StaticListControl {
        let id = match self.id {
            Some(id) => ControlId::new(id),
            None => {
                let id = ControlId::generate();
                info!(control_id = %id, "scene has no id, generated one");
                id
            }
        };
        StaticListControl {
            id,
            choices: self.choices,
            selections: self.selections,
        }
    }
}
