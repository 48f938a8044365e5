use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use multi_value_list::{Activation, AplContent, ContentProvider, TextBundle, ViewState};
use serde::Serialize;
use serde_json::{json, Value};
use shared::{
    domain::{ControlInput, Ordinal},
    protocol::ControlEvent,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod scene;
mod settings;

use scene::Scene;
use settings::{load_settings, RendererStyle, Settings};

#[derive(Parser, Debug)]
#[command(name = "widget", about = "Render and exercise multi-value list screen content")]
struct Cli {
    /// Settings file; defaults to ./widget.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    locale: Option<String>,
    #[arg(long, global = true, value_enum)]
    renderer: Option<RendererArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the document and data source for a scene.
    Render {
        scene: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a scene, then replay one touch action against it.
    Simulate {
        scene: PathBuf,
        #[command(subcommand)]
        action: ActionArg,
    },
    /// Decode a host event argument array, e.g. '["id","Select",2]'.
    Decode { arguments: String },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ActionArg {
    Complete,
    Select { ordinal: u32 },
    Remove { ordinal: u32 },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum RendererArg {
    Identity,
    Uppercase,
    TitleCase,
}

impl From<RendererArg> for RendererStyle {
    fn from(value: RendererArg) -> Self {
        match value {
            RendererArg::Identity => RendererStyle::Identity,
            RendererArg::Uppercase => RendererStyle::Uppercase,
            RendererArg::TitleCase => RendererStyle::TitleCase,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationReport<'a> {
    ignored: bool,
    event: Option<&'a ControlEvent>,
    arguments: Option<Vec<Value>>,
    view_state: &'a ViewState,
    debug_visible: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if let Some(renderer) = cli.renderer {
        settings.renderer = renderer.into();
    }

    match cli.command {
        Command::Render { scene, out } => {
            let content = render_scene(&settings, &scene)?;
            let text = to_json(&content, settings.pretty)?;
            match out {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    info!(path = %path.display(), "wrote content");
                }
                None => println!("{text}"),
            }
        }
        Command::Simulate { scene, action } => {
            let content = render_scene(&settings, &scene)?;
            let activation = activation(action)?;
            let mut view = ViewState::initial(&content.document);
            let outcome = view.activate(&content.document, &content.data_source, activation)?;
            let event = outcome.event();
            let report = SimulationReport {
                ignored: outcome.ignored(),
                event,
                arguments: event.map(ControlEvent::to_arguments),
                view_state: &view,
                debug_visible: view.debug_visible(&content.data_source),
            };
            println!("{}", to_json(&report, settings.pretty)?);
        }
        Command::Decode { arguments } => {
            let raw: Vec<Value> = serde_json::from_str(&arguments)
                .context("arguments must be a JSON array")?;
            let event = ControlEvent::from_arguments(&raw)?;
            let kind = event.kind();
            println!(
                "{}",
                to_json(&json!({ "event": event, "kind": kind }), settings.pretty)?
            );
        }
    }

    Ok(())
}

fn render_scene(settings: &Settings, path: &Path) -> Result<AplContent> {
    let control = Scene::load(path)?.into_control();
    let texts = TextBundle::builtin(&settings.locale)?;
    let provider = ContentProvider::new(settings.presentation_config(), Arc::new(texts));
    let input = ControlInput::new(settings.locale.clone());

    let content = provider.render(&control, &input)?;
    info!(
        control_id = %control.id,
        locale = %input.locale,
        choices = content.data_source.choices.len(),
        selections = content.data_source.selections.len(),
        "rendered scene"
    );
    Ok(content)
}

fn activation(action: ActionArg) -> Result<Activation> {
    let ordinal = |n: u32| Ordinal::new(n).context("ordinal must be a positive integer");
    Ok(match action {
        ActionArg::Complete => Activation::Complete,
        ActionArg::Select { ordinal: n } => Activation::Select(ordinal(n)?),
        ActionArg::Remove { ordinal: n } => Activation::Remove(ordinal(n)?),
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
