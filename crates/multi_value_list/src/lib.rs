//! Screen content for a multi-value list control: a dual-pane APL document and
//! the data source it binds to.
//!
//! The document is static and data independent. The data source carries the
//! rendered choices, the current selections, header texts and the owning control's
//! id, which every emitted event echoes back.

pub mod apl;
pub mod binding;
pub mod config;
pub mod content;
pub mod control;
pub mod data_source;
pub mod document;
pub mod error;
pub mod interaction;
pub mod renderer;
pub mod text;

pub use config::PresentationConfig;
pub use content::{default_multi_value_list_content, AplContent, ContentProvider};
pub use control::{ControlSnapshot, MultiValueListControl, StaticListControl};
pub use data_source::{
    data_source_from_snapshot, multi_value_list_data_source, ListItem, ListKind, RenderPayload,
};
pub use document::multi_value_list_document;
pub use error::{BindingError, InteractionError, RenderError, TextError};
pub use interaction::{Activation, Outcome, Step, ViewState};
pub use renderer::ValueRenderer;
pub use text::{TextBundle, TextKey, TextResolver};
