//! Finds a Thai-capable font, either bundled next to the plugin or installed
//! on the system, and registers it as the text system's fallback and default
//! font.
//!
//! Resolution is best-effort: every candidate failure is logged and skipped,
//! and running out of candidates is an ordinary [`SearchResult::NotFound`].

mod backend;
mod config;
mod error;
mod font;
mod plugin;
mod resolver;
mod settings;
mod source;
mod staging;

pub use backend::{
    file_uri, path_from_file_uri, AtlasPopulationMode, FontAsset, LoadStrategy, TextBackend,
};
pub use config::{PluginConfig, ResolverConfig, DEFAULT_ATLAS_PADDING, DEFAULT_TEMP_PREFIX};
pub use error::{LoadError, MissReason, ResolveError, SettingsError};
pub use font::{FontKitAsset, FontKitBackend};
pub use plugin::{FallbackPlugin, LoadReport};
pub use resolver::{FontResolver, ResolvedFont, SearchResult};
pub use settings::{apply_fallback, FontSettings, Registration, TextSettings};
pub use source::{
    default_sources, display_name, file_sources, named_sources, FontSource, Provenance,
    DEFAULT_FONT_FILES, DEFAULT_SYSTEM_FONTS,
};
pub use staging::StagedFont;

pub type ThaiFontPlugin = FallbackPlugin<FontKitBackend>;
