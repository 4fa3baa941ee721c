use std::path::PathBuf;

use crate::{
    backend::{AtlasPopulationMode, LoadStrategy},
    source::{DEFAULT_FONT_FILES, DEFAULT_SYSTEM_FONTS},
};

pub const DEFAULT_ATLAS_PADDING: u32 = 5;
pub const DEFAULT_TEMP_PREFIX: &str = "ThaiFontMod";

/// Settings for a single resolution run.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub atlas_padding: u32,
    pub atlas_population_mode: AtlasPopulationMode,
    /// Where file candidates are staged before construction.
    pub temp_dir: PathBuf,
    pub temp_prefix: String,
    /// Tried in order for every staged file.
    pub strategies: Vec<LoadStrategy>,
    /// When set, a constructed asset without a glyph for this char is a miss.
    pub required_char: Option<char>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            atlas_padding: DEFAULT_ATLAS_PADDING,
            atlas_population_mode: AtlasPopulationMode::Dynamic,
            temp_dir: std::env::temp_dir(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            strategies: LoadStrategy::DEFAULT.to_vec(),
            required_char: None,
        }
    }
}

/// Everything the plugin entry point needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub plugin_dir: PathBuf,
    pub font_files: Vec<String>,
    pub system_fonts: Vec<String>,
    pub resolver: ResolverConfig,
}

impl PluginConfig {
    pub fn new(plugin_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            font_files: DEFAULT_FONT_FILES.iter().map(|s| s.to_string()).collect(),
            system_fonts: DEFAULT_SYSTEM_FONTS.iter().map(|s| s.to_string()).collect(),
            resolver: ResolverConfig::default(),
        }
    }
}
