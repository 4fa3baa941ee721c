use std::path::Path;

use crate::{error::LoadError, staging::StagedFont};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtlasPopulationMode {
    #[default]
    Static,
    /// Glyphs are added to the atlas as text asks for them.
    Dynamic,
}

/// A renderable font asset produced by a [`TextBackend`].
pub trait FontAsset {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn atlas_population_mode(&self) -> AtlasPopulationMode;
    fn set_atlas_population_mode(&mut self, mode: AtlasPopulationMode);
    fn atlas_padding(&self) -> u32;
    fn set_atlas_padding(&mut self, padding: u32);

    /// Whether the asset has a glyph for `c`. Backends that cannot tell
    /// report `true`.
    fn covers(&self, _c: char) -> bool {
        true
    }
}

/// The text-rendering subsystem that fonts are constructed by.
///
/// Constructors return `Ok(None)` when the input simply isn't a usable font
/// and reserve `Err` for real failures (I/O, backend faults).
pub trait TextBackend {
    type Font;
    type Asset: FontAsset;

    fn font_from_uri(&self, uri: &str) -> Result<Option<Self::Font>, LoadError>;
    fn font_from_path(&self, path: &Path) -> Result<Option<Self::Font>, LoadError>;
    fn font_from_name(&self, name: &str) -> Result<Option<Self::Font>, LoadError>;
    fn create_font_asset(&self, font: Self::Font) -> Result<Option<Self::Asset>, LoadError>;
}

/// Ways of turning a staged font file into a backend font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStrategy {
    FileUri,
    FilePath,
    /// The original file stem, looked up like a system font name.
    BareName,
}

impl LoadStrategy {
    pub const DEFAULT: &'static [LoadStrategy] = &[
        LoadStrategy::FileUri,
        LoadStrategy::FilePath,
        LoadStrategy::BareName,
    ];

    pub fn load<B: TextBackend>(
        self,
        backend: &B,
        staged: &StagedFont,
    ) -> Result<Option<B::Font>, LoadError> {
        match self {
            LoadStrategy::FileUri => backend.font_from_uri(&file_uri(staged.path())),
            LoadStrategy::FilePath => backend.font_from_path(staged.path()),
            LoadStrategy::BareName => backend.font_from_name(staged.stem()),
        }
    }
}

/// `file:///` followed by the path with backslashes turned into slashes.
pub fn file_uri(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    format!("file:///{}", path.trim_start_matches('/'))
}

/// Inverse of [`file_uri`]; `None` if `uri` is not a file URI.
pub fn path_from_file_uri(uri: &str) -> Option<String> {
    let rest = uri.strip_prefix("file://")?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    // drive-letter paths stay relative to the drive, everything else is rooted
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(rest.to_string())
    } else {
        Some(format!("/{}", rest))
    }
}
