use std::{
    cell::OnceCell,
    fmt,
    path::Path,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use font_kit::{
    error::{FontLoadingError, SelectionError},
    font::Font,
    source::{Source, SystemSource},
};

use crate::{
    backend::{path_from_file_uri, AtlasPopulationMode, FontAsset, TextBackend},
    error::LoadError,
};

static NEXT_ASSET_ID: AtomicU64 = AtomicU64::new(1);

/// [`TextBackend`] on top of `font-kit` and the platform's font source.
///
/// The system source is opened on the first lookup by name, so loading
/// font files never touches the platform font database.
pub struct FontKitBackend {
    source: OnceCell<SystemSource>,
}

impl FontKitBackend {
    pub fn new() -> Self {
        Self {
            source: OnceCell::new(),
        }
    }

    fn source(&self) -> &SystemSource {
        self.source.get_or_init(SystemSource::new)
    }

    fn select_by_family(&self, name: &str) -> Result<Option<Font>, LoadError> {
        let family = match Source::select_family_by_name(self.source(), name) {
            Ok(family) => family,
            Err(SelectionError::NotFound) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match family.fonts().first() {
            Some(handle) => loaded(handle.load()),
            None => Ok(None),
        }
    }

    fn select_by_postscript_name(&self, name: &str) -> Result<Option<Font>, LoadError> {
        match Source::select_by_postscript_name(self.source(), name) {
            Ok(handle) => loaded(handle.load()),
            Err(SelectionError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for FontKitBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn loaded(result: Result<Font, FontLoadingError>) -> Result<Option<Font>, LoadError> {
    match result {
        Ok(font) => Ok(Some(font)),
        Err(FontLoadingError::Io(err)) => Err(err.into()),
        Err(err) => {
            log::debug!("font rejected by font-kit: {}", err);
            Ok(None)
        }
    }
}

impl TextBackend for FontKitBackend {
    type Font = Font;
    type Asset = FontKitAsset;

    fn font_from_uri(&self, uri: &str) -> Result<Option<Font>, LoadError> {
        match path_from_file_uri(uri) {
            Some(path) => self.font_from_path(Path::new(&path)),
            None => Ok(None),
        }
    }

    fn font_from_path(&self, path: &Path) -> Result<Option<Font>, LoadError> {
        loaded(Font::from_path(path, 0))
    }

    fn font_from_name(&self, name: &str) -> Result<Option<Font>, LoadError> {
        if name.is_empty() {
            return Ok(None);
        }
        match self.select_by_family(name)? {
            Some(font) => Ok(Some(font)),
            None => self.select_by_postscript_name(name),
        }
    }

    fn create_font_asset(&self, font: Font) -> Result<Option<FontKitAsset>, LoadError> {
        // the asset must outlive a staged file, so keep the bytes in memory
        let data = match font.copy_font_data() {
            Some(data) => data,
            None => return Ok(None),
        };
        Ok(Some(FontKitAsset {
            id: NEXT_ASSET_ID.fetch_add(1, Ordering::Relaxed),
            name: font.full_name(),
            font,
            data,
            population_mode: AtlasPopulationMode::default(),
            padding: 0,
        }))
    }
}

#[derive(Clone)]
pub struct FontKitAsset {
    id: u64,
    font: Font,
    data: Arc<Vec<u8>>,
    name: String,
    population_mode: AtlasPopulationMode,
    padding: u32,
}

impl FontKitAsset {
    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for FontKitAsset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for FontKitAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontKitAsset")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("family", &self.font.family_name())
            .field("population_mode", &self.population_mode)
            .field("padding", &self.padding)
            .field("len", &self.data.len())
            .finish()
    }
}

impl FontAsset for FontKitAsset {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn atlas_population_mode(&self) -> AtlasPopulationMode {
        self.population_mode
    }

    fn set_atlas_population_mode(&mut self, mode: AtlasPopulationMode) {
        self.population_mode = mode;
    }

    fn atlas_padding(&self) -> u32 {
        self.padding
    }

    fn set_atlas_padding(&mut self, padding: u32) {
        self.padding = padding;
    }

    fn covers(&self, c: char) -> bool {
        self.font.glyph_for_char(c).is_some()
    }
}
