//! Fake text backend and scratch directories shared by the integration tests.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use font_fallback::{
    path_from_file_uri, AtlasPopulationMode, FontAsset, LoadError, ResolverConfig, TextBackend,
};

/// Files starting with these bytes are "valid fonts" to [`FakeBackend`].
pub const FONT_MAGIC: &[u8] = b"FAKEFONT";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Uri(String),
    Path(PathBuf),
    Name(String),
    Asset(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeFont {
    origin: String,
    thai: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeAsset {
    pub origin: String,
    pub name: String,
    pub mode: AtlasPopulationMode,
    pub padding: u32,
    pub thai: bool,
}

impl FontAsset for FakeAsset {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn atlas_population_mode(&self) -> AtlasPopulationMode {
        self.mode
    }

    fn set_atlas_population_mode(&mut self, mode: AtlasPopulationMode) {
        self.mode = mode;
    }

    fn atlas_padding(&self) -> u32 {
        self.padding
    }

    fn set_atlas_padding(&mut self, padding: u32) {
        self.padding = padding;
    }

    fn covers(&self, c: char) -> bool {
        c.is_ascii() || self.thai
    }
}

/// Records every call; staged files are checked for existence when read.
pub struct FakeBackend {
    pub uri_loads: bool,
    pub path_loads: bool,
    pub system_fonts: Vec<String>,
    pub thai_fonts: Vec<String>,
    pub failing_names: Vec<String>,
    pub reject_assets: bool,
    calls: RefCell<Vec<Call>>,
    staged: RefCell<Vec<(PathBuf, bool)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            uri_loads: true,
            path_loads: true,
            system_fonts: Vec::new(),
            thai_fonts: Vec::new(),
            failing_names: Vec::new(),
            reject_assets: false,
            calls: RefCell::new(Vec::new()),
            staged: RefCell::new(Vec::new()),
        }
    }

    pub fn with_system_fonts(names: &[&str]) -> Self {
        let mut backend = Self::new();
        backend.system_fonts = names.iter().map(|s| s.to_string()).collect();
        backend
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn name_lookups(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Name(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every staged path the backend was handed, and whether it existed then.
    pub fn staged(&self) -> Vec<(PathBuf, bool)> {
        self.staged.borrow().clone()
    }

    fn read_staged(&self, path: &Path) -> Option<FakeFont> {
        let exists = path.is_file();
        self.staged.borrow_mut().push((path.to_path_buf(), exists));
        let bytes = fs::read(path).ok()?;
        if bytes.starts_with(FONT_MAGIC) {
            Some(FakeFont {
                origin: path.display().to_string(),
                thai: bytes.ends_with("ก".as_bytes()),
            })
        } else {
            None
        }
    }
}

impl TextBackend for FakeBackend {
    type Font = FakeFont;
    type Asset = FakeAsset;

    fn font_from_uri(&self, uri: &str) -> Result<Option<FakeFont>, LoadError> {
        self.calls.borrow_mut().push(Call::Uri(uri.to_string()));
        let path = match path_from_file_uri(uri) {
            Some(path) => PathBuf::from(path),
            None => return Ok(None),
        };
        let font = self.read_staged(&path);
        Ok(font.filter(|_| self.uri_loads))
    }

    fn font_from_path(&self, path: &Path) -> Result<Option<FakeFont>, LoadError> {
        self.calls.borrow_mut().push(Call::Path(path.to_path_buf()));
        let font = self.read_staged(path);
        Ok(font.filter(|_| self.path_loads))
    }

    fn font_from_name(&self, name: &str) -> Result<Option<FakeFont>, LoadError> {
        self.calls.borrow_mut().push(Call::Name(name.to_string()));
        if self.failing_names.iter().any(|n| n == name) {
            return Err(LoadError::Backend(format!("{} crashed the text system", name)));
        }
        if self.system_fonts.iter().any(|n| n == name) {
            Ok(Some(FakeFont {
                origin: name.to_string(),
                thai: self.thai_fonts.iter().any(|n| n == name),
            }))
        } else {
            Ok(None)
        }
    }

    fn create_font_asset(&self, font: FakeFont) -> Result<Option<FakeAsset>, LoadError> {
        self.calls.borrow_mut().push(Call::Asset(font.origin.clone()));
        if self.reject_assets {
            return Ok(None);
        }
        Ok(Some(FakeAsset {
            name: font.origin.clone(),
            origin: font.origin,
            mode: AtlasPopulationMode::Static,
            padding: 0,
            thai: font.thai,
        }))
    }
}

fn font_bytes(tail: &[u8]) -> Vec<u8> {
    let mut bytes = FONT_MAGIC.to_vec();
    bytes.extend_from_slice(tail);
    bytes
}

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A plugin folder and a staging folder, removed on drop.
pub struct Scratch {
    root: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "font-fallback-{}-{}-{}",
            name,
            std::process::id(),
            SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(root.join("plugin")).unwrap();
        fs::create_dir_all(root.join("tmp")).unwrap();
        Self { root }
    }

    pub fn plugin_dir(&self) -> PathBuf {
        self.root.join("plugin")
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.root.join("tmp")
    }

    pub fn font_path(&self, file: &str) -> PathBuf {
        self.plugin_dir().join(file)
    }

    pub fn write_font(&self, file: &str) -> PathBuf {
        let path = self.font_path(file);
        fs::write(&path, font_bytes(b" latin only")).unwrap();
        path
    }

    pub fn write_thai_font(&self, file: &str) -> PathBuf {
        let path = self.font_path(file);
        fs::write(&path, font_bytes("ก".as_bytes())).unwrap();
        path
    }

    pub fn write_garbage(&self, file: &str) -> PathBuf {
        let path = self.font_path(file);
        fs::write(&path, b"definitely not a font").unwrap();
        path
    }

    pub fn staged_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.temp_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    pub fn config(&self) -> ResolverConfig {
        ResolverConfig {
            temp_dir: self.temp_dir(),
            ..ResolverConfig::default()
        }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
