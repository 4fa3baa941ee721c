use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Font files probed in the plugin folder, most preferred first.
pub const DEFAULT_FONT_FILES: &[&str] = &[
    "Itim-Regular.ttf",
    "Sarabun-Regular.ttf",
    "NotoSansThai-Regular.ttf",
    "font.ttf",
    "thai.ttf",
];

/// Thai-capable fonts commonly installed on desktop systems.
pub const DEFAULT_SYSTEM_FONTS: &[&str] = &[
    "Itim",
    "Itim-Regular",
    "Sarabun",
    "Noto Sans Thai",
    "Leelawadee UI",
    "Leelawadee",
    "Tahoma",
    "Cordia New",
    "Browallia New",
    "Angsana New",
    "Arial Unicode MS",
];

/// One place a font may come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontSource {
    File { path: PathBuf },
    Named { name: String },
}

impl FontSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontSource::File { path: path.into() }
    }

    pub fn named(name: impl Into<String>) -> Self {
        FontSource::Named { name: name.into() }
    }

    /// The identifier shown in the asset's display name: the file stem for
    /// files, the registered name for system fonts.
    pub fn label(&self) -> String {
        match self {
            FontSource::File { path } => file_stem(path),
            FontSource::Named { name } => name.clone(),
        }
    }

    pub fn provenance(&self) -> Provenance {
        match self {
            FontSource::File { .. } => Provenance::External,
            FontSource::Named { .. } => Provenance::System,
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File { path } => write!(f, "file '{}'", path.display()),
            FontSource::Named { name } => write!(f, "system font '{}'", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    External,
    System,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::External => "External",
            Provenance::System => "System",
        })
    }
}

/// `"<label> (<provenance>)"`, e.g. `"Sarabun-Regular (External)"`.
pub fn display_name(label: &str, provenance: Provenance) -> String {
    format!("{} ({})", label, provenance)
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File candidates joined onto `dir`, in order.
pub fn file_sources<S: AsRef<str>>(dir: &Path, files: &[S]) -> Vec<FontSource> {
    files
        .iter()
        .map(|file| FontSource::file(dir.join(file.as_ref())))
        .collect()
}

pub fn named_sources<S: AsRef<str>>(names: &[S]) -> Vec<FontSource> {
    names
        .iter()
        .map(|name| FontSource::named(name.as_ref()))
        .collect()
}

/// Every default plugin-folder file, then every default system font.
pub fn default_sources(plugin_dir: &Path) -> Vec<FontSource> {
    let mut sources = file_sources(plugin_dir, DEFAULT_FONT_FILES);
    sources.extend(named_sources(DEFAULT_SYSTEM_FONTS));
    sources
}
