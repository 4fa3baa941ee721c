use std::path::Path;

use log::{error, info};

use crate::{
    backend::TextBackend,
    config::PluginConfig,
    resolver::{FontResolver, ResolvedFont},
    settings::{apply_fallback, FontSettings, Registration},
    source::{file_sources, named_sources},
};

/// Outcome of [`FallbackPlugin::load`].
#[derive(Debug, Clone)]
pub struct LoadReport<A> {
    pub font: Option<ResolvedFont<A>>,
    pub registration: Registration,
}

/// Startup entry point: find a Thai-capable font and register it.
pub struct FallbackPlugin<B> {
    resolver: FontResolver<B>,
    config: PluginConfig,
}

impl<B: TextBackend> FallbackPlugin<B>
where
    B::Asset: Clone,
{
    pub fn new(backend: B, config: PluginConfig) -> Self {
        let resolver = FontResolver::with_config(backend, config.resolver.clone());
        Self { resolver, config }
    }

    pub fn plugin_dir(&self) -> &Path {
        &self.config.plugin_dir
    }

    pub fn resolver(&self) -> &FontResolver<B> {
        &self.resolver
    }

    pub fn load<S>(&self, settings: Option<&mut S>) -> LoadReport<B::Asset>
    where
        S: FontSettings<B::Asset> + ?Sized,
    {
        info!("Thai Font Mod loading...");

        let font = self.find_font();
        let registration = apply_fallback(font.as_ref(), settings);

        info!("Thai Font Mod loaded successfully");
        LoadReport { font, registration }
    }

    /// Plugin-folder files first, then installed system fonts.
    pub fn find_font(&self) -> Option<ResolvedFont<B::Asset>> {
        info!("Searching for Thai fonts...");
        let dir = self.plugin_dir();

        info!("Plugin folder: {}", dir.display());
        let files = file_sources(dir, &self.config.font_files);
        if let Some(font) = self.resolver.resolve_first_available(&files).into_option() {
            info!("Successfully loaded font from plugin folder");
            return Some(font);
        }
        info!("No font files found in plugin folder");
        info!("Please place a .ttf file in: {}", dir.display());

        let names = named_sources(&self.config.system_fonts);
        if let Some(font) = self.resolver.resolve_first_available(&names).into_option() {
            info!("Successfully loaded Thai font: {}", font.label);
            return Some(font);
        }

        error!("No Thai-capable font found.");
        error!("Please place a .ttf file in: {}", dir.display());
        None
    }
}
