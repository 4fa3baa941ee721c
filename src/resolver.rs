use std::{fs, path::Path};

use log::{debug, info, warn};

use crate::{
    backend::{FontAsset, TextBackend},
    config::ResolverConfig,
    error::{LoadError, MissReason, ResolveError},
    source::{display_name, file_stem, FontSource, Provenance},
    staging::StagedFont,
};

/// A font asset that made it through resolution, ready to be registered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont<A> {
    pub asset: A,
    pub label: String,
    pub provenance: Provenance,
    pub source: FontSource,
}

impl<A> ResolvedFont<A> {
    pub fn display_name(&self) -> String {
        display_name(&self.label, self.provenance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<A> {
    Found(ResolvedFont<A>),
    NotFound,
}

impl<A> SearchResult<A> {
    pub fn into_option(self) -> Option<ResolvedFont<A>> {
        match self {
            SearchResult::Found(font) => Some(font),
            SearchResult::NotFound => None,
        }
    }
}

/// Walks candidate sources in order and keeps the first one the backend
/// can build a font asset from.
pub struct FontResolver<B> {
    backend: B,
    config: ResolverConfig,
}

impl<B: TextBackend> FontResolver<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ResolverConfig::default())
    }

    pub fn with_config(backend: B, config: ResolverConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the first source that yields an asset. Failures are logged
    /// and never returned; an exhausted list is `NotFound`.
    pub fn resolve_first_available(&self, sources: &[FontSource]) -> SearchResult<B::Asset> {
        for source in sources {
            match self.try_source(source) {
                Ok(font) => {
                    info!("Successfully loaded font from {}", source);
                    return SearchResult::Found(font);
                }
                Err(err) if err.is_miss() => debug!("{}", err),
                Err(err) => warn!("{}", err),
            }
        }
        SearchResult::NotFound
    }

    fn try_source(&self, source: &FontSource) -> Result<ResolvedFont<B::Asset>, ResolveError> {
        let asset = match source {
            FontSource::File { path } => self.load_file(source, path)?,
            FontSource::Named { name } => self.load_named(source, name)?,
        };
        self.finish(source, asset)
    }

    fn load_file(&self, source: &FontSource, path: &Path) -> Result<B::Asset, ResolveError> {
        if !path.is_file() {
            return Err(miss(source, MissReason::FileNotFound));
        }
        info!("Found font file: {}", path.display());

        let bytes = fs::read(path).map_err(|err| failure(source, err.into()))?;
        debug!("Loaded font file, size: {} bytes", bytes.len());

        let staged = StagedFont::create(
            &self.config.temp_dir,
            &self.config.temp_prefix,
            &file_stem(path),
            &bytes,
        )
        .map_err(|err| failure(source, err.into()))?;

        // `staged` is dropped on every return below, taking the temp file with it
        for strategy in &self.config.strategies {
            let font = match strategy.load(&self.backend, &staged) {
                Ok(Some(font)) => font,
                Ok(None) => {
                    debug!("{:?} produced no font for {}", strategy, source);
                    continue;
                }
                Err(err) => return Err(failure(source, err)),
            };
            match self.backend.create_font_asset(font) {
                Ok(Some(asset)) => return Ok(asset),
                Ok(None) => debug!("{:?} produced no font asset for {}", strategy, source),
                Err(err) => return Err(failure(source, err)),
            }
        }
        Err(miss(source, MissReason::NotConstructible))
    }

    fn load_named(&self, source: &FontSource, name: &str) -> Result<B::Asset, ResolveError> {
        let font = self
            .backend
            .font_from_name(name)
            .map_err(|err| failure(source, err))?
            .ok_or_else(|| miss(source, MissReason::NotConstructible))?;
        self.backend
            .create_font_asset(font)
            .map_err(|err| failure(source, err))?
            .ok_or_else(|| miss(source, MissReason::NoAsset))
    }

    fn finish(
        &self,
        source: &FontSource,
        mut asset: B::Asset,
    ) -> Result<ResolvedFont<B::Asset>, ResolveError> {
        if let Some(c) = self.config.required_char {
            if !asset.covers(c) {
                return Err(miss(source, MissReason::MissingGlyph(c)));
            }
        }

        let label = source.label();
        let provenance = source.provenance();
        asset.set_name(display_name(&label, provenance));
        asset.set_atlas_population_mode(self.config.atlas_population_mode);
        asset.set_atlas_padding(self.config.atlas_padding);

        Ok(ResolvedFont {
            asset,
            label,
            provenance,
            source: source.clone(),
        })
    }
}

fn miss(source: &FontSource, reason: MissReason) -> ResolveError {
    ResolveError::SourceMiss {
        candidate: source.clone(),
        reason,
    }
}

fn failure(source: &FontSource, error: LoadError) -> ResolveError {
    ResolveError::UnexpectedFailure {
        candidate: source.clone(),
        error,
    }
}
