use log::{error, info, warn};

use crate::{backend::FontAsset, error::SettingsError, resolver::ResolvedFont};

/// The text system's global font settings: a fallback list and a default
/// font slot. Implementations bind this to whatever the host exposes.
pub trait FontSettings<A> {
    fn contains_fallback(&self, font: &A) -> Result<bool, SettingsError>;
    fn append_fallback(&mut self, font: A) -> Result<(), SettingsError>;
    fn set_default(&mut self, font: A) -> Result<(), SettingsError>;
}

/// In-memory settings, for hosts that read the configuration back out.
#[derive(Debug, Clone)]
pub struct TextSettings<A> {
    fallback_fonts: Vec<A>,
    default_font: Option<A>,
}

impl<A> TextSettings<A> {
    pub fn new() -> Self {
        Self {
            fallback_fonts: Vec::new(),
            default_font: None,
        }
    }

    pub fn fallback_fonts(&self) -> &[A] {
        &self.fallback_fonts
    }

    pub fn default_font(&self) -> Option<&A> {
        self.default_font.as_ref()
    }
}

impl<A> Default for TextSettings<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq> FontSettings<A> for TextSettings<A> {
    fn contains_fallback(&self, font: &A) -> Result<bool, SettingsError> {
        Ok(self.fallback_fonts.contains(font))
    }

    fn append_fallback(&mut self, font: A) -> Result<(), SettingsError> {
        self.fallback_fonts.push(font);
        Ok(())
    }

    fn set_default(&mut self, font: A) -> Result<(), SettingsError> {
        self.default_font = Some(font);
        Ok(())
    }
}

/// What [`apply_fallback`] managed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registration {
    pub fallback_added: bool,
    pub default_set: bool,
}

/// Adds `font` to the fallback list (once) and makes it the default font.
/// Each step is independent; failures are logged, not returned.
pub fn apply_fallback<A, S>(
    font: Option<&ResolvedFont<A>>,
    settings: Option<&mut S>,
) -> Registration
where
    A: FontAsset + Clone,
    S: FontSettings<A> + ?Sized,
{
    let mut registration = Registration::default();

    let font = match font {
        Some(font) => font,
        None => {
            warn!("Thai font not available; fallback not applied.");
            return registration;
        }
    };
    let settings = match settings {
        Some(settings) => settings,
        None => {
            warn!("Text settings are not available; fallback not applied.");
            return registration;
        }
    };

    let name = font.asset.name().to_string();

    match settings.contains_fallback(&font.asset) {
        Ok(true) => info!("'{}' is already in the global fallback list.", name),
        Ok(false) => match settings.append_fallback(font.asset.clone()) {
            Ok(()) => {
                info!("Added '{}' to global fallback list.", name);
                registration.fallback_added = true;
            }
            Err(err) => error!("Failed to add fallback font: {}", err),
        },
        Err(err) => error!("Failed to add fallback font: {}", err),
    }

    match settings.set_default(font.asset.clone()) {
        Ok(()) => {
            info!("Set '{}' as default font.", name);
            registration.default_set = true;
        }
        Err(err) => warn!("Could not set default font: {}", err),
    }

    info!("Thai font will apply to new text and scenes.");
    registration
}
