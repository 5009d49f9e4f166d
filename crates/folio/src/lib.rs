#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the profile card, the icon registry, the colour and effect
//! types and the translator, plus a prelude for everyday use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::logging::{LogFormat, LoggingConfig, LoggingError};
pub use folio_core::{TimerId, TimerQueue};

// --- Style re-exports ------------------------------------------------------

pub use folio_style::{ColorParseError, Glow, LinearGradient, Oklch, Rgb, Rgba};

// --- Profile re-exports ----------------------------------------------------

pub use folio_profile::{
    CardTimer, ImageRef, Phase, Profile, ProfileCard, ProfileError, ProfileList,
    TypewriterConfig, TypewriterState,
};

// --- Icon re-exports -------------------------------------------------------

#[cfg(feature = "icons")]
pub use folio_icons::{IconAsset, IconRegistry};

// --- I18n re-exports -------------------------------------------------------

#[cfg(feature = "i18n")]
pub use folio_i18n::{CatalogError, StringCatalog, Translator};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure.
    Io(std::io::Error),
    /// Invalid profile list.
    Profile(ProfileError),
    /// Unparseable colour literal.
    Color(ColorParseError),
    /// Logging could not be set up.
    Logging(LoggingError),
    /// Translation table could not be loaded.
    #[cfg(feature = "i18n")]
    Catalog(CatalogError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Profile(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            #[cfg(feature = "i18n")]
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Profile(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Logging(err) => Some(err),
            #[cfg(feature = "i18n")]
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ProfileError> for Error {
    fn from(err: ProfileError) -> Self {
        Self::Profile(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<LoggingError> for Error {
    fn from(err: LoggingError) -> Self {
        Self::Logging(err)
    }
}

#[cfg(feature = "i18n")]
impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Glow, LinearGradient, Phase, Profile, ProfileCard, ProfileList, Result, Rgb,
        TypewriterConfig,
    };

    #[cfg(feature = "icons")]
    pub use crate::{IconAsset, IconRegistry};

    #[cfg(feature = "i18n")]
    pub use crate::Translator;

    pub use crate::{core, profile, style};

    #[cfg(feature = "i18n")]
    pub use crate::i18n;
    #[cfg(feature = "icons")]
    pub use crate::icons;
}

pub use folio_core as core;
#[cfg(feature = "i18n")]
pub use folio_i18n as i18n;
#[cfg(feature = "icons")]
pub use folio_icons as icons;
pub use folio_profile as profile;
pub use folio_style as style;
