//! Bundled icon set.

use std::borrow::Cow;
use std::fmt;

use crate::registry::{GENERAL, IconRegistry, SOCIAL, TECH};

/// Opaque reference to a bundled vector asset.
///
/// The path is relative to the asset bundle root and is never opened here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconAsset(Cow<'static, str>);

impl IconAsset {
    /// Reference a bundled asset by path.
    #[must_use]
    pub const fn bundled(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Reference an asset registered at runtime.
    #[must_use]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    /// Bundle-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// File stem, e.g. `"vue"` for `icons/tech/vue.svg`.
    #[must_use]
    pub fn stem(&self) -> &str {
        let file = self.0.rsplit('/').next().unwrap_or(&self.0);
        file.split('.').next().unwrap_or(file)
    }
}

impl fmt::Display for IconAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const VUE: IconAsset = IconAsset::bundled("icons/tech/vue.svg");
const TAILWIND: IconAsset = IconAsset::bundled("icons/tech/tailwind.svg");
const JAVASCRIPT: IconAsset = IconAsset::bundled("icons/tech/js.svg");
const PYTHON: IconAsset = IconAsset::bundled("icons/tech/python.svg");
const LUA: IconAsset = IconAsset::bundled("icons/tech/lua.svg");
const CPP: IconAsset = IconAsset::bundled("icons/tech/cpp.svg");
const GITHUB: IconAsset = IconAsset::bundled("icons/socials/githubFilled.svg");
const LINKEDIN: IconAsset = IconAsset::bundled("icons/socials/linkedin.svg");
const DISCORD: IconAsset = IconAsset::bundled("icons/socials/discord.svg");
const ROBLOX: IconAsset = IconAsset::bundled("icons/tech/roblox-icon.svg");

/// Technology aliases, keyed as a person would type them.
pub const TECH_ICONS: &[(&str, IconAsset)] = &[
    ("vue", VUE),
    ("vuejs", VUE),
    ("tailwind", TAILWIND),
    ("tailwindcss", TAILWIND),
    ("javascript", JAVASCRIPT),
    ("python", PYTHON),
    ("luau", LUA),
    ("lua", LUA),
    ("Discord.py", PYTHON),
    ("C++", CPP),
];

/// Social-network logos.
pub const SOCIAL_ICONS: &[(&str, IconAsset)] = &[
    ("github", GITHUB),
    ("linkedin", LINKEDIN),
    ("discord", DISCORD),
    ("roblox", ROBLOX),
];

impl IconRegistry<IconAsset> {
    /// Registry seeded with the bundled `tech`, `social` and empty `general` sets.
    ///
    /// Keys pass through [`normalize`](crate::normalize), so aliases such as
    /// `"Discord.py"` resolve however they are spelled.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert_category(TECH, TECH_ICONS.iter().cloned());
        registry.insert_category(SOCIAL, SOCIAL_ICONS.iter().cloned());
        registry.insert_category(GENERAL, std::iter::empty::<(&str, IconAsset)>());
        registry
    }
}
