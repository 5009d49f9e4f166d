#![forbid(unsafe_code)]

//! Profile records and the fixed profile list.

use std::fmt;

use folio_style::{Glow, LinearGradient, Oklch, PROFILE_GRADIENT_ANGLE, Rgb};

/// Opaque reference to a profile picture in the asset bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Reference an image by bundle-relative path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Bundle-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One profile as shown on the card.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    image: ImageRef,
    gradient_from: Rgb,
    gradient_to: Rgb,
    gradient_from_oklch: Oklch,
    gradient_to_oklch: Oklch,
    border: Rgb,
    name: String,
    handle: String,
    font: String,
    text_size: String,
}

impl Profile {
    /// Create a profile with neutral styling; refine with the builder setters.
    #[must_use]
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        let grey = Rgb::new(0x71, 0x71, 0x7a);
        Self {
            image: ImageRef::new(""),
            gradient_from: grey,
            gradient_to: grey,
            gradient_from_oklch: Oklch::new(55.2, 0.016, 285.94),
            gradient_to_oklch: Oklch::new(55.2, 0.016, 285.94),
            border: grey,
            name: name.into(),
            handle: handle.into(),
            font: String::new(),
            text_size: String::new(),
        }
    }

    /// Set the picture (builder).
    #[must_use]
    pub fn image(mut self, image: ImageRef) -> Self {
        self.image = image;
        self
    }

    /// Set both gradient stops in RGB and OKLCH (builder).
    #[must_use]
    pub fn gradient(mut self, from: (Rgb, Oklch), to: (Rgb, Oklch)) -> Self {
        (self.gradient_from, self.gradient_from_oklch) = from;
        (self.gradient_to, self.gradient_to_oklch) = to;
        self
    }

    /// Set the border colour (builder).
    #[must_use]
    pub fn border(mut self, border: Rgb) -> Self {
        self.border = border;
        self
    }

    /// Set the font identifier (builder).
    #[must_use]
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the text-size identifier (builder).
    #[must_use]
    pub fn text_size(mut self, text_size: impl Into<String>) -> Self {
        self.text_size = text_size.into();
        self
    }

    #[must_use]
    pub fn image_ref(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn font_id(&self) -> &str {
        &self.font
    }

    #[must_use]
    pub fn text_size_id(&self) -> &str {
        &self.text_size
    }

    #[must_use]
    pub fn border_color(&self) -> Rgb {
        self.border
    }

    /// Gradient stops as `(from, to)`.
    #[must_use]
    pub fn stops(&self) -> (Rgb, Rgb) {
        (self.gradient_from, self.gradient_to)
    }

    /// Gradient stops in OKLCH as `(from, to)`.
    #[must_use]
    pub fn stops_oklch(&self) -> (Oklch, Oklch) {
        (self.gradient_from_oklch, self.gradient_to_oklch)
    }

    /// The 135° background gradient.
    #[must_use]
    pub fn linear_gradient(&self) -> LinearGradient {
        LinearGradient::new(PROFILE_GRADIENT_ANGLE, self.gradient_from, self.gradient_to)
    }

    /// Picture glow, stronger while hovered.
    #[must_use]
    pub fn glow(&self, hovered: bool) -> Glow {
        if hovered {
            Glow::hover(self.gradient_from, self.gradient_to)
        } else {
            Glow::resting(self.gradient_from, self.gradient_to)
        }
    }
}

// ---------------------------------------------------------------------------
// ProfileList
// ---------------------------------------------------------------------------

/// Error building a [`ProfileList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// At least one profile is required.
    Empty,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "profile list must not be empty"),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Non-empty, immutable, ordered list of profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileList {
    profiles: Vec<Profile>,
}

impl ProfileList {
    /// Build a list; fails when `profiles` is empty.
    pub fn new(profiles: Vec<Profile>) -> Result<Self, ProfileError> {
        if profiles.is_empty() {
            return Err(ProfileError::Empty);
        }
        Ok(Self { profiles })
    }

    /// The two bundled profiles.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            profiles: bundled_profiles(),
        }
    }

    /// Number of profiles (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always `false`; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Profile at `index`, wrapping modulo the length.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &Profile {
        &self.profiles[index % self.profiles.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }
}

impl<'a> IntoIterator for &'a ProfileList {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn bundled_profiles() -> Vec<Profile> {
    vec![
        Profile::new("Julian", "juinc")
            .image(ImageRef::new("img/classy.png"))
            .gradient(
                (Rgb::new(0x3b, 0x82, 0xf6), Oklch::new(54.06, 0.216, 264.05)),
                (Rgb::new(0x8b, 0x5c, 0xf6), Oklch::new(56.14, 0.197, 295.81)),
            )
            .border(Rgb::new(0x73, 0x73, 0xe6))
            .font("font-bg-sirivennela")
            .text_size("text-5xl"),
        Profile::new("Julian", "juinc")
            .image(ImageRef::new("img/goofy.png"))
            .gradient(
                (Rgb::new(0xec, 0x48, 0x99), Oklch::new(64.23, 0.284, 349.39)),
                (Rgb::new(0xea, 0xb3, 0x08), Oklch::new(79.48, 0.196, 91.38)),
            )
            .border(Rgb::new(0xf7, 0x8d, 0x83))
            .font("font-bg-roboto")
            .text_size("text-4xl"),
    ]
}
