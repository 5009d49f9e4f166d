#![forbid(unsafe_code)]

//! Style values for the profile card: colours, gradients and glows.

pub mod color;
pub mod effects;

pub use color::{ColorParseError, Oklch, Rgb, Rgba};
pub use effects::{Glow, GlowLayer, LinearGradient, PROFILE_GRADIENT_ANGLE};
