//! Gradient and glow descriptors.
//!
//! Both types render to CSS text via `Display` and can be sampled for
//! terminal output, so the same profile data drives either surface.

use std::fmt;

use crate::color::{Rgb, Rgba};

/// Angle used by profile gradients, in degrees.
pub const PROFILE_GRADIENT_ANGLE: u16 = 135;

// ---------------------------------------------------------------------------
// LinearGradient
// ---------------------------------------------------------------------------

/// Two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearGradient {
    /// Direction in degrees (CSS convention).
    pub angle: u16,
    /// Start colour.
    pub from: Rgb,
    /// End colour.
    pub to: Rgb,
}

impl LinearGradient {
    /// Create a gradient at the given angle.
    #[must_use]
    pub const fn new(angle: u16, from: Rgb, to: Rgb) -> Self {
        Self { angle, from, to }
    }

    /// Colour at position `t` in [0, 1] along the gradient.
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgb {
        self.from.lerp(self.to, t)
    }

    /// Colour for cell `index` of `count` evenly spaced cells.
    #[must_use]
    pub fn sample_cell(&self, index: usize, count: usize) -> Rgb {
        if count <= 1 {
            return self.from;
        }
        self.sample(index as f32 / (count - 1) as f32)
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle, self.from, self.to
        )
    }
}

// ---------------------------------------------------------------------------
// Glow
// ---------------------------------------------------------------------------

/// One blurred shadow layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowLayer {
    /// Blur radius in pixels.
    pub blur: u16,
    /// Layer colour including alpha.
    pub color: Rgba,
}

impl GlowLayer {
    const fn new(blur: u16, color: Rgb, alpha: u8) -> Self {
        Self {
            blur,
            color: color.with_alpha(alpha),
        }
    }
}

/// Stacked glow, rendered as a CSS `box-shadow` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glow {
    layers: Vec<GlowLayer>,
}

impl Glow {
    /// Resting glow: 20px from-colour at 0x40, 40px to-colour at 0x20.
    #[must_use]
    pub fn resting(from: Rgb, to: Rgb) -> Self {
        Self {
            layers: vec![GlowLayer::new(20, from, 0x40), GlowLayer::new(40, to, 0x20)],
        }
    }

    /// Hover glow: 30px from at 0x80, 60px to at 0x40, 80px from at 0x20.
    #[must_use]
    pub fn hover(from: Rgb, to: Rgb) -> Self {
        Self {
            layers: vec![
                GlowLayer::new(30, from, 0x80),
                GlowLayer::new(60, to, 0x40),
                GlowLayer::new(80, from, 0x20),
            ],
        }
    }

    /// Layers from innermost to outermost.
    #[must_use]
    pub fn layers(&self) -> &[GlowLayer] {
        &self.layers
    }

    /// Relative strength: summed alpha, normalized so one opaque layer is 1.0.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.layers
            .iter()
            .map(|layer| f32::from(layer.color.a) / 255.0)
            .sum()
    }

    /// Composite colour of the glow over `background`, innermost layer last.
    #[must_use]
    pub fn composite_over(&self, background: Rgb) -> Rgb {
        self.layers
            .iter()
            .rev()
            .fold(background, |acc, layer| layer.color.over(acc))
    }
}

impl fmt::Display for Glow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0 0 {}px {}", layer.blur, layer.color)?;
        }
        Ok(())
    }
}
