//! Property tests for colour interpolation and parsing.

use folio_style::{LinearGradient, Rgb};
use proptest::prelude::*;

fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn between(v: u8, a: u8, b: u8) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

proptest! {
    #[test]
    fn lerp_stays_between_endpoints(a in rgb(), b in rgb(), t in 0.0f32..=1.0) {
        let c = a.lerp(b, t);
        prop_assert!(between(c.r, a.r, b.r));
        prop_assert!(between(c.g, a.g, b.g));
        prop_assert!(between(c.b, a.b, b.b));
    }

    #[test]
    fn displayed_hex_parses_back(c in rgb()) {
        prop_assert_eq!(c.to_string().parse::<Rgb>(), Ok(c));
    }

    #[test]
    fn gradient_cells_are_bounded(from in rgb(), to in rgb(), count in 1usize..200) {
        let g = LinearGradient::new(135, from, to);
        prop_assert_eq!(g.sample_cell(0, count), from);
        if count > 1 {
            prop_assert_eq!(g.sample_cell(count - 1, count), to);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(raw in "\\PC{0,12}") {
        let _ = raw.parse::<Rgb>();
        let _ = folio_style::Oklch::parse(&raw);
    }
}
