use macroquad::prelude::Color;
use macroquad::rand;

/// Uniform random integer with both bounds included.
///
/// `gen_range` truncates toward zero on integers, which loses the lower
/// endpoint for negative ranges, so this folds the raw generator output
/// into the span directly. Callers must pass `min <= max`.
pub fn random_range(min: i32, max: i32) -> i32 {
    let span = (max - min) as u32 + 1;
    min + (rand::rand() % span) as i32
}

/// Opaque color with each RGB channel drawn from 0..=255.
pub fn random_color() -> Color {
    Color::from_rgba(
        random_range(0, 255) as u8,
        random_range(0, 255) as u8,
        random_range(0, 255) as u8,
        255,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn result_stays_inside_bounds(min in -1_000i32..1_000, span in 0i32..1_000) {
            let max = min + span;
            let n = random_range(min, max);
            prop_assert!(min <= n && n <= max);
        }
    }

    #[test]
    fn both_endpoints_show_up() {
        rand::srand(42);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            match random_range(0, 3) {
                0 => seen_min = true,
                3 => seen_max = true,
                _ => {}
            }
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_range_is_constant() {
        for _ in 0..100 {
            assert_eq!(random_range(5, 5), 5);
        }
    }

    #[test]
    fn random_colors_are_opaque() {
        for _ in 0..100 {
            assert_eq!(random_color().a, 1.0);
        }
    }
}
