use rand::Rng;

use crate::{shape::Point, utils::snap};

/// Sample `count` grid-snapped points inside the map.
///
/// Raw coordinates are whole numbers in `[border / 2, border / 2 + width - border)`
/// (and likewise for `y`), so the margin is the same on both sides. Each
/// coordinate is then snapped down to a multiple of `spacing`. Samples are
/// not deduplicated, two of them may snap onto the same cell.
///
/// Callers make sure `border < width` and `border < height`.
pub fn sample<R: Rng>(
    width: usize,
    height: usize,
    count: usize,
    spacing: usize,
    border: usize,
    rng: &mut R,
) -> Vec<Point> {
    let span_x = width.saturating_sub(border).max(1);
    let span_y = height.saturating_sub(border).max(1);
    let offset = border / 2;

    let points = (0..count)
        .map(|_| {
            let x = (rng.gen_range(0..span_x) + offset) as f64;
            let y = (rng.gen_range(0..span_y) + offset) as f64;
            Point::new(snap(x, spacing), snap(y, spacing))
        })
        .collect::<Vec<_>>();

    tracing::debug!(count, spacing, border, "points sampled");
    points
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_sample_in_margin_and_snapped() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let points = sample(40, 30, 200, 4, 12, &mut rng);
        assert_eq!(points.len(), 200);

        for p in points {
            assert_eq!(p.x % 4., 0.);
            assert_eq!(p.y % 4., 0.);
            // snapping can move a sample below the margin, never below a
            // spacing step under it
            assert!(p.x >= 4. && p.x < 34.);
            assert!(p.y >= 4. && p.y < 24.);
        }
    }

    #[test]
    fn test_sample_is_seeded() {
        let a = sample(80, 100, 30, 5, 15, &mut ChaCha8Rng::seed_from_u64(9));
        let b = sample(80, 100, 30, 5, 15, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_spacing_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = sample(10, 10, 50, 1, 3, &mut rng);
        for p in points {
            assert!(p.x >= 1. && p.x < 8.);
            assert_eq!(p.x.fract(), 0.);
        }
    }
}
