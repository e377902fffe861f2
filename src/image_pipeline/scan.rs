//! Column classification pass
//!
//! Each column is walked top to bottom. The first pixel close to the red or
//! blue reference latches that color for the rest of the column, and every
//! scanned pixel is routed into the four filters from the latch state at
//! that row.

use image::Pixel;
use tracing::debug;
use crate::image_pipeline::color::{ColorTarget, ToWide};
use crate::image_pipeline::grid::{Bounds, FilterGrid, PixelGrid};

/// The four derived grids, all sharing the source bounds.
#[derive(Debug, Clone)]
pub struct FilterSet {
    /// Red reference color wherever red has latched.
    pub red: FilterGrid,
    /// Source pixels from rows scanned before red latched.
    pub not_red: FilterGrid,
    /// Red where red has latched, otherwise blue where blue has latched.
    pub red_blue: FilterGrid,
    /// Source pixels from rows where neither color has latched.
    pub not_red_blue: FilterGrid,
}

impl FilterSet {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            red: FilterGrid::new(bounds),
            not_red: FilterGrid::new(bounds),
            red_blue: FilterGrid::new(bounds),
            not_red_blue: FilterGrid::new(bounds),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.red.bounds()
    }
}

/// Runs the classification pass over `source`.
///
/// The bottom `bottom_offset_px` rows are skipped entirely and stay zero in
/// every filter.
pub fn classify_columns<P>(
    source: &PixelGrid<P>,
    red: &ColorTarget,
    blue: &ColorTarget,
    bottom_offset_px: u32,
) -> FilterSet
where
    P: Pixel + ToWide,
{
    let bounds = source.bounds();
    let mut filters = FilterSet::new(bounds);
    let scan_max_y = bounds.max_y.saturating_sub(bottom_offset_px as i32);

    debug!(
        "Classifying columns {}..{}, rows {}..{}",
        bounds.min_x, bounds.max_x, bounds.min_y, scan_max_y
    );

    for x in bounds.min_x..bounds.max_x {
        let mut hit_blue = false;
        let mut hit_red = false;

        for y in bounds.min_y..scan_max_y {
            let Some(pixel) = source.get(x, y) else {
                continue;
            };

            if !hit_blue {
                hit_blue = blue.matches(pixel);
            }

            if !hit_red {
                hit_red = red.matches(pixel);
            }

            if hit_red {
                filters.red.set(x, y, red.color);
                filters.red_blue.set(x, y, red.color);
            } else {
                filters.not_red.set(x, y, pixel.to_rgba8());
            }

            if hit_blue {
                if !hit_red {
                    filters.red_blue.set(x, y, blue.color);
                }
            } else if !hit_red {
                filters.not_red_blue.set(x, y, pixel.to_rgba8());
            }
        }
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::grid::SourceGrid;
    use image::{ImageBuffer, Rgba};

    const RED: ColorTarget = ColorTarget::new(Rgba([0xf1, 0x75, 0x72, 0xff]), 0x3c00);
    const BLUE: ColorTarget = ColorTarget::new(Rgba([0x00, 0xc0, 0xc5, 0xff]), 0x4000);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xff]);
    const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
    const ZERO: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn grid_from(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgba<u8>) -> PixelGrid<Rgba<u8>> {
        PixelGrid::from_buffer(ImageBuffer::from_fn(width, height, f))
    }

    fn at(grid: &FilterGrid, x: i32, y: i32) -> Rgba<u8> {
        *grid.get(x, y).unwrap()
    }

    #[test]
    fn test_single_red_pixel_in_two_by_two() {
        let source = grid_from(2, 2, |x, y| if (x, y) == (0, 0) { RED.color } else { BLACK });

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        assert_eq!(at(&filters.red, 0, 0), RED.color);
        assert_eq!(at(&filters.red_blue, 0, 0), RED.color);
        assert_eq!(at(&filters.not_red, 0, 0), ZERO);
        assert_eq!(at(&filters.not_red_blue, 0, 0), ZERO);
        // bottom row is never scanned
        assert_eq!(at(&filters.red, 0, 1), ZERO);
        assert_eq!(at(&filters.not_red, 0, 1), ZERO);
        // column 1 holds only black
        assert_eq!(at(&filters.red, 1, 0), ZERO);
        assert_eq!(at(&filters.not_red, 1, 0), BLACK);
        assert_eq!(at(&filters.not_red_blue, 1, 0), BLACK);
    }

    #[test]
    fn test_all_blue_image() {
        let source = grid_from(3, 4, |_, _| BLUE.color);

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(at(&filters.not_red, x, y), BLUE.color, "({x}, {y})");
                assert_eq!(at(&filters.red_blue, x, y), BLUE.color, "({x}, {y})");
                assert_eq!(at(&filters.red, x, y), ZERO, "({x}, {y})");
                assert_eq!(at(&filters.not_red_blue, x, y), ZERO, "({x}, {y})");
            }
            assert_eq!(at(&filters.not_red, x, 3), ZERO);
            assert_eq!(at(&filters.red_blue, x, 3), ZERO);
        }
    }

    #[test]
    fn test_latch_colors_rows_below_first_hit_only() {
        // column: white, white, red, white, white, (axis row)
        let source = grid_from(1, 6, |_, y| if y == 2 { RED.color } else { WHITE });

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        for y in 0..2 {
            assert_eq!(at(&filters.red, 0, y), ZERO, "row {y}");
            assert_eq!(at(&filters.not_red, 0, y), WHITE, "row {y}");
            assert_eq!(at(&filters.not_red_blue, 0, y), WHITE, "row {y}");
        }
        for y in 2..5 {
            assert_eq!(at(&filters.red, 0, y), RED.color, "row {y}");
            assert_eq!(at(&filters.red_blue, 0, y), RED.color, "row {y}");
            assert_eq!(at(&filters.not_red, 0, y), ZERO, "row {y}");
        }
        assert_eq!(at(&filters.red, 0, 5), ZERO);
    }

    #[test]
    fn test_red_overrides_earlier_blue_latch() {
        // blue bar sits above a red bar in the same column
        let source = grid_from(1, 5, |_, y| match y {
            0 => BLUE.color,
            2 => RED.color,
            _ => WHITE,
        });

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        assert_eq!(at(&filters.red_blue, 0, 0), BLUE.color);
        assert_eq!(at(&filters.red_blue, 0, 1), BLUE.color);
        assert_eq!(at(&filters.red_blue, 0, 2), RED.color);
        assert_eq!(at(&filters.red_blue, 0, 3), RED.color);
        assert_eq!(at(&filters.not_red, 0, 1), WHITE);
        assert_eq!(at(&filters.not_red_blue, 0, 1), ZERO);
        assert_eq!(at(&filters.not_red, 0, 2), ZERO);
    }

    #[test]
    fn test_near_colors_write_exact_reference() {
        let near_red = Rgba([0xf0, 0x70, 0x70, 0xff]);
        let source = grid_from(1, 2, |_, _| near_red);

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        assert_eq!(at(&filters.red, 0, 0), RED.color);
    }

    #[test]
    fn test_offset_bounds_are_scanned_in_place() {
        let buffer = ImageBuffer::from_fn(2, 3, |x, _| {
            if x == 1 { Rgba([0xf1f1, 0x7575, 0x7272, 0xffff]) } else { Rgba([0, 0, 0, 0xffff]) }
        });
        let source: SourceGrid = PixelGrid::with_origin(buffer, 5, -3);

        let filters = classify_columns(&source, &RED, &BLUE, 1);

        assert_eq!(filters.bounds(), source.bounds());
        assert_eq!(at(&filters.red, 6, -3), RED.color);
        assert_eq!(at(&filters.red, 6, -2), RED.color);
        assert_eq!(at(&filters.red, 6, -1), ZERO);
        assert_eq!(at(&filters.not_red, 5, -3), BLACK);
    }

    #[test]
    fn test_offset_larger_than_image_scans_nothing() {
        let source = grid_from(2, 2, |_, _| RED.color);

        let filters = classify_columns(&source, &RED, &BLUE, 5);

        assert!(filters.red.buffer().pixels().all(|p| *p == ZERO));
        assert!(filters.not_red.buffer().pixels().all(|p| *p == ZERO));
    }
}
