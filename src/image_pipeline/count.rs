use image::Pixel;
use crate::image_pipeline::color::ToWide;
use crate::image_pipeline::grid::PixelGrid;

/// Counts pixels whose wide RGB equals `target`, ignoring alpha.
///
/// Only the interior is visited: the last column and the last row are
/// skipped, so a grid narrower or shorter than two pixels always yields 0.
pub fn count_by_color<P, C>(grid: &PixelGrid<P>, target: &C) -> usize
where
    P: Pixel + ToWide,
    C: ToWide,
{
    let target = target.to_wide();
    let bounds = grid.bounds();

    (bounds.min_x..bounds.max_x - 1)
        .flat_map(|x| (bounds.min_y..bounds.max_y - 1).map(move |y| (x, y)))
        .filter_map(|(x, y)| grid.get(x, y))
        .filter(|pixel| pixel.to_wide().same_rgb(&target))
        .count()
}
