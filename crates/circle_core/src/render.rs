//! Rasterizes the circle outline shown by the image view.

use image::{Rgba, RgbaImage};

pub const CANVAS_SIZE: u32 = 300;
pub const CENTER: f64 = 150.0;

const OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws a one-pixel red circle outline on a white 300×300 canvas, centered
/// at (150, 150).
///
/// The radius is a direct pixel offset from the center, not a scaled
/// mapping; radii beyond 150 run off the canvas edge without clamping.
pub fn circle_outline(radius: f64) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    for y in 0..CANVAS_SIZE {
        for x in 0..CANVAS_SIZE {
            let dx = f64::from(x) - CENTER;
            let dy = f64::from(y) - CENTER;
            let distance = (dx * dx + dy * dy).sqrt();
            if (distance - radius).abs() <= 0.5 {
                canvas.put_pixel(x, y, OUTLINE);
            }
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::{circle_outline, BACKGROUND, CANVAS_SIZE, OUTLINE};

    fn outline_bounding_box(canvas: &image::RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let mut bbox: Option<(u32, u32, u32, u32)> = None;
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if *pixel == OUTLINE {
                bbox = Some(match bbox {
                    None => (x, y, x, y),
                    Some((min_x, min_y, max_x, max_y)) => {
                        (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                    }
                });
            }
        }
        bbox
    }

    #[test]
    fn canvas_is_always_300_by_300() {
        let canvas = circle_outline(10.0);
        assert_eq!(canvas.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    }

    #[test]
    fn zero_radius_draws_only_the_center_pixel() {
        let canvas = circle_outline(0.0);
        assert_eq!(outline_bounding_box(&canvas), Some((150, 150, 150, 150)));
    }

    #[test]
    fn bounding_box_tracks_radius_as_a_pixel_offset() {
        for r in [1u32, 10, 50, 100] {
            let canvas = circle_outline(f64::from(r));
            assert_eq!(
                outline_bounding_box(&canvas),
                Some((150 - r, 150 - r, 150 + r, 150 + r)),
                "radius {r}"
            );
        }
    }

    #[test]
    fn background_stays_white_inside_and_outside_the_ring() {
        let canvas = circle_outline(50.0);
        assert_eq!(*canvas.get_pixel(150, 150), BACKGROUND);
        assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn oversized_radius_runs_off_the_canvas_without_clamping() {
        // The ring at r=200 only intersects the canvas near its corners.
        let canvas = circle_outline(200.0);
        assert_eq!(*canvas.get_pixel(150, 150), BACKGROUND);
        assert_eq!(*canvas.get_pixel(150, 0), BACKGROUND);
        assert!(canvas.pixels().any(|p| *p == OUTLINE));

        // Far past the corner distance nothing is drawn at all.
        let empty = circle_outline(400.0);
        assert!(empty.pixels().all(|p| *p == BACKGROUND));
    }
}
