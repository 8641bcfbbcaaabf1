//! Logo loading and badge compositing.
//!
//! The logo is wrapped in a white, opaque "badge" square before being
//! placed on the code: the white padding separates logo pixels from the
//! module grid, and the badge's opacity guarantees the occluded modules are
//! fully overwritten (tier-H redundancy absorbs the loss). The logo's own
//! alpha is respected inside the badge, so non-rectangular logos keep white
//! corners instead of bleeding edge colors.

use image::{Rgba, RgbaImage, imageops};
use std::path::Path;

/// White border around the logo inside the badge, in pixels per side.
pub const BADGE_PADDING: u32 = 6;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Load the logo asset from disk. Absence or a decode failure is not an
/// error — branded generation degrades to a plain code.
pub fn load(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            eprintln!("[logo] asset unavailable at {}: {}", path.display(), e);
            None
        }
    }
}

/// Build the white-padded badge for a code of edge length `qr_size`.
///
/// The logo is shrunk proportionally to fit a `qr_size / 4` bounding box
/// (never upscaled), then centered on a white square with `BADGE_PADDING`
/// pixels of margin on every side.
pub fn badge(logo: &RgbaImage, qr_size: u32) -> RgbaImage {
    let max_side = qr_size / 4;
    let (lw, lh) = logo.dimensions();

    let fitted = if lw > max_side || lh > max_side {
        shrink_to_fit(logo, max_side)
    } else {
        logo.clone()
    };

    let (w, h) = fitted.dimensions();
    let side = w.max(h) + BADGE_PADDING * 2;
    let mut badge = RgbaImage::from_pixel(side, side, WHITE);
    let x = (side - w) / 2;
    let y = (side - h) / 2;
    imageops::overlay(&mut badge, &fitted, i64::from(x), i64::from(y));
    badge
}

/// Center the badge on the canvas, overwriting the modules beneath it.
pub fn composite(canvas: &mut RgbaImage, badge: &RgbaImage) {
    let x = canvas.width().saturating_sub(badge.width()) / 2;
    let y = canvas.height().saturating_sub(badge.height()) / 2;
    imageops::overlay(canvas, badge, i64::from(x), i64::from(y));
}

/// Proportional downscale so both dimensions fit within `max_side`.
fn shrink_to_fit(logo: &RgbaImage, max_side: u32) -> RgbaImage {
    let (lw, lh) = logo.dimensions();
    let scale = (max_side as f64 / lw as f64).min(max_side as f64 / lh as f64);
    let w = ((lw as f64 * scale).round() as u32).max(1);
    let h = ((lh as f64 * scale).round() as u32).max(1);
    imageops::resize(logo, w, h, imageops::FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solid_logo(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 30, 40, 255]))
    }

    #[test]
    fn test_small_logo_is_never_upscaled() {
        // 40x40 fits inside the 125px box for a 500px code
        let badge = badge(&solid_logo(40, 40), 500);
        assert_eq!(badge.width(), 40 + BADGE_PADDING * 2);
        assert_eq!(badge.height(), 40 + BADGE_PADDING * 2);
    }

    #[test]
    fn test_large_logo_shrinks_to_quarter_box() {
        let badge = badge(&solid_logo(400, 400), 500);
        assert_eq!(badge.width(), 125 + BADGE_PADDING * 2);
    }

    #[test]
    fn test_shrink_preserves_aspect_ratio() {
        let fitted = shrink_to_fit(&solid_logo(400, 200), 100);
        assert_eq!((fitted.width(), fitted.height()), (100, 50));
    }

    #[test]
    fn test_badge_is_square_for_wide_logo() {
        let badge = badge(&solid_logo(400, 200), 500);
        assert_eq!(badge.width(), badge.height());
        assert_eq!(badge.width(), 125 + BADGE_PADDING * 2);
    }

    #[test]
    fn test_badge_padding_is_white_and_opaque() {
        let badge = badge(&solid_logo(40, 40), 500);
        assert_eq!(badge.get_pixel(0, 0), &WHITE);
        assert_eq!(badge.get_pixel(2, badge.height() / 2), &WHITE);
    }

    #[test]
    fn test_transparent_logo_corners_stay_white() {
        // Fully transparent logo: the badge should be all white
        let ghost = RgbaImage::from_pixel(40, 40, Rgba([10, 10, 10, 0]));
        let badge = badge(&ghost, 500);
        let center = badge.get_pixel(badge.width() / 2, badge.height() / 2);
        assert_eq!(center, &WHITE);
    }

    #[test]
    fn test_composite_centers_badge() {
        let mut canvas = RgbaImage::from_pixel(500, 500, Rgba([0, 0, 0, 255]));
        let badge = badge(&solid_logo(40, 40), 500);
        composite(&mut canvas, &badge);

        // Logo color at the exact center, white just inside the badge edge
        assert_eq!(canvas.get_pixel(250, 250), &Rgba([200, 30, 40, 255]));
        let edge = 250 - badge.width() / 2 + 2;
        assert_eq!(canvas.get_pixel(edge, 250), &WHITE);

        // Outside the badge the canvas is untouched
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([0, 0, 0, 255]));
    }
}
