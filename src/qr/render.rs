//! Rasterization of the module matrix into a pixel canvas.
//!
//! Modules are drawn at a fixed native density first, then the whole canvas
//! is resampled to the requested edge length with a Lanczos filter. Scaling
//! module-by-module to the target size directly (or resampling with
//! nearest-neighbor) produces moiré on the module grid.

use image::{Rgba, RgbaImage, imageops};
use qrcode::{Color, QrCode};

/// Native pixels per module before resampling.
pub const MODULE_PIXELS: u32 = 10;

/// Quiet-zone width in modules on every side. Some readers refuse codes
/// without a light border.
pub const QUIET_ZONE_MODULES: u32 = 2;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Draw the symbol at native resolution: white canvas, quiet zone on all
/// sides, each dark module as a `MODULE_PIXELS`-wide square.
pub fn rasterize(code: &QrCode) -> RgbaImage {
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let total_modules = module_count + QUIET_ZONE_MODULES * 2;
    let native_size = total_modules * MODULE_PIXELS;

    let mut canvas = RgbaImage::from_pixel(native_size, native_size, WHITE);

    for (y, row) in modules.chunks(module_count as usize).enumerate() {
        for (x, &module) in row.iter().enumerate() {
            if module == Color::Dark {
                let px = (x as u32 + QUIET_ZONE_MODULES) * MODULE_PIXELS;
                let py = (y as u32 + QUIET_ZONE_MODULES) * MODULE_PIXELS;
                for dy in 0..MODULE_PIXELS {
                    for dx in 0..MODULE_PIXELS {
                        canvas.put_pixel(px + dx, py + dy, BLACK);
                    }
                }
            }
        }
    }

    canvas
}

/// Resample the native canvas to exactly `size x size` pixels.
pub fn resample(canvas: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(canvas, size, size, imageops::FilterType::Lanczos3)
}
