//! Composes one canvas-sized wallpaper from every monitor's next image.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageReader, Rgb, RgbImage};

use super::monitor::MonitorDescriptor;
use super::rotation::Draw;
use crate::config::ResizeMode;
use crate::geometry::VirtualCanvas;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Draws the next image for each monitor and pastes it at the monitor's
/// canvas offset.
///
/// Monitors with nothing to show, or whose image fails to decode, get a black
/// tile of their exact size. Areas of the canvas not covered by any monitor
/// stay black.
#[must_use]
pub fn render(monitors: &mut [MonitorDescriptor], canvas: &VirtualCanvas, resize: ResizeMode) -> RgbImage {
    let mut composite = RgbImage::from_pixel(canvas.width, canvas.height, BLACK);

    for monitor in monitors.iter_mut() {
        let tile = match monitor.next_image() {
            Draw::Image(path) => load_tile(&path, monitor.width(), monitor.height(), resize).unwrap_or_else(|err| {
                tracing::warn!(
                    monitor = %monitor.name(),
                    path = %path.display(),
                    error = %err,
                    "failed to load image, using placeholder"
                );
                placeholder(monitor.width(), monitor.height())
            }),
            Draw::NoImage => placeholder(monitor.width(), monitor.height()),
        };

        let (x, y) = canvas.offset_of(monitor.rect());
        imageops::overlay(&mut composite, &tile, i64::from(x), i64::from(y));
    }

    composite
}

fn placeholder(width: u32, height: u32) -> RgbImage { RgbImage::from_pixel(width, height, BLACK) }

fn load_tile(path: &Path, width: u32, height: u32, resize: ResizeMode) -> Result<RgbImage, image::ImageError> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    let fitted = match resize {
        ResizeMode::Stretch => img.resize_exact(width, height, FilterType::CatmullRom),
        ResizeMode::Cover => resize_to_cover(&img, width, height),
    };

    Ok(fitted.to_rgb8())
}

/// Scales `img` preserving its aspect ratio until it covers
/// `width x height`, then center-crops the overflow.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn resize_to_cover(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (img_width, img_height) = img.dimensions();

    let scale_x = f64::from(width) / f64::from(img_width);
    let scale_y = f64::from(height) / f64::from(img_height);
    let scale = scale_x.max(scale_y);

    // Round up so truncation never leaves the scaled image a pixel short.
    let scaled_width = ((f64::from(img_width) * scale).ceil() as u32).max(width);
    let scaled_height = ((f64::from(img_height) * scale).ceil() as u32).max(height);

    let resized = img.resize_exact(scaled_width, scaled_height, FilterType::CatmullRom);

    let crop_x = (scaled_width - width) / 2;
    let crop_y = (scaled_height - height) / 2;
    resized.crop_imm(crop_x, crop_y, width, height)
}
