use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::app::error::{AppError, Result};

/// What happens to the alpha channel of images that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaPolicy {
    /// Complement every channel, alpha included
    #[default]
    Invert,
    /// Leave alpha as decoded
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertReport {
    pub width: u32,
    pub height: u32,
}

/// Replace every sample `v` with `255 - v`.
///
/// `channels` is the number of interleaved samples per pixel. Under
/// `AlphaPolicy::Preserve` the last sample of 2- and 4-channel pixels is kept.
pub fn invert_samples(samples: &mut [u8], channels: usize, alpha: AlphaPolicy) {
    let has_alpha = channels == 2 || channels == 4;
    if alpha == AlphaPolicy::Invert || !has_alpha {
        samples.iter_mut().for_each(|v| *v = 255 - *v);
        return;
    }

    for pixel in samples.chunks_exact_mut(channels) {
        let (color, _alpha) = pixel.split_at_mut(channels - 1);
        color.iter_mut().for_each(|v| *v = 255 - *v);
    }
}

/// Complement an image.
///
/// 8-bit layouts keep their layout. Deeper or floating point images are
/// reduced to 8-bit RGB, or RGBA when they carry alpha, before inverting.
pub fn invert_image(image: DynamicImage, alpha: AlphaPolicy) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(mut buf) => {
            invert_samples(&mut buf, 1, alpha);
            DynamicImage::ImageLuma8(buf)
        }
        DynamicImage::ImageLumaA8(mut buf) => {
            invert_samples(&mut buf, 2, alpha);
            DynamicImage::ImageLumaA8(buf)
        }
        DynamicImage::ImageRgb8(mut buf) => {
            invert_samples(&mut buf, 3, alpha);
            DynamicImage::ImageRgb8(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => {
            invert_samples(&mut buf, 4, alpha);
            DynamicImage::ImageRgba8(buf)
        }
        other if other.color().has_alpha() => {
            log::warn!("Reducing {:?} image to 8-bit RGBA before inverting", other.color());
            let mut buf = other.to_rgba8();
            invert_samples(&mut buf, 4, alpha);
            DynamicImage::ImageRgba8(buf)
        }
        other => {
            log::warn!("Reducing {:?} image to 8-bit RGB before inverting", other.color());
            let mut buf = other.to_rgb8();
            invert_samples(&mut buf, 3, alpha);
            DynamicImage::ImageRgb8(buf)
        }
    }
}

/// Decode an image, detecting its format from the leading bytes.
///
/// The extension is only consulted when the contents are not recognized.
pub fn load_image(source: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(source)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| AppError::file(source, e))?;
    Ok(reader.decode()?)
}

/// Decode `source`, invert it and write `dest` as PNG.
///
/// The output is PNG whatever extension `dest` has.
pub fn invert_file(source: &Path, dest: &Path, alpha: AlphaPolicy) -> Result<InvertReport> {
    let image = load_image(source)?;
    let report = InvertReport {
        width: image.width(),
        height: image.height(),
    };
    log::info!(
        "Inverting {} ({}x{}, {:?})",
        source.display(),
        report.width,
        report.height,
        image.color()
    );

    invert_image(image, alpha).save_with_format(dest, ImageFormat::Png)?;
    log::info!("Wrote {}", dest.display());
    Ok(report)
}
