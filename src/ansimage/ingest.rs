//! Building an [`AnsImage`] from decoded images, readers and files.

use std::io::{BufRead, Seek};
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};

use super::error::AnsImageError;
use super::grid::AnsImage;

/// Resampling filter used by every scale mode.
const SCALE_FILTER: FilterType = FilterType::Lanczos3;

/// How a source image is mapped onto the target pixel envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Scale to exactly fill the area, ignoring the aspect ratio
    #[default]
    Resize,
    /// Scale preserving the aspect ratio, then center-crop to fill the area
    Fill,
    /// Scale preserving the aspect ratio to fit inside the area
    Fit,
}

impl ScaleMode {
    /// Human-readable name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ScaleMode::Resize => "resize",
            ScaleMode::Fill => "fill",
            ScaleMode::Fit => "fit",
        }
    }

    /// Resample `image` into a `width` x `height` envelope.
    pub fn apply(&self, image: &DynamicImage, height: u32, width: u32) -> DynamicImage {
        match self {
            ScaleMode::Resize => image.resize_exact(width, height, SCALE_FILTER),
            ScaleMode::Fill => image.resize_to_fill(width, height, SCALE_FILTER),
            ScaleMode::Fit => image.resize(width, height, SCALE_FILTER),
        }
    }
}

impl AnsImage {
    /// Create a grid holding the pixels of a decoded image.
    ///
    /// An odd-height image loses its last row so the grid height stays even.
    pub fn from_image(image: &DynamicImage) -> Result<Self, AnsImageError> {
        let rgb = image.to_rgb8();
        let (width, mut height) = rgb.dimensions();
        if height % 2 != 0 {
            height -= 1;
        }

        let mut ansimage = AnsImage::new(to_coord(height)?, to_coord(width)?)?;

        for (x, y, px) in rgb.enumerate_pixels() {
            if y >= height {
                continue;
            }
            let [r, g, b] = px.0;
            ansimage.set_at(to_coord(y)?, to_coord(x)?, r.into(), g.into(), b.into())?;
        }

        Ok(ansimage)
    }

    /// Create a grid from an image scaled into a `height` x `width` envelope.
    ///
    /// # Errors
    /// [`AnsImageError::InvalidBounds`] if the envelope is below 2 in either axis.
    pub fn from_image_scaled(
        height: u32,
        width: u32,
        mode: ScaleMode,
        image: &DynamicImage,
    ) -> Result<Self, AnsImageError> {
        if height < 2 || width < 2 {
            return Err(AnsImageError::InvalidBounds);
        }
        AnsImage::from_image(&mode.apply(image, height, width))
    }

    /// Decode an image from a reader and build a grid from it.
    ///
    /// The format is guessed from the content.
    pub fn from_reader<R: BufRead + Seek>(reader: R) -> Result<Self, AnsImageError> {
        AnsImage::from_image(&decode(reader)?)
    }

    /// Decode an image from a reader and build a scaled grid from it.
    pub fn from_reader_scaled<R: BufRead + Seek>(
        height: u32,
        width: u32,
        mode: ScaleMode,
        reader: R,
    ) -> Result<Self, AnsImageError> {
        AnsImage::from_image_scaled(height, width, mode, &decode(reader)?)
    }

    /// Decode an image file and build a grid from it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnsImageError> {
        AnsImage::from_image(&open(path)?)
    }

    /// Decode an image file and build a scaled grid from it.
    pub fn from_file_scaled<P: AsRef<Path>>(
        height: u32,
        width: u32,
        mode: ScaleMode,
        path: P,
    ) -> Result<Self, AnsImageError> {
        AnsImage::from_image_scaled(height, width, mode, &open(path)?)
    }
}

fn decode<R: BufRead + Seek>(reader: R) -> Result<DynamicImage, AnsImageError> {
    Ok(ImageReader::new(reader).with_guessed_format()?.decode()?)
}

fn open<P: AsRef<Path>>(path: P) -> Result<DynamicImage, AnsImageError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

fn to_coord(value: u32) -> Result<i32, AnsImageError> {
    i32::try_from(value).map_err(|_| AnsImageError::InvalidBounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_from_image_copies_colors() {
        let mut src = RgbImage::new(3, 4);
        src.put_pixel(2, 1, Rgb([10, 20, 30]));
        let img = AnsImage::from_image(&DynamicImage::ImageRgb8(src)).unwrap();
        assert_eq!(img.height(), 4);
        assert_eq!(img.width(), 3);
        let px = img.get_at(1, 2).unwrap();
        assert_eq!((px.r, px.g, px.b), (10, 20, 30));
        assert!(!px.is_upper());
    }

    #[test]
    fn test_from_image_drops_last_odd_row() {
        let img = AnsImage::from_image(&solid(4, 7, [1, 1, 1])).unwrap();
        assert_eq!(img.height(), 6);
        assert_eq!(img.width(), 4);
    }

    #[test]
    fn test_from_image_one_row_is_invalid() {
        let result = AnsImage::from_image(&solid(4, 1, [0, 0, 0]));
        assert!(matches!(result, Err(AnsImageError::InvalidBounds)));
    }

    #[test]
    fn test_from_image_one_column_is_invalid() {
        let result = AnsImage::from_image(&solid(1, 4, [0, 0, 0]));
        assert!(matches!(result, Err(AnsImageError::InvalidBounds)));
    }

    #[test]
    fn test_scaled_resize_is_exact() {
        let src = solid(50, 20, [9, 9, 9]);
        let img = AnsImage::from_image_scaled(8, 12, ScaleMode::Resize, &src).unwrap();
        assert_eq!((img.height(), img.width()), (8, 12));
    }

    #[test]
    fn test_scaled_fill_is_exact() {
        let src = solid(40, 20, [9, 9, 9]);
        let img = AnsImage::from_image_scaled(10, 10, ScaleMode::Fill, &src).unwrap();
        assert_eq!((img.height(), img.width()), (10, 10));
    }

    #[test]
    fn test_scaled_fit_preserves_aspect() {
        let src = solid(50, 100, [9, 9, 9]);
        let img = AnsImage::from_image_scaled(10, 10, ScaleMode::Fit, &src).unwrap();
        assert!(img.height() <= 10 && img.width() <= 10);
        assert_eq!(img.height(), 10);
        assert_eq!(img.width(), 5);
    }

    #[test]
    fn test_scaled_rejects_tiny_envelope() {
        let src = solid(10, 10, [0, 0, 0]);
        assert!(matches!(
            AnsImage::from_image_scaled(1, 10, ScaleMode::Fit, &src),
            Err(AnsImageError::InvalidBounds)
        ));
        assert!(matches!(
            AnsImage::from_image_scaled(10, 0, ScaleMode::Resize, &src),
            Err(AnsImageError::InvalidBounds)
        ));
    }

    #[test]
    fn test_from_reader_rejects_garbage() {
        let reader = std::io::Cursor::new(b"definitely not an image".to_vec());
        assert!(matches!(
            AnsImage::from_reader(reader),
            Err(AnsImageError::Decode(_))
        ));
    }

    #[test]
    fn test_scale_mode_names() {
        assert_eq!(ScaleMode::default(), ScaleMode::Resize);
        assert_eq!(ScaleMode::Resize.name(), "resize");
        assert_eq!(ScaleMode::Fill.name(), "fill");
        assert_eq!(ScaleMode::Fit.name(), "fit");
    }
}
