//! Client-side image edits: quarter-turn rotation and rectangular
//! crops, re-encoded as JPEG for upload back to the file data
//! endpoint.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, ImageReader, Limits};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{AppError, ErrorKind, FULL_TURN_DEGREES, JPEG_QUALITY};
use crate::{MAX_IMAGE_ALLOC, MAX_IMAGE_BYTES, MAX_IMAGE_DIMENSION};

#[derive(Debug, Error)]
pub enum ImageEditError {
    #[error("failed to decode image: {source}")]
    Decode {
        #[from]
        source: image::ImageError,
    },

    #[error("jpeg encoding failed: width={width}, height={height}, reason={reason}")]
    JpegEncode {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("invalid crop region: x={x}, y={y}, width={width}, height={height}, reason={reason}")]
    InvalidCrop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("crop region is zero-sized after clamping")]
    ZeroCrop,

    #[error("rotation of {degrees} degrees cannot be saved, only quarter turns can")]
    NotAQuarterTurn { degrees: i32 },

    #[error("input too large: {size} bytes, max {max_size}")]
    InputTooLarge { size: usize, max_size: usize },

    #[error("input bytes empty")]
    EmptyInput,

    #[error("unsupported image format")]
    UnsupportedFormat,
}

impl From<ImageEditError> for AppError {
    fn from(e: ImageEditError) -> Self {
        let kind = match &e {
            ImageEditError::NotAQuarterTurn { .. }
            | ImageEditError::InvalidCrop { .. }
            | ImageEditError::ZeroCrop => ErrorKind::Validation,
            _ => ErrorKind::ImageProcessing,
        };
        AppError::new(kind, e.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct EditLimits {
    pub max_input_bytes: usize,
    pub max_dimension: u32,
    pub max_alloc_bytes: u64,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: MAX_IMAGE_BYTES,
            max_dimension: MAX_IMAGE_DIMENSION,
            max_alloc_bytes: MAX_IMAGE_ALLOC,
        }
    }
}

/// Accumulated display rotation, always normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RotationAngle(i32);

impl RotationAngle {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn new(degrees: i32) -> Self {
        Self(degrees.rem_euclid(FULL_TURN_DEGREES))
    }

    #[must_use]
    pub fn add(self, delta: i32) -> Self {
        Self::new(self.0.wrapping_add(delta))
    }

    #[must_use]
    pub const fn degrees(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_quarter_turn(self) -> bool {
        self.0 % 90 == 0
    }

    /// Whether applying this rotation swaps an image's width and
    /// height.
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        self.0 == 90 || self.0 == 270
    }
}

/// Crop rectangle in the pixel space of the (already rotated) source
/// image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Whole-frame region; `clamp_to` cuts it down to the actual
    /// image size.
    pub const FULL: Self = Self {
        x: 0,
        y: 0,
        width: u32::MAX,
        height: u32::MAX,
    };

    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self, ImageEditError> {
        if width == 0 || height == 0 {
            return Err(ImageEditError::InvalidCrop {
                x,
                y,
                width,
                height,
                reason: "zero-area region",
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Clamp the region into `image_width` x `image_height`.
    pub fn clamp_to(self, image_width: u32, image_height: u32) -> Result<Self, ImageEditError> {
        if self.x >= image_width || self.y >= image_height {
            return Err(ImageEditError::ZeroCrop);
        }

        let width = self.width.min(image_width - self.x);
        let height = self.height.min(image_height - self.y);

        if width == 0 || height == 0 {
            return Err(ImageEditError::ZeroCrop);
        }

        Ok(Self {
            x: self.x,
            y: self.y,
            width,
            height,
        })
    }
}

pub fn decode_image(limits: &EditLimits, raw_bytes: &[u8]) -> Result<DynamicImage, ImageEditError> {
    if raw_bytes.is_empty() {
        return Err(ImageEditError::EmptyInput);
    }

    if raw_bytes.len() > limits.max_input_bytes {
        return Err(ImageEditError::InputTooLarge {
            size: raw_bytes.len(),
            max_size: limits.max_input_bytes,
        });
    }

    let mut reader = ImageReader::new(Cursor::new(raw_bytes))
        .with_guessed_format()
        .map_err(|e| ImageEditError::Decode { source: e.into() })?;

    if reader.format().is_none() {
        return Err(ImageEditError::UnsupportedFormat);
    }

    let mut decode_limits = Limits::default();
    decode_limits.max_image_width = Some(limits.max_dimension);
    decode_limits.max_image_height = Some(limits.max_dimension);
    decode_limits.max_alloc = Some(limits.max_alloc_bytes);
    reader.limits(decode_limits);

    Ok(reader.decode()?)
}

/// Rotate by a quarter turn. 90 and 270 degree outputs have width and
/// height swapped relative to the source.
pub fn apply_rotation(
    img: &DynamicImage,
    angle: RotationAngle,
) -> Result<DynamicImage, ImageEditError> {
    match angle.degrees() {
        0 => Ok(img.clone()),
        90 => Ok(img.rotate90()),
        180 => Ok(img.rotate180()),
        270 => Ok(img.rotate270()),
        degrees => Err(ImageEditError::NotAQuarterTurn { degrees }),
    }
}

pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImageEditError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    if width == 0 || height == 0 {
        return Err(ImageEditError::JpegEncode {
            width,
            height,
            reason: "zero dimension".into(),
        });
    }

    let mut buffer = Vec::with_capacity((width * height * 3) as usize / 10);
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageEditError::JpegEncode {
            width,
            height,
            reason: e.to_string(),
        })?;

    if buffer.len() < 2 || buffer[0..2] != [0xFF, 0xD8] {
        return Err(ImageEditError::JpegEncode {
            width,
            height,
            reason: "invalid jpeg magic bytes".into(),
        });
    }

    Ok(buffer)
}

/// The whole rotation-save transform: decode, quarter-turn, re-encode.
pub fn rotate_file_image(
    limits: &EditLimits,
    raw_bytes: &[u8],
    angle: RotationAngle,
) -> Result<Vec<u8>, ImageEditError> {
    let img = decode_image(limits, raw_bytes)?;
    let rotated = apply_rotation(&img, angle)?;
    encode_jpeg(&rotated, JPEG_QUALITY)
}

/// The whole crop-save transform. A pending crop-session rotation is
/// applied first; the region is then cut in the rotated pixel space,
/// matching what the cropping overlay displayed.
pub fn crop_file_image(
    limits: &EditLimits,
    raw_bytes: &[u8],
    region: CropRegion,
    rotation: RotationAngle,
) -> Result<Vec<u8>, ImageEditError> {
    let img = decode_image(limits, raw_bytes)?;
    let rotated = apply_rotation(&img, rotation)?;
    let (width, height) = rotated.dimensions();

    let region = region.clamp_to(width, height).inspect_err(|e| {
        warn!(error = %e, width, height, "crop region rejected");
    })?;

    let cropped = rotated.crop_imm(region.x, region.y, region.width, region.height);
    encode_jpeg(&cropped, JPEG_QUALITY)
}
