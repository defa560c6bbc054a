use crate::errors::ServiceError;
use image::ImageFormat;
use tracing::debug;

/// An upload that decoded successfully. The original bytes are kept for the
/// extraction request; the decoded pixels are not retained.
#[derive(Debug, Clone)]
pub struct ValidatedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ValidatedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

pub fn validate_image(bytes: Vec<u8>) -> Result<ValidatedImage, ServiceError> {
    let _span = tracing::info_span!("extraction.validate_image", size = bytes.len()).entered();

    if bytes.is_empty() {
        return Err(ServiceError::InvalidImage("empty image payload".into()));
    }

    let format = image::guess_format(&bytes)
        .map_err(|e| ServiceError::InvalidImage(format!("unrecognized image format: {e}")))?;

    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| ServiceError::InvalidImage(format!("failed to decode image: {e}")))?;

    debug!(
        "Decoded {:?} image {}x{}",
        format,
        decoded.width(),
        decoded.height()
    );

    Ok(ValidatedImage {
        width: decoded.width(),
        height: decoded.height(),
        format,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(4, 3, Rgb([200u8, 30, 30]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn accepts_png_and_jpeg() {
        let png = validate_image(encode(ImageFormat::Png)).unwrap();
        assert_eq!(png.mime_type(), "image/png");
        assert_eq!((png.width, png.height), (4, 3));

        let jpeg = validate_image(encode(ImageFormat::Jpeg)).unwrap();
        assert_eq!(jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn rejects_empty_payload() {
        match validate_image(Vec::new()) {
            Err(ServiceError::InvalidImage(reason)) => assert!(reason.contains("empty")),
            other => panic!("expected InvalidImage, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(matches!(
            validate_image(b"definitely not an image".to_vec()),
            Err(ServiceError::InvalidImage(_))
        ));
    }

    #[test]
    fn rejects_truncated_image() {
        let mut png = encode(ImageFormat::Png);
        png.truncate(png.len() / 2);
        assert!(matches!(
            validate_image(png),
            Err(ServiceError::InvalidImage(_))
        ));
    }
}
