use crate::{
    content::Blob,
    error::{Error, Result},
};
use image::ImageFormat;
use std::path::Path;

/// Loads a local image into a [`Blob`] ready to attach to a generation
/// request. The image format is sniffed from the file's magic number and
/// mapped to the matching MIME type; the bytes are sent as-is.
///
/// Note that this is a **blocking** method, and should not be used in async contexts
pub fn load_image(path: impl AsRef<Path>) -> Result<Blob> {
    let bytes = std::fs::read(path)?;
    let mime_type = mime_type(image::guess_format(&bytes)?)?;
    return Ok(Blob::from_bytes(mime_type, bytes));
}

fn mime_type(format: ImageFormat) -> Result<&'static str> {
    return match format {
        ImageFormat::Png => Ok("image/png"),
        ImageFormat::Jpeg => Ok("image/jpeg"),
        ImageFormat::WebP => Ok("image/webp"),
        ImageFormat::Gif => Ok("image/gif"),
        other => Err(Error::msg(format!(
            "unsupported input image format: {other:?}"
        ))),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_png_with_matching_mime_type() {
        let image = image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, image::ImageOutputFormat::Png)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        std::fs::write(&path, bytes.into_inner()).unwrap();

        let blob = load_image(&path).unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert!(blob.to_image().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match load_image("poster_images/does_not_exist.png") {
            Err(Error::Io(_)) => {}
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(load_image(&path).is_err());
    }
}
