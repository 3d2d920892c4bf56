use std::fs;
use std::io::Cursor;
use std::path::Path;

use headshot_studio_application::{ApplicationError, SourceImageLoader};
use headshot_studio_domain::{mime_type_for_path, EncodedImage};
use image::io::Reader as ImageReader;

#[derive(Debug, Default)]
pub struct FsImageLoader;

impl SourceImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<EncodedImage, ApplicationError> {
        let Some(mime_type) = mime_type_for_path(path) else {
            return Err(ApplicationError::InvalidInput(format!(
                "unsupported image file: {}",
                path.display()
            )));
        };

        let bytes = fs::read(path).map_err(|error| ApplicationError::Io(error.to_string()))?;

        // Reject files that merely carry an image extension.
        ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        EncodedImage::new(mime_type, bytes).map_err(ApplicationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use tempfile::TempDir;

    #[test]
    fn loads_a_real_jpeg() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("selfie.jpg");
        let img = ImageBuffer::from_fn(32, 24, |_x, _y| Rgb([120_u8, 90_u8, 60_u8]));
        img.save_with_format(&path, ImageFormat::Jpeg).expect("save");

        let loader = FsImageLoader;
        let image = loader.load(&path).expect("load");
        assert_eq!(image.mime_type(), "image/jpeg");
        assert!(image.byte_count() > 0);
    }

    #[test]
    fn rejects_an_unsupported_extension() {
        let loader = FsImageLoader;
        let result = loader.load(Path::new("document.pdf"));
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn rejects_a_file_that_is_not_an_image() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("fake.png");
        fs::write(&path, b"definitely not a png").expect("write");

        let loader = FsImageLoader;
        let result = loader.load(&path);
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let loader = FsImageLoader;
        let result = loader.load(Path::new("/nonexistent/selfie.jpg"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
