use std::fs;
use std::path::Path;

use headshot_studio_application::{ApplicationError, ExportedFile, ResultExporter};
use headshot_studio_domain::EncodedImage;

#[derive(Debug, Default)]
pub struct FsResultExporter;

impl ResultExporter for FsResultExporter {
    fn export(
        &self,
        image: &EncodedImage,
        output_dir: &str,
        file_stem: &str,
    ) -> Result<ExportedFile, ApplicationError> {
        let dir = if output_dir.trim().is_empty() {
            Path::new(".")
        } else {
            Path::new(output_dir)
        };
        fs::create_dir_all(dir).map_err(|error| ApplicationError::Io(error.to_string()))?;

        let file_path = dir.join(format!("{file_stem}.{}", image.file_extension()));
        fs::write(&file_path, image.bytes())
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        Ok(ExportedFile {
            file_path: file_path.to_string_lossy().to_string(),
            bytes_written: image.byte_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_the_result_with_the_mime_extension() {
        let dir = TempDir::new().expect("tempdir");
        let out = dir.path().join("exports");
        let image = EncodedImage::new("image/png", vec![7, 8, 9]).expect("image");

        let exporter = FsResultExporter;
        let exported = exporter
            .export(&image, &out.to_string_lossy(), "headshot-123")
            .expect("export");

        assert!(exported.file_path.ends_with("headshot-123.png"));
        assert_eq!(exported.bytes_written, 3);
        let written = fs::read(&exported.file_path).expect("read back");
        assert_eq!(written, vec![7, 8, 9]);
    }

    #[test]
    fn creates_the_output_directory_when_missing() {
        let dir = TempDir::new().expect("tempdir");
        let nested = dir.path().join("a/b/c");
        let image = EncodedImage::new("image/jpeg", vec![1]).expect("image");

        let exporter = FsResultExporter;
        let exported = exporter
            .export(&image, &nested.to_string_lossy(), "headshot-1")
            .expect("export");
        assert!(Path::new(&exported.file_path).exists());
        assert!(exported.file_path.ends_with("headshot-1.jpg"));
    }
}
