// conversion.rs
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageError};
use thiserror::Error;

use crate::app::dialogs::Interaction;
use crate::app::file_list::FileList;
use crate::utils::ActivityLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
}

impl TargetFormat {
    pub fn all() -> [TargetFormat; 5] {
        [
            TargetFormat::Png,
            TargetFormat::Jpeg,
            TargetFormat::Bmp,
            TargetFormat::Gif,
            TargetFormat::Tiff,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Bmp => "BMP",
            TargetFormat::Gif => "GIF",
            TargetFormat::Tiff => "TIFF",
        }
    }

    /// Output extension: the lower-cased format name, so JPEG gives ".jpeg".
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Bmp => "bmp",
            TargetFormat::Gif => "gif",
            TargetFormat::Tiff => "tiff",
        }
    }

    fn image_format(&self) -> image::ImageFormat {
        match self {
            TargetFormat::Png => image::ImageFormat::Png,
            TargetFormat::Jpeg => image::ImageFormat::Jpeg,
            TargetFormat::Bmp => image::ImageFormat::Bmp,
            TargetFormat::Gif => image::ImageFormat::Gif,
            TargetFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

/// Form-level rejections raised before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add some images to convert.")]
    NoFiles,
    #[error("Please select a valid output folder.")]
    InvalidFolder,
    #[error("Resize percentage must be a positive integer.")]
    InvalidScale,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::NoFiles => "No files",
            ValidationError::InvalidFolder => "Invalid folder",
            ValidationError::InvalidScale => "Invalid scale",
        }
    }
}

/// Per-file codec failures. Either one aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not decode image: {0}")]
    Decode(#[source] ImageError),
    #[error("could not encode image: {0}")]
    Encode(#[source] ImageError),
}

/// Everything one conversion run needs, snapshotted at Convert-click.
#[derive(Debug)]
pub struct ConversionRequest {
    pub files: Vec<PathBuf>,
    pub output_directory: PathBuf,
    pub format: TargetFormat,
    pub scale_percent: u32,
    pub overwrite: bool,
}

impl ConversionRequest {
    pub fn from_form(
        files: &FileList,
        output_directory: &str,
        format: TargetFormat,
        scale_text: &str,
        overwrite: bool,
    ) -> Result<Self, ValidationError> {
        if files.is_empty() {
            return Err(ValidationError::NoFiles);
        }
        let output_directory = PathBuf::from(output_directory);
        if output_directory.as_os_str().is_empty() || !output_directory.is_dir() {
            return Err(ValidationError::InvalidFolder);
        }
        let scale_percent = scale_text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|percent| *percent > 0)
            .ok_or(ValidationError::InvalidScale)?;
        Ok(Self {
            files: files.paths().to_vec(),
            output_directory,
            format,
            scale_percent,
            overwrite,
        })
    }
}

pub enum RunOutcome {
    /// Every file was written, or explicitly skipped at the overwrite prompt.
    Completed { written: usize, skipped: usize },
    /// First per-file failure; files after `path` were never attempted and
    /// outputs written before it stay on disk.
    Aborted { path: PathBuf, error: ConvertError },
}

enum FileOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

/// Runs the batch sequentially in list order, fail-fast on the first
/// per-file error. Blocks until the whole list is handled.
pub fn run(
    request: &ConversionRequest,
    interact: &mut dyn Interaction,
    log: &mut ActivityLog,
) -> RunOutcome {
    let mut written = 0;
    let mut skipped = 0;

    for path in &request.files {
        log.push(format!("Processing {}", path.display()));
        match convert_file(path, request, interact) {
            Ok(FileOutcome::Written(output_path)) => {
                written += 1;
                log.push(format!("Saved {}", output_path.display()));
            }
            Ok(FileOutcome::Skipped(output_path)) => {
                skipped += 1;
                log.push(format!("Skipped existing {}", output_path.display()));
            }
            Err(error) => {
                log.push(format!("Failed to convert {}: {}", path.display(), error));
                return RunOutcome::Aborted {
                    path: path.clone(),
                    error,
                };
            }
        }
    }

    log.push(format!(
        "Conversion complete: {} written, {} skipped",
        written, skipped
    ));
    RunOutcome::Completed { written, skipped }
}

fn convert_file(
    path: &Path,
    request: &ConversionRequest,
    interact: &mut dyn Interaction,
) -> Result<FileOutcome, ConvertError> {
    let img = load_image(path).map_err(ConvertError::Decode)?;

    let img = if request.scale_percent != 100 {
        let width = scaled(img.width(), request.scale_percent);
        let height = scaled(img.height(), request.scale_percent);
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let output_path = request
        .output_directory
        .join(format!("{}.{}", stem, request.format.extension()));

    if output_path.exists() && !request.overwrite {
        let replace = interact.confirm(
            "File exists",
            &format!("{} exists. Overwrite?", output_path.display()),
        );
        if !replace {
            return Ok(FileOutcome::Skipped(output_path));
        }
    }

    // JPEG and friends reject alpha/indexed sources, so flatten to RGB first.
    DynamicImage::ImageRgb8(img.to_rgb8())
        .save_with_format(&output_path, request.format.image_format())
        .map_err(ConvertError::Encode)?;

    Ok(FileOutcome::Written(output_path))
}

fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    Ok(ImageReader::open(path)?.decode()?)
}

fn scaled(dimension: u32, percent: u32) -> u32 {
    (dimension as u64 * percent as u64 / 100) as u32
}
