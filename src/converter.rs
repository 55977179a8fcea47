use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::ConvertError;
use crate::utils::{pluralize, ProgressManager};

/// Extension of the images read from the source directory.
pub const FROM_FORMAT: &str = "jpg";
/// Extension of the images written to the target directory.
pub const TO_FORMAT: &str = "png";

/// Bulk converter from `FROM_FORMAT` images in a source directory to
/// `TO_FORMAT` images in a target directory. Works with both relative and
/// absolute directory paths; the target defaults to the source when omitted.
///
/// One converter owns one directory pair. The pair is immutable except
/// through [`ImageConverter::set_directories`], which replaces it whole or
/// not at all.
#[derive(Debug)]
pub struct ImageConverter {
    directories: (String, String),
}

/// What happened to a single source file. A failure is not an outcome:
/// it aborts the remaining run via [`ConvertError::UnexpectedFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted,
    AlreadyExists,
}

/// Counters for one conversion run, created fresh per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Source files enumerated, whatever their outcome.
    pub attempted: u64,
    /// Files actually decoded and written to the target directory.
    pub converted: u64,
    /// Extension the run actually wrote, for reporting.
    pub to_format: String,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} of {} {} {} to {}",
            self.converted,
            self.attempted,
            FROM_FORMAT.to_uppercase(),
            pluralize(self.attempted),
            self.to_format.to_uppercase()
        )
    }
}

fn validate_dir(value: &str, which: &str) -> Result<String, ConvertError> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidDirectoryInput {
            reason: format!("{which} directory must be a non-empty path"),
        });
    }
    Ok(value.to_string())
}

impl ImageConverter {
    /// Build a converter for the given pair. When `target` is omitted the
    /// source directory doubles as the target.
    pub fn new(source: &str, target: Option<&str>) -> Result<Self, ConvertError> {
        let mut converter = ImageConverter { directories: (String::new(), String::new()) };
        converter.set_directories(source, target)?;
        Ok(converter)
    }

    /// Replace the directory pair. Validation happens before assignment, so
    /// on error the previously held pair is untouched.
    pub fn set_directories(&mut self, source: &str, target: Option<&str>) -> Result<(), ConvertError> {
        let source = validate_dir(source, "source")?;
        let target = match target {
            Some(t) => validate_dir(t, "target")?,
            None => source.clone(),
        };
        self.directories = (source, target);
        Ok(())
    }

    /// Source and target directories as the raw pair they were set from.
    pub fn directories(&self) -> (&str, &str) {
        (&self.directories.0, &self.directories.1)
    }

    pub fn source_dir(&self) -> PathBuf {
        PathBuf::from(&self.directories.0)
    }

    pub fn target_dir(&self) -> PathBuf {
        PathBuf::from(&self.directories.1)
    }

    /// Lazy view of the `FROM_FORMAT` files currently in the source
    /// directory. Re-queries the filesystem on every call and never caches,
    /// so it always reflects current directory state. An unreadable or
    /// missing source directory enumerates as empty. Order is whatever the
    /// filesystem returns; callers must not rely on it.
    pub fn source_images(&self) -> impl Iterator<Item = PathBuf> {
        fs::read_dir(self.source_dir())
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == FROM_FORMAT)
            })
    }

    /// Create the target directory if it doesn't exist. Creation is
    /// single-level: the parent must already exist. A pre-existing target
    /// counts as success, as does source and target being the same path.
    pub fn ensure_target_dir(&self) -> Result<(), ConvertError> {
        if self.source_dir() == self.target_dir() {
            return Ok(());
        }
        match fs::create_dir(self.target_dir()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(ConvertError::TargetDirUnavailable { path: self.target_dir(), source: e }),
        }
    }

    /// Convert every source image that is missing from the target directory,
    /// writing `<stem>.png` next to any already-converted files.
    pub fn convert_images(&self, no_progress: bool) -> Result<ConversionSummary, ConvertError> {
        self.convert_images_to(TO_FORMAT, no_progress)
    }

    /// Like [`ImageConverter::convert_images`] but with an explicit target
    /// extension. The codec picks the output encoding from that extension.
    pub fn convert_images_to(
        &self,
        to_format: &str,
        no_progress: bool,
    ) -> Result<ConversionSummary, ConvertError> {
        self.ensure_target_dir()?;

        let target_dir = self.target_dir();
        let pm = ProgressManager::new(no_progress);
        let mut attempted = 0u64;
        let mut converted = 0u64;

        for source_img in self.source_images() {
            attempted += 1;
            match self.convert_one(&source_img, &target_dir, to_format)? {
                ConversionOutcome::Converted => converted += 1,
                ConversionOutcome::AlreadyExists => {}
            }
            pm.update(attempted, format!("processed {} {}", attempted, pluralize(attempted)));
        }
        pm.finish(format!("processed {} {}", attempted, pluralize(attempted)));

        if attempted == 0 {
            return Err(ConvertError::NoSourceImages {
                dir: self.source_dir(),
                format: FROM_FORMAT.to_uppercase(),
            });
        }
        Ok(ConversionSummary { attempted, converted, to_format: to_format.to_string() })
    }

    /// Convert a single source file unless its converted counterpart already
    /// exists. Existence is probed by opening the candidate target for read;
    /// only a clean "not found" triggers a conversion. Any other error
    /// aborts the run.
    fn convert_one(
        &self,
        source_img: &Path,
        target_dir: &Path,
        to_format: &str,
    ) -> Result<ConversionOutcome, ConvertError> {
        let stem = source_img.file_stem().ok_or_else(|| {
            ConvertError::unexpected(
                source_img,
                io::Error::new(io::ErrorKind::InvalidInput, "source file has no stem"),
            )
        })?;
        let target_name = format!("{}.{}", stem.to_string_lossy(), to_format);
        let target_path = target_dir.join(&target_name);

        info!("attempting to open image {} in {}", target_name, target_dir.display());
        match File::open(&target_path) {
            Ok(_) => {
                info!("image {} already exists in {}", target_name, target_dir.display());
                Ok(ConversionOutcome::AlreadyExists)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("the image does not exist, converting {} to {}", source_img.display(), to_format);
                let img = image::open(source_img)
                    .map_err(|e| ConvertError::unexpected(source_img, e))?;
                img.save(&target_path)
                    .map_err(|e| ConvertError::unexpected(&target_path, e))?;
                info!("successfully saved {} to {}", target_name, target_dir.display());
                Ok(ConversionOutcome::Converted)
            }
            Err(e) => Err(ConvertError::unexpected(&target_path, e)),
        }
    }
}
