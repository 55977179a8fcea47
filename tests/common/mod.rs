//! Shared test utilities and fixture generators

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Write a tiny valid JPEG into `dir` under the given file name.
pub fn write_jpg(dir: &Path, name: &str) {
    let img = RgbImage::from_pixel(8, 8, Rgb([200, 30, 30]));
    img.save(dir.join(name))
        .expect("failed to write fixture JPEG");
}

/// Create a temporary source directory seeded with `count` JPEG files
/// named `img_0.jpg` .. `img_{count-1}.jpg`.
pub fn fixture_source(count: usize) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp source dir");
    for i in 0..count {
        write_jpg(dir.path(), &format!("img_{i}.jpg"));
    }
    dir
}

/// Count the files in `dir` carrying exactly the given extension.
pub fn count_files_with_ext(dir: &Path, ext: &str) -> usize {
    fs::read_dir(dir)
        .expect("failed to read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == ext))
        .count()
}
