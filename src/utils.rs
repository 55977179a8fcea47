use indicatif::{ProgressBar, ProgressStyle};
use std::io;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();
    Ok(())
}

/// Spinner-style progress over the lazy source enumeration. The total is
/// unknown up front (the file set is never materialized), so this counts
/// processed files instead of tracking a bar position.
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .unwrap(),
            );
            pb
        };
        ProgressManager { pb, no_progress }
    }

    pub fn update(&self, count: u64, msg: String) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(msg);
        self.pb.set_position(count);
    }

    pub fn finish(&self, msg: String) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(msg);
    }
}

/// "image" or "images" depending on the count.
pub fn pluralize(count: u64) -> &'static str {
    if count == 1 {
        "image"
    } else {
        "images"
    }
}
