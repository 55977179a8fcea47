use clap::Parser;

use crate::converter::{ImageConverter, FROM_FORMAT, TO_FORMAT};
use crate::utils::setup_logging;

#[derive(Parser)]
#[command(
    name = "jpg2png",
    version,
    about = "Bulk convert JPG images in a directory to PNG",
    long_about = "Bulk convert the JPG images in a source directory to PNG images in a \
                  target directory, skipping files that were already converted. The target \
                  directory is created if it doesn't exist and defaults to the source \
                  directory when omitted.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Directory containing the .jpg images to convert
    pub source: String,
    /// Directory to write the converted .png images into [default: SOURCE]
    pub target: Option<String>,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

/// Parse arguments, run one conversion, and map the result to an exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(&cli.log_level) {
        eprintln!("unable to set up logging: {e}");
        return 1;
    }

    let converter = match ImageConverter::new(&cli.source, cli.target.as_deref()) {
        Ok(converter) => converter,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return 1;
        }
    };

    print_header(&converter);
    match converter.convert_images(cli.no_progress) {
        Ok(summary) => {
            log::info!("{summary}");
            println!("{summary}");
            0
        }
        Err(e) => {
            log::error!("conversion aborted: {e}");
            eprintln!("Conversion process aborted: {e}");
            1
        }
    }
}

fn print_header(converter: &ImageConverter) {
    let border = "*".repeat(45);
    println!();
    println!("{border}");
    println!(" Image Converter v. {}", env!("CARGO_PKG_VERSION"));
    println!("{border}");
    println!(
        "Source folder: {} [converting from {}]",
        converter.source_dir().display(),
        FROM_FORMAT.to_uppercase()
    );
    println!(
        "Target folder: {} [converting to {}]",
        converter.target_dir().display(),
        TO_FORMAT.to_uppercase()
    );
    println!();
}
