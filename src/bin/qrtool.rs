use clap::{Parser, Subcommand};
use qr_util::{
    CharacterSet, DEFAULT_MARGIN, DEFAULT_QRCODE_SIZE, ECLevel, EncodeHints, ImageFormat, QrEncoder,
    decode,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Generate and read QR code images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a QR code image
    Encode {
        #[arg(long)]
        content: String,
        #[arg(long, default_value_t = DEFAULT_QRCODE_SIZE)]
        width: u32,
        /// Defaults to the width
        #[arg(long)]
        height: Option<u32>,
        /// Output name; the suffix is normalised to the chosen format
        #[arg(long)]
        output: PathBuf,
        /// png or jpg; inferred from the output suffix when omitted
        #[arg(long)]
        format: Option<ImageFormat>,
        /// Error correction level (L, M, Q, H)
        #[arg(long, default_value = "H")]
        ec: ECLevel,
        /// Quiet zone in modules
        #[arg(long, default_value_t = DEFAULT_MARGIN)]
        margin: u32,
        /// utf-8 or iso-8859-1
        #[arg(long, default_value = "utf-8")]
        charset: CharacterSet,
    },
    /// Decode the barcode in an image
    Decode {
        #[arg(long)]
        image: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            content,
            width,
            height,
            output,
            format,
            ec,
            margin,
            charset,
        } => {
            let hints = EncodeHints::default()
                .with_error_correction(ec)
                .with_margin(margin)
                .with_character_set(charset);
            encode_cmd(&content, width, height.unwrap_or(width), &output, format, hints)
        }
        Command::Decode { image } => decode_cmd(&image),
    }
}

fn encode_cmd(
    content: &str,
    width: u32,
    height: u32,
    output: &Path,
    format: Option<ImageFormat>,
    hints: EncodeHints,
) -> ExitCode {
    let start = Instant::now();
    match QrEncoder::with_hints(hints).to_file(content, width, height, output, format) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("warning: {}", warning);
            }
            println!(
                "Wrote {} ({}x{}, {}) in {:.2?}",
                outcome.path.display(),
                width,
                height,
                outcome.format,
                start.elapsed()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to encode into {}: {}", output.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn decode_cmd(image: &Path) -> ExitCode {
    let start = Instant::now();
    match decode(image) {
        Ok(result) => {
            println!("Image: {} ({:.2?})", image.display(), start.elapsed());
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to decode {}: {}", image.display(), err);
            ExitCode::FAILURE
        }
    }
}
