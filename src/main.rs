//! asciify CLI - Convert an image to a colored ASCII art HTML page

use asciify::{AsciifyError, Converter};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "asciify", version, about = "Convert an image to colored ASCII art HTML")]
struct Args {
    /// Input image file
    input: PathBuf,
}

fn parse_args() -> Result<Args, AsciifyError> {
    Args::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => AsciifyError::Usage(Args::command().render_usage().to_string()),
    })
}

fn run() -> Result<PathBuf, AsciifyError> {
    let args = parse_args()?;
    Converter::new().convert_file(&args.input)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(out) => {
            println!("Done. HTML saved to: {}", out.display());
            println!("Open it in a browser and enjoy.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
