use std::path::PathBuf;

use clap::Parser;
use signsheet::{CellSize, SheetConfig, config::DEFAULT_OUTPUT_FOLDER};

/// Generate picture of random Hebrew signs from Habbakuk font
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Path to output folder for saving image and labels
    #[arg(long = "output_folder", default_value = DEFAULT_OUTPUT_FOLDER)]
    output_folder: PathBuf,

    /// Number of columns of signs in output picture
    #[arg(long = "no_columns", default_value_t = 10)]
    no_columns: u32,

    /// Number of rows of signs in output picture
    #[arg(long = "no_rows", default_value_t = 15)]
    no_rows: u32,

    /// Width of single sign space
    #[arg(long = "sign_width", default_value_t = 45)]
    sign_width: u32,

    /// Height of single sign space
    #[arg(long = "sign_height", default_value_t = 70)]
    sign_height: u32,

    /// Seed for label sampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for SheetConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output_folder: cli.output_folder,
            cell: CellSize::new(cli.sign_width, cli.sign_height),
            rows: cli.no_rows,
            columns: cli.no_columns,
            seed: cli.seed,
            ..SheetConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SheetConfig::from(Cli::parse());
    let out = signsheet::generate(&cfg)?;
    log::info!(
        "{}x{} sheet with {}x{} signs (seed {})",
        out.width,
        out.height,
        out.labels.rows(),
        out.labels.columns(),
        out.seed
    );

    Ok(())
}
