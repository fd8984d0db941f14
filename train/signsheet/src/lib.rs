//! Synthetic sheets of random Hebrew signs for character-recognition training.
//!
//! A sheet is a grid of cells, each holding one glyph drawn from a fixed
//! 27-letter alphabet. Every run writes the grayscale image together with a
//! CSV of the labels, one line per grid row.

pub mod config;
pub mod error;
pub mod fonts;
pub mod geom;
pub mod glyphs;
pub mod grid;
pub mod io;
pub mod render;

use std::path::PathBuf;

use log::info;
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use crate::{
    config::SheetConfig,
    error::SheetError,
    fonts::SignFont,
    geom::{CellBox, CellSize},
    glyphs::Label,
    grid::LabelGrid,
};

/// What a finished run wrote.
#[derive(Debug)]
pub struct SheetOutput {
    pub image_path: PathBuf,
    pub labels_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub labels: LabelGrid,
}

/// Loads the font, renders one sheet and writes the image and label files.
pub fn generate(cfg: &SheetConfig) -> Result<SheetOutput, SheetError> {
    cfg.canvas_size()?;
    if !cfg.output_folder.is_dir() {
        return Err(SheetError::MissingOutputFolder(cfg.output_folder.clone()));
    }

    let font = SignFont::load(&cfg.font_path, cfg.font_px)?;
    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let (img, labels) = render::create_sheet(&font, cfg.cell, cfg.rows, cfg.columns, &mut rng)?;

    let image_path = io::save_sheet(&cfg.output_folder, &img)?;
    info!("wrote {}", image_path.display());
    let labels_path = io::write_labels(&cfg.output_folder, &labels)?;
    info!("wrote {}", labels_path.display());

    Ok(SheetOutput {
        image_path,
        labels_path,
        width: img.width(),
        height: img.height(),
        seed,
        labels,
    })
}
