use std::path::PathBuf;

use crate::{
    error::SheetError,
    fonts::{DEFAULT_FONT_PATH, FONT_PX},
    geom::CellSize,
};

pub const DEFAULT_OUTPUT_FOLDER: &str = "resources/data/generated";

/// Everything one generator run needs.
#[derive(Clone, Debug)]
pub struct SheetConfig {
    pub output_folder: PathBuf,
    pub font_path: PathBuf,
    pub font_px: f32,
    pub cell: CellSize,
    pub rows: u32,
    pub columns: u32,
    /// Seed for label sampling; a fresh one is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_px: FONT_PX,
            cell: CellSize::new(45, 70),
            rows: 15,
            columns: 10,
            seed: None,
        }
    }
}

impl SheetConfig {
    /// Checks the geometry and returns the canvas size.
    pub fn canvas_size(&self) -> Result<(u32, u32), SheetError> {
        let CellSize { width, height } = self.cell;
        if self.rows == 0 || self.columns == 0 || width == 0 || height == 0 {
            return Err(SheetError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
                width,
                height,
            });
        }
        self.cell.canvas(self.rows, self.columns)
    }
}
