use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use image::GrayImage;

use crate::{error::SheetError, glyphs::Label, grid::LabelGrid};

pub const IMAGE_FILE: &str = "example3.png";
pub const LABELS_FILE: &str = "labels3.csv";

/// Saves the sheet as PNG into `output_folder`.
pub fn save_sheet(output_folder: &Path, img: &GrayImage) -> Result<PathBuf, SheetError> {
    let out_path = output_folder.join(IMAGE_FILE);
    img.save(&out_path)?;
    Ok(out_path)
}

/// Writes one comma-separated line per grid row, replacing any previous file.
pub fn write_labels(output_folder: &Path, labels: &LabelGrid) -> Result<PathBuf, SheetError> {
    let out_path = output_folder.join(LABELS_FILE);
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(&out_path)?;
    for row in labels.iter_rows() {
        writer.write_record(row.iter().map(|l| l.name()))?;
    }
    writer.flush()?;
    Ok(out_path)
}

pub fn read_labels(path: &Path) -> Result<LabelGrid, SheetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let row = record?
            .iter()
            .map(str::parse::<Label>)
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    LabelGrid::from_rows(rows)
}
