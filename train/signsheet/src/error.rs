use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot read font {path}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not a usable font")]
    InvalidFont {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
    #[error("font has no glyph {glyph:?} for label {label}")]
    MissingGlyph { label: &'static str, glyph: char },
    #[error("empty sheet: {rows}x{columns} cells of {width}x{height} px")]
    EmptyGrid {
        rows: u32,
        columns: u32,
        width: u32,
        height: u32,
    },
    #[error("sheet of {rows}x{columns} cells of {width}x{height} px exceeds image limits")]
    CanvasTooLarge {
        rows: u32,
        columns: u32,
        width: u32,
        height: u32,
    },
    #[error("output folder {0} does not exist")]
    MissingOutputFolder(PathBuf),
    #[error("unknown label {0:?}")]
    UnknownLabel(String),
    #[error("label row {row} has {found} entries, expected {expected}")]
    RaggedLabels {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
