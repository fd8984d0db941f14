use crate::error::SheetError;

/// Pixel size of one sign cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas dimensions for a `rows x columns` sheet.
    pub fn canvas(self, rows: u32, columns: u32) -> Result<(u32, u32), SheetError> {
        let err = || SheetError::CanvasTooLarge {
            rows,
            columns,
            width: self.width,
            height: self.height,
        };
        let w = self.width.checked_mul(columns).ok_or_else(err)?;
        let h = self.height.checked_mul(rows).ok_or_else(err)?;
        // i32 pixel coordinates are used when drawing
        if w > i32::MAX as u32 || h > i32::MAX as u32 {
            return Err(err());
        }
        Ok((w, h))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl CellBox {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Cell at grid position `(row, col)`; cells tile the canvas without gaps.
    pub fn at(row: u32, col: u32, size: CellSize) -> Self {
        Self::new(size.width * col, size.height * row, size.width, size.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + 0.5 * self.w as f32,
            self.y as f32 + 0.5 * self.h as f32,
        )
    }
}
