use image::{GrayImage, Luma};
use imageproc::drawing::draw_text_mut;
use log::{debug, trace};
use rand::Rng;

use crate::{
    error::SheetError,
    fonts::SignFont,
    geom::{CellBox, CellSize},
    glyphs::Label,
    grid::LabelGrid,
};

pub const BACKGROUND: Luma<u8> = Luma([255]);
pub const INK: Luma<u8> = Luma([0]);

/// Draws the glyph of `label` centered in `cell`.
pub fn draw_symbol(canvas: &mut GrayImage, font: &SignFont, label: Label, cell: CellBox) {
    let dm = font.metrics(label);
    let (cx, cy) = cell.center();

    // top-left of the ink box, shifted back to the text origin
    let tl_x = (cx - 0.5 * dm.bw).round() as i32 - dm.offset_x;
    let tl_y = (cy - 0.5 * dm.bh).round() as i32 - dm.offset_y;

    let mut buf = [0u8; 4];
    draw_text_mut(
        canvas,
        INK,
        tl_x,
        tl_y,
        font.scale(),
        font.font(),
        label.glyph().encode_utf8(&mut buf),
    );
}

/// Renders a `rows x columns` sheet of random signs.
///
/// Labels are sampled and drawn cell by cell in row-major order, so the
/// returned grid matches the canvas position for position.
pub fn create_sheet<R: Rng + ?Sized>(
    font: &SignFont,
    cell: CellSize,
    rows: u32,
    columns: u32,
    rng: &mut R,
) -> Result<(GrayImage, LabelGrid), SheetError> {
    let (w, h) = cell.canvas(rows, columns)?;
    debug!("sheet {rows}x{columns}, cell {}x{}, canvas {w}x{h}", cell.width, cell.height);

    let mut img = GrayImage::from_pixel(w, h, BACKGROUND);
    let mut labels = LabelGrid::with_capacity(rows as usize, columns as usize);

    for r in 0..rows {
        for c in 0..columns {
            let label = Label::random(rng);
            labels.push(label);
            trace!("cell ({r}, {c}): {label}");
            draw_symbol(&mut img, font, label, CellBox::at(r, c, cell));
        }
    }

    Ok((img, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::tests::test_font;
    use rand::{SeedableRng, rngs::SmallRng};

    /// Bounding box of non-background pixels inside `cell`.
    fn ink_bounds(img: &GrayImage, cell: CellBox) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in cell.y..cell.y + cell.h {
            for x in cell.x..cell.x + cell.w {
                if img.get_pixel(x, y)[0] < 128 {
                    bounds = Some(match bounds {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        bounds
    }

    #[test]
    fn symbol_is_centered_in_its_cell() {
        let Some(font) = test_font() else {
            eprintln!("no test font available, skipping");
            return;
        };
        let size = CellSize::new(45, 70);
        for label in Label::all() {
            let mut img = GrayImage::from_pixel(90, 140, BACKGROUND);
            let cell = CellBox::at(1, 1, size);
            draw_symbol(&mut img, &font, label, cell);

            let (x0, y0, x1, y1) = ink_bounds(&img, cell).unwrap();
            let (cx, cy) = cell.center();
            let ink_cx = (x0 + x1 + 1) as f32 / 2.0;
            let ink_cy = (y0 + y1 + 1) as f32 / 2.0;
            assert!((ink_cx - cx).abs() <= 2.0, "{label}: x center {ink_cx} vs {cx}");
            assert!((ink_cy - cy).abs() <= 2.0, "{label}: y center {ink_cy} vs {cy}");

            // nothing leaks into the neighbouring cells
            assert!(ink_bounds(&img, CellBox::at(0, 0, size)).is_none());
            assert!(ink_bounds(&img, CellBox::at(1, 0, size)).is_none());
        }
    }

    #[test]
    fn sheet_dimensions_follow_grid() {
        let Some(font) = test_font() else {
            eprintln!("no test font available, skipping");
            return;
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let (img, labels) = create_sheet(&font, CellSize::new(45, 70), 2, 3, &mut rng).unwrap();
        assert_eq!(img.dimensions(), (135, 140));
        assert_eq!(labels.rows(), 2);
        assert_eq!(labels.columns(), 3);
        assert_eq!(labels.iter_rows().count(), 2);
        for r in 0..2 {
            for c in 0..3 {
                let cell = CellBox::at(r, c, CellSize::new(45, 70));
                assert!(ink_bounds(&img, cell).is_some(), "cell ({r}, {c}) is blank");
            }
        }
    }

    #[test]
    fn same_seed_same_sheet() {
        let Some(font) = test_font() else {
            eprintln!("no test font available, skipping");
            return;
        };
        let cell = CellSize::new(45, 70);
        let (img_a, labels_a) =
            create_sheet(&font, cell, 4, 5, &mut SmallRng::seed_from_u64(42)).unwrap();
        let (img_b, labels_b) =
            create_sheet(&font, cell, 4, 5, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(labels_a, labels_b);
        assert_eq!(img_a, img_b);
    }

    #[test]
    fn each_cell_shows_its_recorded_label() {
        let Some(font) = test_font() else {
            eprintln!("no test font available, skipping");
            return;
        };
        let size = CellSize::new(45, 70);
        let mut rng = SmallRng::seed_from_u64(9);
        let (img, labels) = create_sheet(&font, size, 3, 4, &mut rng).unwrap();

        let mut replay = GrayImage::from_pixel(img.width(), img.height(), BACKGROUND);
        for (r, row) in labels.iter_rows().enumerate() {
            for (c, label) in row.iter().enumerate() {
                draw_symbol(&mut replay, &font, *label, CellBox::at(r as u32, c as u32, size));
            }
        }
        assert_eq!(img, replay);
    }
}
