use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use log::info;

use crate::{
    error::SheetError,
    glyphs::{GLYPH_MAP, Label},
};

/// Relative path of the Habbakuk font used for the sheets.
pub const DEFAULT_FONT_PATH: &str = "resources/data/Habbakuk.TTF";
pub const FONT_PX: f32 = 42.0;

/// Ink box of one glyph at the sheet scale.
///
/// `offset_x`/`offset_y` are the distances from the text origin passed to
/// `imageproc::drawing::draw_text_mut` to the top-left of the drawn pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub bw: f32,
    pub bh: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Font loaded for one run, with metrics precomputed for every label.
pub struct SignFont {
    font: FontArc,
    scale: PxScale,
    metrics: [GlyphMetrics; Label::COUNT],
}

impl SignFont {
    pub fn load(path: &Path, px: f32) -> Result<Self, SheetError> {
        let bytes = std::fs::read(path).map_err(|source| SheetError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontArc::try_from_vec(bytes).map_err(|source| SheetError::InvalidFont {
            path: path.to_path_buf(),
            source,
        })?;
        let sign_font = Self::from_font(font, px)?;
        info!("loaded font {} at {px}px", path.display());
        Ok(sign_font)
    }

    pub fn from_font(font: FontArc, px: f32) -> Result<Self, SheetError> {
        if let Some(missing) = Label::all().find(|l| font.glyph_id(l.glyph()).0 == 0) {
            return Err(SheetError::MissingGlyph {
                label: missing.name(),
                glyph: missing.glyph(),
            });
        }

        let scale = PxScale::from(px);
        let metrics = std::array::from_fn(|idx| measure(&font, scale, GLYPH_MAP[idx].1));
        Ok(Self {
            font,
            scale,
            metrics,
        })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }

    pub fn metrics(&self, label: Label) -> &GlyphMetrics {
        &self.metrics[label.index()]
    }
}

// Mirrors the glyph placement of draw_text_mut for a single character.
fn measure(font: &FontArc, scale: PxScale, ch: char) -> GlyphMetrics {
    let scaled = font.as_scaled(scale);
    let id = font.glyph_id(ch);
    let glyph = id.with_scale_and_position(scale, point(0.0, scaled.ascent()));

    match font.outline_glyph(glyph) {
        Some(outlined) => {
            let bb = outlined.px_bounds();
            GlyphMetrics {
                bw: bb.width(),
                bh: bb.height(),
                offset_x: bb.min.x.round() as i32,
                offset_y: bb.min.y.round() as i32,
            }
        }
        None => GlyphMetrics {
            bw: scaled.h_advance(id),
            bh: scaled.ascent() - scaled.descent(),
            offset_x: 0,
            offset_y: 0,
        },
    }
}
