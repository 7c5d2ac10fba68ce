//! Legend panel drawn beside the plot area (single column, never overlapping data).

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::{estimate_text_width_px, wrap_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendGlyph {
    /// Solid line sample with a circle marker (data series).
    LineMarker,
    /// Dashed line sample (event marker).
    Dashed,
}

#[derive(Debug, Clone)]
pub struct LegendItem {
    pub label: String,
    pub color: RGBAColor,
    pub glyph: LegendGlyph,
}

// Layout constants shared by the width estimate and the drawing code.
const PAD_X: i32 = 8;
const SAMPLE_W: i32 = 24;
const SAMPLE_TO_TEXT: i32 = 8;
const ROW_GAP: i32 = 4;

/// Width the panel needs for its longest label, capped at 30% of the canvas.
pub fn legend_panel_width_px(items: &[LegendItem], font_px: u32, total_w: u32) -> u32 {
    let longest = items
        .iter()
        .map(|it| estimate_text_width_px(&it.label, font_px))
        .max()
        .unwrap_or(0);
    let wanted = longest + (2 * PAD_X + SAMPLE_W + SAMPLE_TO_TEXT) as u32;
    let cap = (total_w as f32 * 0.30) as u32;
    wanted.clamp(120.min(cap), cap.max(1))
}

pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[LegendItem],
    font_px: u32,
) -> Result<()> {
    legend_area
        .fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w_u32, _) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;
    let line_h = font_px as i32 + 2;
    let text_x = PAD_X + SAMPLE_W + SAMPLE_TO_TEXT;
    let max_text_w = (w - text_x - PAD_X).max(40) as u32;
    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Center));

    let mut y = 2 * PAD_X;
    for item in items {
        let lines = wrap_label(&item.label, font_px, max_text_w);
        let block_h = (lines.len().max(1) as i32) * line_h;
        let sample_y = y + line_h / 2;

        draw_sample(
            legend_area,
            PAD_X,
            PAD_X + SAMPLE_W,
            sample_y,
            item.color,
            item.glyph,
        )?;

        for (i, line) in lines.iter().enumerate() {
            let line_center_y = y + (i as i32) * line_h + line_h / 2;
            legend_area
                .draw(&Text::new(
                    line.as_str(),
                    (text_x, line_center_y),
                    label_style.clone(),
                ))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        y += block_h + ROW_GAP;
    }

    Ok(())
}

fn draw_sample<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    start_x: i32,
    end_x: i32,
    y: i32,
    color: RGBAColor,
    glyph: LegendGlyph,
) -> Result<()> {
    let line_style = color.stroke_width(2);

    match glyph {
        LegendGlyph::LineMarker => {
            legend_area
                .draw(&PathElement::new(vec![(start_x, y), (end_x, y)], line_style))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            legend_area
                .draw(&Circle::new(((start_x + end_x) / 2, y), 3, color.filled()))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        LegendGlyph::Dashed => {
            let segment_len = 5;
            let gap_len = 3;
            let mut x = start_x;
            while x < end_x {
                let segment_end = (x + segment_len).min(end_x);
                legend_area
                    .draw(&PathElement::new(vec![(x, y), (segment_end, y)], line_style))
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                x = segment_end + gap_len;
            }
        }
    }

    Ok(())
}
