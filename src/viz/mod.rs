//! Visualization: render the expenditure time series to **SVG** or **PNG**.
//!
//! - One line (with circle markers) per country; Ukraine is emphasized and drawn on top
//! - Dashed vertical marker per historical event, with a rotated, staggered label
//! - Legend panel to the right of the plot listing countries, then events
//!
//! The numeric side of the chart (`build_series`, `event_label_positions`) is kept
//! apart from rendering so it can be checked without decoding an image.

pub mod legend;
pub mod text;
pub mod util;

use crate::models::Event;
use crate::table::ExpenditureTable;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontTransform};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::{LegendGlyph, LegendItem, draw_legend_panel, legend_panel_width_px};
use util::{emphasis_color, palette_color, to_rgb};

pub const CHART_TITLE: &str = "Military Expenditure Since 2010 - Russia and Border Countries";
pub const Y_AXIS_TITLE: &str = "Military Expenditure (% of GDP)";

/// Series drawn with emphasis, matched against the API display name.
pub const EMPHASIZED_COUNTRY: &str = "Ukraine";

/// Downward offset of each successive event label, as a fraction of the max value.
pub const LABEL_STAGGER: f64 = 0.05;

/// Stand-in maximum when the table has no positive value.
const EMPTY_Y_MAX: f64 = 1.0;

/// One registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Points of one country, sorted by year, missing values left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub country: String,
    pub points: Vec<(i32, f64)>,
    pub emphasized: bool,
}

/// One series per country, in table order.
pub fn build_series(table: &ExpenditureTable) -> Vec<Series> {
    table
        .countries()
        .into_iter()
        .map(|country| {
            let mut points: Vec<(i32, f64)> = table
                .country_records(country)
                .filter_map(|r| r.expenditure.map(|v| (r.year, v)))
                .collect();
            points.sort_by_key(|(y, _)| *y);
            Series {
                country: country.to_string(),
                points,
                emphasized: country == EMPHASIZED_COUNTRY,
            }
        })
        .collect()
}

/// Paint order: regular series first, emphasized ones last so they sit on top.
/// Regular series keep table order.
pub fn draw_order(series: &[Series]) -> Vec<&Series> {
    let mut order: Vec<&Series> = series.iter().collect();
    order.sort_by_key(|s| s.emphasized);
    order
}

/// Line style per series, in the order given. Regular series take palette
/// colors in sequence; the emphasized one is thicker and opaque.
fn series_styles<'a>(series: impl IntoIterator<Item = &'a Series>) -> Vec<ShapeStyle> {
    let mut palette_idx = 0usize;
    series
        .into_iter()
        .map(|s| {
            if s.emphasized {
                emphasis_color().stroke_width(3)
            } else {
                let c = palette_color(palette_idx).mix(0.7);
                palette_idx += 1;
                c.stroke_width(2)
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLabel {
    pub event: Event,
    /// Data-space height of the label's top end.
    pub y: f64,
}

/// Stagger labels downward by `LABEL_STAGGER * max_expenditure` per event so they don't collide.
pub fn event_label_positions(events: &[Event], max_expenditure: f64) -> Vec<EventLabel> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| EventLabel {
            event: *event,
            y: max_expenditure * (1.0 - i as f64 * LABEL_STAGGER),
        })
        .collect()
}

/// Render the chart; the backend is picked from the file extension (`.svg` or bitmap).
///
/// The X axis spans `[min_year, latest_year]`. A table with no numeric value at all
/// still renders: axes, legend and event markers on a 0..1 Y range.
pub fn plot_expenditure<P: AsRef<Path>>(
    table: &ExpenditureTable,
    events: &[Event],
    min_year: i32,
    latest_year: i32,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let max_expenditure = table
        .max_expenditure()
        .filter(|m| *m > 0.0)
        .unwrap_or(EMPTY_Y_MAX);
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let (x_min, mut x_max) = (min_year, latest_year);
    if x_max <= x_min {
        x_max = x_min + 1;
    }

    let series = build_series(table);
    let labels = event_label_positions(events, max_expenditure);
    let frame = Frame {
        x_min: x_min as f64,
        x_max: x_max as f64,
        y_max: max_expenditure * 1.05,
    };

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &series, &labels, frame)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &series, &labels, frame)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &[Series],
    labels: &[EventLabel],
    frame: Frame,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 16;
    const FONT_PX: u32 = 14;

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Legend entries: countries in table order, then events.
    let mut legend_items: Vec<LegendItem> = Vec::with_capacity(series.len() + labels.len());
    for (s, style) in series.iter().zip(series_styles(series)) {
        legend_items.push(LegendItem {
            label: s.country.clone(),
            color: style.color,
            glyph: LegendGlyph::LineMarker,
        });
    }
    for l in labels {
        legend_items.push(LegendItem {
            label: l.event.name.to_string(),
            color: to_rgb(l.event.color.rgb).mix(0.5),
            glyph: LegendGlyph::Dashed,
        });
    }

    let (root_w, _) = root.dim_in_pixel();
    let legend_w = legend_panel_width_px(&legend_items, FONT_PX, root_w);
    let (plot_area, legend_area) = root.split_horizontally(root_w.saturating_sub(legend_w));

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(MARGIN)
        .caption(CHART_TITLE, (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(frame.x_min..frame.x_max, 0f64..frame.y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| (x.round() as i32).to_string();
    let y_label_fmt = |v: &f64| format!("{:.1}", v);
    let x_label_count = ((frame.x_max - frame.x_min) as usize + 1).min(12);

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(Y_AXIS_TITLE)
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    // Event markers go under the data lines.
    let dash_len = frame.y_max / 60.0;
    for l in labels {
        let x = l.event.year as f64;
        if x < frame.x_min || x > frame.x_max {
            continue;
        }
        let line_style = to_rgb(l.event.color.rgb).mix(0.5).stroke_width(2);
        let mut dashes = Vec::new();
        let mut y0 = 0.0;
        while y0 < frame.y_max {
            let y1 = (y0 + dash_len).min(frame.y_max);
            dashes.push(PathElement::new(vec![(x, y0), (x, y1)], line_style));
            y0 += dash_len * 1.8;
        }
        chart.draw_series(dashes).map_err(|e| anyhow!("{:?}", e))?;

        // Reads bottom-to-top, top end at the staggered height, just right of the line.
        let label_style = TextStyle::from((FontFamily::SansSerif, 12))
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Right, VPos::Top))
            .color(&BLACK);
        chart
            .draw_series(std::iter::once(Text::new(
                l.event.name.to_string(),
                (x, l.y),
                label_style,
            )))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    // Regular series come first in draw order and keep table order, so they get
    // the same palette slots as in the legend.
    let layers = draw_order(series);
    let styles = series_styles(layers.iter().copied());
    for (s, style) in layers.into_iter().zip(styles) {
        if s.points.is_empty() {
            continue;
        }
        let marker_r = if s.emphasized { 4 } else { 3 };
        let pts: Vec<(f64, f64)> = s.points.iter().map(|(y, v)| (*y as f64, *v)).collect();
        chart
            .draw_series(LineSeries::new(pts.clone(), style))
            .map_err(|e| anyhow!("{:?}", e))?;
        chart
            .draw_series(
                pts.iter()
                    .map(|(x, y)| Circle::new((*x, *y), marker_r, style.color.filled())),
            )
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    draw_legend_panel(&legend_area, &legend_items, FONT_PX)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(country: &str, emphasized: bool) -> Series {
        Series {
            country: country.into(),
            points: vec![(2020, 1.0)],
            emphasized,
        }
    }

    #[test]
    fn paint_order_keeps_legend_colors() {
        let all = vec![
            series("Russian Federation", false),
            series("Ukraine", true),
            series("Finland", false),
        ];
        let legend: Vec<(String, (u8, u8, u8), u32)> = all
            .iter()
            .zip(series_styles(&all))
            .map(|(s, st)| (s.country.clone(), st.color.rgb(), st.stroke_width))
            .collect();
        let order = draw_order(&all);
        let mut painted: Vec<(String, (u8, u8, u8), u32)> = order
            .iter()
            .zip(series_styles(order.iter().copied()))
            .map(|(s, st)| (s.country.clone(), st.color.rgb(), st.stroke_width))
            .collect();
        assert_eq!(painted.last().map(|p| p.0.as_str()), Some("Ukraine"));
        painted.sort_by_key(|p| all.iter().position(|s| s.country == p.0));
        assert_eq!(painted, legend);
    }
}
