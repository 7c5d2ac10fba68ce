//! Color helpers for the chart.

use crate::models::Rgb8;
use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette, without the gold entry so
/// no regular series can be mistaken for the emphasized yellow one.
/// Order: Blue, Orange, Gray, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE9: [RGBColor; 9] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Color for the `idx`-th regular series; wraps around.
#[inline]
pub fn palette_color(idx: usize) -> RGBAColor {
    OFFICE9[idx % OFFICE9.len()].to_rgba()
}

/// Color of the emphasized series.
pub fn emphasis_color() -> RGBAColor {
    YELLOW.to_rgba()
}

pub fn to_rgb(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_and_avoids_emphasis() {
        assert_eq!(palette_color(0).rgb(), palette_color(OFFICE9.len()).rgb());
        for i in 0..OFFICE9.len() {
            assert_ne!(palette_color(i).rgb(), emphasis_color().rgb());
        }
    }
}
