//! Text measurement and wrapping for legend labels.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Break `text` into lines no wider than `max_px`, on word boundaries.
///
/// A single word longer than the limit gets a line of its own and is cut
/// with an ellipsis.
pub fn wrap_label(text: &str, font_px: u32, max_px: u32) -> Vec<String> {
    let fits = |s: &str| estimate_text_width_px(s, font_px) <= max_px;
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();

    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if fits(&candidate) {
            cur = candidate;
            continue;
        }
        if !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
        }
        if fits(word) {
            cur = word.to_string();
        } else {
            lines.push(cut_with_ellipsis(word, font_px, max_px));
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

fn cut_with_ellipsis(word: &str, font_px: u32, max_px: u32) -> String {
    let mut out = String::new();
    for ch in word.chars() {
        let next = format!("{out}{ch}…");
        if estimate_text_width_px(&next, font_px) > max_px {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
