//! Block-letter "WhatIf" wordmark.

use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    text::Line,
    widgets::Paragraph,
};

use super::style::gradient_spans;

const GLYPHS: [[&str; 5]; 6] = [
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    ["███", " █ ", " █ ", " █ ", "███"],
    ["█████", "█    ", "████ ", "█    ", "█    "],
];

pub const LOGO_HEIGHT: u16 = 5;

fn rows() -> Vec<String> {
    (0..5)
        .map(|r| GLYPHS.iter().map(|g| g[r]).collect::<Vec<_>>().join(" "))
        .collect()
}

pub fn logo_width() -> u16 {
    rows()[0].chars().count() as u16
}

/// Renders the wordmark centred in `area`, revealed left to right up to
/// `reveal` (0.0..=1.0). Falls back to plain text when the area is too small.
pub fn render_logo(f: &mut Frame<'_>, area: Rect, reveal: f32, shimmer: f32) {
    let reveal = reveal.clamp(0.0, 1.0);
    if area.width < logo_width() || area.height < LOGO_HEIGHT {
        let shown = (6.0 * reveal).ceil() as usize;
        let text: String = "WhatIf".chars().take(shown).collect();
        let p = Paragraph::new(Line::from(gradient_spans(&text, shimmer))).alignment(Alignment::Center);
        f.render_widget(p, area);
        return;
    }

    let width = logo_width() as usize;
    let visible = (width as f32 * reveal).round() as usize;
    let lines: Vec<Line> = rows()
        .into_iter()
        .map(|row| {
            // pad the hidden tail so centring does not jump while revealing
            let shown: String = row
                .chars()
                .enumerate()
                .map(|(i, c)| if i < visible { c } else { ' ' })
                .collect();
            Line::from(gradient_spans(&shown, shimmer))
        })
        .collect();

    let y = area.y + area.height.saturating_sub(LOGO_HEIGHT) / 2;
    let rect = Rect { x: area.x, y, width: area.width, height: LOGO_HEIGHT };
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_equal_width() {
        let rows = rows();
        assert_eq!(rows.len(), LOGO_HEIGHT as usize);
        let w = rows[0].chars().count();
        assert!(rows.iter().all(|r| r.chars().count() == w));
        assert_eq!(w, 33);
    }
}
