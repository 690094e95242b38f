// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::borrow::Cow;

pub const PURPLE: Color = Color::Rgb(139, 92, 246);
pub const PINK: Color = Color::Rgb(236, 72, 153);
pub const MUTED: Color = Color::Rgb(156, 163, 175);
pub const FAINT: Color = Color::Rgb(75, 85, 99);

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}
pub fn muted(s: impl Into<Cow<'static, str>>) -> Span<'static> {
    Span::styled(s, Style::default().fg(MUTED))
}

/* ---------- buttons (purple brackets, pink when selected) ---------- */

const ACCENT_BRACKET: Color = PURPLE;
const SELECTED_TEXT: Color = PINK;
const IDLE_TEXT: Color = Color::White;

/// Core painter: "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    let text_style = if selected {
        Style::default().fg(SELECTED_TEXT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(IDLE_TEXT).add_modifier(Modifier::BOLD)
    };
    vec![
        Span::styled("< ", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
        Span::styled(label, text_style),
        Span::styled(" >", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
    ]
}

/// Convenience: a single Line you can pass to Paragraph/List/etc.
pub fn button_line<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Line<'static> {
    Line::from(button_spans(label, selected))
}

/* ---------- gradients ---------- */

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t.clamp(0.0, 1.0)).round() as u8
}

pub fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Purple-to-pink per character. `shift` rotates the gradient (0.0..1.0) for
/// a slow shimmer.
pub fn gradient_spans(text: &str, shift: f32) -> Vec<Span<'static>> {
    let n = text.chars().count().max(1) as f32;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let pos = (i as f32 / n + shift).fract();
            // triangle wave so the colour runs purple -> pink -> purple
            let t = 1.0 - (2.0 * pos - 1.0).abs();
            Span::styled(
                ch.to_string(),
                Style::default().fg(blend(PURPLE, PINK, t)).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

/// 0.0..1.0 sine pulse with the given period.
pub fn pulse(elapsed_ms: u128, period_ms: u128) -> f32 {
    let period = period_ms.max(1);
    let phase = (elapsed_ms % period) as f32 / period as f32;
    0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
}
