//! Decorative star field and the completion burst.
//!
//! Purely cosmetic: positions are a function of elapsed time only and nothing
//! here feeds back into screen state.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;
use ratatui::{
    layout::Rect,
    prelude::Frame,
    style::{Color, Style},
};

use super::style::{blend, PINK, PURPLE};

#[derive(Debug, Clone)]
struct Star {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    period_ms: f32,
    delay_ms: f32,
}

#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new<R: Rng>(rng: &mut R, count: usize) -> Self {
        let stars = (0..count)
            .map(|i| Star {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>(),
                dx: (rng.gen::<f32>() - 0.5) * 0.2,
                dy: (rng.gen::<f32>() - 0.5) * 0.2,
                period_ms: rng.gen_range(2000.0..5000.0),
                delay_ms: i as f32 * 100.0,
            })
            .collect();
        Self { stars }
    }

    /// Each star drifts along its vector and fades in and out once per period.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, elapsed: Duration) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let t = elapsed.as_secs_f32() * 1000.0;
        let buf = f.buffer_mut();
        for star in &self.stars {
            if t < star.delay_ms {
                continue;
            }
            let local = ((t - star.delay_ms) / star.period_ms).fract();
            let glow = (local * TAU / 2.0).sin();
            let Some((glyph, color)) = star_glyph(glow) else { continue };

            let fx = (star.x + star.dx * local).rem_euclid(1.0);
            let fy = (star.y + star.dy * local).rem_euclid(1.0);
            let x = area.x + (fx * area.width as f32) as u16 % area.width;
            let y = area.y + (fy * area.height as f32) as u16 % area.height;
            buf.get_mut(x, y).set_symbol(glyph).set_style(Style::default().fg(color));
        }
    }
}

fn star_glyph(glow: f32) -> Option<(&'static str, Color)> {
    match glow {
        g if g < 0.2 => None,
        g if g < 0.5 => Some(("·", Color::DarkGray)),
        g if g < 0.85 => Some(("•", Color::Gray)),
        _ => Some(("✦", Color::White)),
    }
}

const BURST_POINTS: usize = 20;

/// Ring of points flying outward from the centre of `area`; `fraction` runs
/// 0.0..=1.0 over the burst's lifetime.
pub fn render_burst(f: &mut Frame<'_>, area: Rect, fraction: f32) {
    if area.width == 0 || area.height == 0 || !(0.0..1.0).contains(&fraction) {
        return;
    }
    // ease-out
    let travel = 1.0 - (1.0 - fraction).powi(2);
    let cx = area.x as f32 + area.width as f32 / 2.0;
    let cy = area.y as f32 + area.height as f32 / 2.0;
    let rx = area.width as f32 / 2.0 * travel;
    let ry = area.height as f32 / 2.0 * travel;
    let glyph = if fraction < 0.5 { "●" } else { "•" };
    let color = blend(PURPLE, PINK, fraction);

    let buf = f.buffer_mut();
    for i in 0..BURST_POINTS {
        let angle = i as f32 / BURST_POINTS as f32 * TAU;
        let x = cx + angle.cos() * rx;
        let y = cy + angle.sin() * ry;
        if x < area.x as f32 || y < area.y as f32 {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        buf.get_mut(x, y).set_symbol(glyph).set_style(Style::default().fg(color));
    }
}
