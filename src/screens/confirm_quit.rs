use crossterm::event::{KeyCode, KeyEvent};
use textwrap::core::display_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::components::card;
use crate::ui::layout::centered_rect_abs;
use crate::ui::style; // centralized style

/// Modal drawn over the active screen; the screen underneath keeps running.
pub struct ConfirmQuitScreen {
    selected: usize, // 0 = Don't Quit, 1 = Quit
}

impl ConfirmQuitScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for ConfirmQuitScreen {
    fn default() -> Self { Self::new() }
}

impl ScreenWidget for ConfirmQuitScreen {
    fn title(&self) -> &str {
        " WhatIf 종료 "
    }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let msg = "정말 종료하시겠습니까?";
        let left_label = "취소";
        let right_label = "종료";

        // Compute width in terminal columns; Hangul takes two
        let btn_len = |label: &str| 4 + display_width(label); // "< " + label + " >"
        let buttons_len = btn_len(left_label) + 3 + btn_len(right_label);

        let inner_width = (display_width(msg).max(buttons_len) as u16).max(36);
        let inner_height = 4;

        let area = centered_rect_abs(inner_width + 4, inner_height + 3, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 4])
            .split(inner);

        let msg_line = Paragraph::new(Line::from(vec![Span::raw(msg)])).alignment(Alignment::Center);

        let mut btn_spans = Vec::new();
        btn_spans.extend(style::button_spans(left_label, self.selected == 0));
        btn_spans.push(Span::raw("   "));
        btn_spans.extend(style::button_spans(right_label, self.selected == 1));
        let buttons_line = Paragraph::new(Line::from(btn_spans)).alignment(Alignment::Center);

        f.render_widget(Clear, area);
        f.render_widget(card(true).title(self.title()), area);
        f.render_widget(msg_line, vchunks[1]);
        f.render_widget(buttons_line, vchunks[3]);
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Transition {
        match k.code {
            KeyCode::Esc => return Transition::Dismiss,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char(' ') => {
                self.selected = 1 - self.selected;
            }
            KeyCode::Enter => {
                return if self.selected == 1 { Transition::Quit } else { Transition::Dismiss };
            }
            _ => {}
        }
        Transition::Stay
    }
}
