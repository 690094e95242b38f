use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    prelude::Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::Duration;
use textwrap::wrap;
use tracing::debug;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::defaults::Defaults;
use crate::flow::FlowEvent;
use crate::timer::{TimerId, Timers};
use crate::ui::common_nav::typed_char;
use crate::ui::components::{card, field_line, TextField};
use crate::ui::help::help_input;
use crate::ui::layout::{stack, three_box_layout, Margins};
use crate::ui::style::{blend, button_spans, gradient_spans, muted, pulse, PINK, PURPLE};

#[derive(Debug, Clone, Copy)]
enum InputTimer {
    AutoDemo,
    Type,
}

/// Scripted typing in progress: `written` chars of the first template so far.
struct Typing {
    timer: TimerId,
    written: usize,
}

const FIELD: usize = 0;
const GENERATE: usize = 1;
const FIRST_TEMPLATE: usize = 2;
const FOCUS_COUNT: usize = FIRST_TEMPLATE + Defaults::TEMPLATES.len();

pub struct PromptInputScreen {
    timers: Timers<InputTimer>,
    prompt: TextField,
    focus: usize,
    typing: Option<Typing>,
    submitted: bool,
}

impl PromptInputScreen {
    pub fn new() -> Self {
        let mut timers = Timers::new();
        timers.after(Defaults::AUTO_DEMO_DELAY, InputTimer::AutoDemo);
        Self { timers, prompt: TextField::default(), focus: FIELD, typing: None, submitted: false }
    }

    #[cfg(test)]
    fn text(&self) -> &str {
        &self.prompt.text
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    fn start_auto_demo(&mut self) {
        let timer = self.timers.every(Defaults::TYPING_TICK, InputTimer::Type);
        self.typing = Some(Typing { timer, written: 0 });
        self.prompt.set("");
        self.focus = FIELD;
        debug!("auto-demo typing started");
    }

    fn type_next(&mut self) {
        let script = Defaults::TEMPLATES[0].text;
        let Some(typing) = self.typing.as_mut() else { return };
        let total = script.chars().count();
        typing.written = (typing.written + 1).min(total);
        let prefix: String = script.chars().take(typing.written).collect();
        self.prompt.set(&prefix);

        // done typing; it never submits on its own
        if typing.written >= total {
            let timer = typing.timer;
            self.timers.cancel(timer);
            self.typing = None;
        }
    }

    fn submit(&mut self) -> Transition {
        if self.submitted {
            return Transition::Stay;
        }
        let text = self.prompt.text.trim();
        if text.is_empty() {
            debug!("ignoring empty submission");
            return Transition::Stay;
        }
        let text = text.to_string();
        self.submitted = true;
        if let Some(typing) = self.typing.take() {
            self.timers.cancel(typing.timer);
        }
        Transition::Advance(FlowEvent::Submit(text))
    }

    fn pick_template(&mut self, idx: usize) {
        if self.is_typing() {
            return;
        }
        if let Some(t) = Defaults::TEMPLATES.get(idx) {
            self.prompt.set(t.text);
            self.focus = FIELD;
        }
    }

    fn edit(&mut self, k: KeyEvent) {
        if self.is_typing() {
            return;
        }
        match k.code {
            KeyCode::Left => self.prompt.move_left(),
            KeyCode::Right => self.prompt.move_right(),
            KeyCode::Home => self.prompt.home(),
            KeyCode::End => self.prompt.end(),
            KeyCode::Backspace => self.prompt.backspace(),
            KeyCode::Delete => self.prompt.delete(),
            _ => {
                if let Some(c) = typed_char(k) {
                    self.focus = FIELD;
                    self.prompt.insert_char(c);
                }
            }
        }
    }

    fn template_line(&self, idx: usize) -> Line<'static> {
        let t = &Defaults::TEMPLATES[idx];
        let selected = self.focus == FIRST_TEMPLATE + idx;
        let mut spans = button_spans(format!("{} {}", t.emoji, t.text), selected);
        if self.is_typing() {
            for s in spans.iter_mut() {
                s.style = s.style.add_modifier(Modifier::DIM);
            }
        }
        Line::from(spans)
    }

    fn generate_line(&self) -> Line<'static> {
        // brackets breathe between purple and pink
        let glow = blend(PURPLE, PINK, pulse(self.timers.now().as_millis(), 2000));
        let mut spans = button_spans("✨ 영상 생성하기", self.focus == GENERATE);
        let bracket = Style::default().fg(glow).add_modifier(Modifier::BOLD);
        if let Some(first) = spans.first_mut() {
            first.style = bracket;
        }
        if let Some(last) = spans.last_mut() {
            last.style = bracket;
        }
        Line::from(spans)
    }
}

impl Default for PromptInputScreen {
    fn default() -> Self { Self::new() }
}

impl ScreenWidget for PromptInputScreen {
    fn title(&self) -> &str { " 나의 WhatIf " }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let subtitle = "과거의 선택이 달랐다면 어떤 삶을 살고 있을까요?";
        f.render_widget(Clear, size);

        // === TOP BOX ===
        let top_inner_width = size.width.saturating_sub(2 + 2 + 2 * 3).max(1) as usize;
        let subtitle_lines = wrap(subtitle, top_inner_width).len() as u16;
        let top_needed = 2 + 2 + 1 + 1 + subtitle_lines;

        let heights = [5, 1, 1, 1, 1, Defaults::TEMPLATES.len() as u16, 1, 1];
        let middle_rows: u16 = heights.iter().sum();
        let regions = three_box_layout(size, top_needed, middle_rows + 4, 3, Margins { page: 1, inner: 3 });

        f.render_widget(Block::default().borders(Borders::ALL), regions.top);
        let mut title = vec![Span::raw("당신의 ")];
        title.extend(gradient_spans("WhatIf", self.timers.now().as_millis() as f32 / 4000.0));
        title.push(Span::raw("는?"));
        let mut header = vec![Line::from(title), Line::from("")];
        for seg in wrap(subtitle, top_inner_width) {
            header.push(Line::from(muted(seg.to_string())));
        }
        f.render_widget(Paragraph::new(header).alignment(Alignment::Center), regions.top_inner);

        // === MIDDLE BOX ===
        f.render_widget(Block::default().borders(Borders::ALL), regions.middle);
        let rows = stack(regions.middle_inner, &heights);

        let field = Paragraph::new(field_line(&self.prompt, self.focus == FIELD && !self.is_typing(), Defaults::PLACEHOLDER))
            .wrap(Wrap { trim: false })
            .block(card(self.focus == FIELD).title(self.title()));
        f.render_widget(field, rows[0]);

        f.render_widget(Paragraph::new(self.generate_line()).alignment(Alignment::Center), rows[2]);
        f.render_widget(Paragraph::new(Line::from(muted("또는 예시로 시작하기:"))), rows[4]);

        let chips: Vec<Line> = (0..Defaults::TEMPLATES.len()).map(|i| self.template_line(i)).collect();
        f.render_widget(Paragraph::new(chips), rows[5]);

        if self.is_typing() {
            let status = Line::from(Span::styled(
                "자동 입력 중...",
                Style::default().fg(PINK).add_modifier(Modifier::ITALIC),
            ));
            f.render_widget(Paragraph::new(status), rows[7]);
        }

        // === BOTTOM BOX (legend) ===
        f.render_widget(Block::default().borders(Borders::ALL), regions.bottom);
        f.render_widget(help_input(), regions.bottom.inner(&Margin { horizontal: 3, vertical: 1 }));
    }

    fn on_tick(&mut self, dt: Duration, _ctx: &mut AppCtx) -> Transition {
        let deadline = self.timers.deadline(dt);
        while let Some(ev) = self.timers.next_due(deadline) {
            match ev {
                InputTimer::AutoDemo => self.start_auto_demo(),
                InputTimer::Type => self.type_next(),
            }
        }
        Transition::Stay
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Transition {
        match k.code {
            // Navigation (Up/Down/Tab only)
            KeyCode::Down | KeyCode::Tab => self.focus = (self.focus + 1) % FOCUS_COUNT,
            KeyCode::Up | KeyCode::BackTab => self.focus = (self.focus + FOCUS_COUNT - 1) % FOCUS_COUNT,

            KeyCode::Enter if self.focus == FIELD || self.focus == GENERATE => return self.submit(),
            KeyCode::Enter => self.pick_template(self.focus - FIRST_TEMPLATE),

            _ => self.edit(k),
        }
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn ctx() -> AppCtx {
        AppCtx::new(Some(9), 0)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(s: &mut PromptInputScreen, text: &str) {
        let mut ctx = ctx();
        for c in text.chars() {
            s.on_key(key(KeyCode::Char(c)), &mut ctx);
        }
    }

    /// First `n` chars of the auto-demo script.
    fn script_prefix(n: usize) -> String {
        Defaults::TEMPLATES[0].text.chars().take(n).collect()
    }

    fn submitted(t: Transition) -> Option<String> {
        match t {
            Transition::Advance(FlowEvent::Submit(text)) => Some(text),
            _ => None,
        }
    }

    #[test]
    fn submit_trims_and_fires_once() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        type_str(&mut s, "  hello ");
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), Some("hello".into()));
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), None);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), None);
        type_str(&mut s, " \t ");
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), None);
        // still usable afterwards
        type_str(&mut s, "x");
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), Some("x".into()));
    }

    #[test]
    fn template_replaces_the_whole_buffer() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        type_str(&mut s, "something else");
        // focus the third template chip
        for _ in 0..(FIRST_TEMPLATE + 2) {
            s.on_key(key(KeyCode::Tab), &mut ctx);
        }
        s.on_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(s.text(), Defaults::TEMPLATES[2].text);
        assert_eq!(s.focus, FIELD);
    }

    #[test]
    fn generate_button_submits() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        type_str(&mut s, "go");
        s.on_key(key(KeyCode::Tab), &mut ctx);
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), Some("go".into()));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        s.on_key(key(KeyCode::Up), &mut ctx);
        assert_eq!(s.focus, FOCUS_COUNT - 1);
        s.on_key(key(KeyCode::Down), &mut ctx);
        assert_eq!(s.focus, FIELD);
    }

    #[test]
    fn auto_demo_types_first_template_then_stops() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        let script = Defaults::TEMPLATES[0].text;
        let n = script.chars().count();

        s.on_tick(Duration::from_millis(4999), &mut ctx);
        assert!(!s.is_typing());
        s.on_tick(Duration::from_millis(1), &mut ctx);
        assert!(s.is_typing());
        assert_eq!(s.text(), "");

        s.on_tick(Duration::from_millis(80), &mut ctx);
        assert_eq!(s.text(), script_prefix(1));

        // user edits are ignored while it types
        s.on_key(key(KeyCode::Char('z')), &mut ctx);
        s.on_key(key(KeyCode::Backspace), &mut ctx);
        assert_eq!(s.text(), script_prefix(1));

        for _ in 1..n {
            s.on_tick(Duration::from_millis(80), &mut ctx);
        }
        assert_eq!(s.text(), script);
        assert!(!s.is_typing());
        assert_eq!(s.timers.pending(), 0);

        // nothing more happens, and it did not submit
        assert!(matches!(s.on_tick(Duration::from_secs(60), &mut ctx), Transition::Stay));
        assert_eq!(s.text(), script);
    }

    #[test]
    fn auto_demo_overwrites_and_can_be_submitted_midway() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        type_str(&mut s, "mine");
        s.on_tick(Duration::from_millis(5000 + 80 * 2), &mut ctx);
        assert!(s.is_typing());
        assert_eq!(s.text(), script_prefix(2));
        assert_eq!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)), Some(script_prefix(2)));
    }

    #[test]
    fn partial_auto_demo_text_is_submitted_trimmed() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        // the third char of the script is a space
        s.on_tick(Duration::from_millis(5000 + 80 * 3), &mut ctx);
        let partial = script_prefix(3);
        assert!(partial.ends_with(' '));
        assert_eq!(s.text(), partial);
        assert_eq!(
            submitted(s.on_key(key(KeyCode::Enter), &mut ctx)),
            Some(partial.trim_end().to_string())
        );
    }

    #[test]
    fn templates_are_locked_while_typing() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        s.on_tick(Duration::from_millis(5080), &mut ctx);
        s.focus = FIRST_TEMPLATE + 3;
        s.on_key(key(KeyCode::Enter), &mut ctx);
        assert_ne!(s.text(), Defaults::TEMPLATES[3].text);
    }

    #[test]
    fn submitting_during_auto_demo_does_not_type_further() {
        let mut s = PromptInputScreen::new();
        let mut ctx = ctx();
        s.on_tick(Duration::from_millis(5160), &mut ctx);
        assert!(submitted(s.on_key(key(KeyCode::Enter), &mut ctx)).is_some());
        assert!(!s.is_typing());
        assert_eq!(s.timers.pending(), 0);
        s.on_tick(Duration::from_secs(5), &mut ctx);
        assert_eq!(s.text(), script_prefix(2));
    }
}
