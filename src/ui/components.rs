use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::style::{FAINT, PURPLE};

/// Single-buffer text input. `cursor` counts chars, not bytes.
#[derive(Clone, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    /// Replaces the whole buffer and parks the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.into();
        self.end();
    }
    pub fn len(&self) -> usize { self.text.chars().count() }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }
    pub fn move_left(&mut self) { if self.cursor > 0 { self.cursor -= 1; } }
    pub fn move_right(&mut self) { if self.cursor < self.len() { self.cursor += 1; } }
    pub fn home(&mut self) { self.cursor = 0; }
    pub fn end(&mut self) { self.cursor = self.len(); }

    fn byte_at(&self, idx: usize) -> usize {
        self.text.char_indices().nth(idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }
}

/// Rounded card with a purple border when highlighted.
pub fn card<'a>(highlight: bool) -> Block<'a> {
    let color = if highlight { PURPLE } else { FAINT };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

// Bash-style block cursor that covers the char (no shifting).
// An empty field shows the placeholder, after the cursor when focused.
pub fn field_line<'a>(field: &TextField, focused: bool, placeholder: &str) -> Line<'a> {
    let text = field.text.as_str();
    let block = |s: &str| {
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    if text.is_empty() {
        let hint = Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        );
        return if focused { Line::from(vec![block(" "), hint]) } else { Line::from(hint) };
    }
    if !focused {
        return Line::from(Span::raw(text.to_string()));
    }

    let split = field.byte_at(field.cursor.min(field.len()));
    let (left, rest) = text.split_at(split);

    if let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        Line::from(vec![
            Span::raw(left.to_string()),
            block(&ch.to_string()),
            Span::raw(after.to_string()),
        ])
    } else {
        Line::from(vec![Span::raw(left.to_string()), block(" ")])
    }
}
