use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

fn bar(line: Line<'static>) -> Paragraph<'static> {
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_intro() -> Paragraph<'static> {
    bar(Line::from(vec![
        span_key("Enter/Space"), span_text(" 건너뛰기"), span_sep(),
        span_key("Ctrl+Q"), span_text(" 종료"),
    ]))
}

pub fn help_input() -> Paragraph<'static> {
    bar(Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" 이동"), span_sep(),
        span_key("Enter"), span_text(" 생성 / 예시 선택"), span_sep(),
        span_key("←/→/Home/End"), span_text(" 커서"), span_sep(),
        span_key("Backspace/Delete"), span_text(" 편집"), span_sep(),
        span_key("Ctrl+Q"), span_text(" 종료"),
    ]))
}

pub fn help_progress() -> Paragraph<'static> {
    bar(Line::from(vec![span_key("Ctrl+Q"), span_text(" 종료")]))
}

pub fn help_result() -> Paragraph<'static> {
    bar(Line::from(vec![
        span_key("←/→/Tab"), span_text(" 이동"), span_sep(),
        span_key("Enter"), span_text(" 선택"), span_sep(),
        span_key("Esc"), span_text(" 처음으로"), span_sep(),
        span_key("Ctrl+Q"), span_text(" 종료"),
    ]))
}
