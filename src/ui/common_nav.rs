use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl+Q / Ctrl+C open the quit confirmation from any screen.
pub fn is_quit_chord(k: KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q' | 'c' | 'C'))
}

/// Plain character input (no Ctrl/Alt chords).
pub fn typed_char(k: KeyEvent) -> Option<char> {
    match k.code {
        KeyCode::Char(c) if !k.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
        _ => None,
    }
}
