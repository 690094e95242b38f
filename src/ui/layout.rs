use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Header / body / footer split used by the form-style screens.
pub struct ThreeBox {
    pub top: Rect,
    pub middle: Rect,
    pub bottom: Rect,
    pub top_inner: Rect,
    pub middle_inner: Rect,
}

pub struct Margins {
    pub page: u16,  // outer page margin
    pub inner: u16, // horizontal padding inside each box
}

/// The top box gets what it needs (at least 3 rows) unless the middle box
/// would be squeezed below its own need; the middle box takes the rest.
pub fn three_box_layout(
    size: Rect,
    top_needed: u16,
    middle_needed: u16,
    footer_height: u16,
    margins: Margins,
) -> ThreeBox {
    let available = size
        .height
        .saturating_sub(2 * margins.page)
        .saturating_sub(footer_height);

    let top_cap = available.saturating_sub(middle_needed);
    let top_height = top_needed.min(top_cap.max(3));
    let middle_height = available.saturating_sub(top_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(margins.page)
        .constraints([
            Constraint::Length(top_height),
            Constraint::Length(middle_height),
            Constraint::Length(footer_height),
        ])
        .split(size);

    let pad = Margin { horizontal: margins.inner, vertical: 1 };
    ThreeBox {
        top: chunks[0],
        middle: chunks[1],
        bottom: chunks[2],
        top_inner: chunks[0].inner(&pad),
        middle_inner: chunks[1].inner(&pad),
    }
}

pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

/// Horizontally centred column of at most `max_width`, full height.
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let w = max_width.min(r.width);
    Rect { x: r.x + (r.width - w) / 2, y: r.y, width: w, height: r.height }
}

/// Stacks rows of fixed heights from the top of `r`, clipping at its bottom.
pub fn stack(r: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = r.y;
    let bottom = r.y + r.height;
    heights
        .iter()
        .map(|&h| {
            let top = y.min(bottom);
            let height = h.min(bottom - top);
            y = y.saturating_add(h);
            Rect { x: r.x, y: top, width: r.width, height }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 80, 24);
        let r = centered_rect_abs(40, 10, outer);
        assert_eq!(r, Rect::new(20, 7, 40, 10));

        let tiny = centered_rect_abs(200, 200, Rect::new(0, 0, 10, 5));
        assert_eq!(tiny.width, 8);
        assert_eq!(tiny.height, 3);
    }

    #[test]
    fn stack_clips_at_bottom() {
        let rows = stack(Rect::new(0, 0, 10, 5), &[2, 2, 2]);
        assert_eq!(rows[0], Rect::new(0, 0, 10, 2));
        assert_eq!(rows[1], Rect::new(0, 2, 10, 2));
        assert_eq!(rows[2], Rect::new(0, 4, 10, 1));
    }

    #[test]
    fn three_box_gives_middle_the_rest() {
        let b = three_box_layout(Rect::new(0, 0, 80, 30), 6, 10, 3, Margins { page: 1, inner: 2 });
        assert_eq!(b.top.height, 6);
        assert_eq!(b.middle.height, 30 - 2 - 3 - 6);
        assert_eq!(b.bottom.height, 3);
    }
}
