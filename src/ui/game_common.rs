//! Shared UI components for the play screen and menus.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (play field) - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create the standard play-screen layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a status bar: status message on line 1, key hints on line 2.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[P]", "Pause")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a compact banner at the bottom of an area.
///
/// Does not clear the whole area, so the board stays visible behind it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    message: &str,
    hint: &str,
) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render an info panel frame with the " Info " title. Returns the inner Rect.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(10, 5, 80, 24);
        let r = centered_rect(area, 40, 10);
        assert_eq!(r, Rect::new(30, 12, 40, 10));

        let clamped = centered_rect(area, 200, 200);
        assert_eq!(clamped, area);
    }
}
