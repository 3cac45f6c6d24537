//! Modal acknowledgment popup

use ratatui::{prelude::*, widgets::*};

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 7;

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw a modal with `message` over whatever is in `area`
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(" Reservation ").centered());

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 7);
        assert_eq!(rect, Rect::new(20, 16, 60, 7));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 4);
        let rect = centered_rect(area, 60, 7);
        assert_eq!(rect, Rect::new(5, 5, 30, 4));
    }
}
