//! Page shell: header, navigation, and the booking card frame

use ratatui::{prelude::*, widgets::*};

pub const HERO_TITLE: &str = "Book Your Table";

/// Navigation entries; the reservation page is the one being shown
pub const NAV_ITEMS: [&str; 4] = ["Menu", "About", "Reservations", "Contact"];
const ACTIVE_NAV: &str = "Reservations";

const HEADER_HEIGHT: u16 = 3;
const INTRO_HEIGHT: u16 = 3;

/// Static page composition around the booking form
///
/// The shell only lays out the page and hands back the rectangle the form
/// should draw into; it never touches form state.
pub struct PageShell<'a> {
    restaurant_name: &'a str,
}

impl<'a> PageShell<'a> {
    pub fn new(restaurant_name: &'a str) -> Self {
        Self { restaurant_name }
    }

    pub fn intro(&self) -> String {
        format!(
            "Reserve your spot at {} for an unforgettable dining experience. \
             Please note that reservations are required for parties of 6 or more.",
            self.restaurant_name
        )
    }

    /// Draw the shell and return the area left for the form
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let [header_area, card_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

        self.render_header(frame, header_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(
                Line::from(Span::styled(
                    format!(" {HERO_TITLE} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
        let card_inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let [intro_area, form_area] =
            Layout::vertical([Constraint::Length(INTRO_HEIGHT), Constraint::Min(0)])
                .areas(card_inner.inner(Margin::new(1, 0)));

        let intro = Paragraph::new(self.intro())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(intro, intro_area);

        form_area
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled(" 🍋 ", Style::default().fg(Color::Yellow)),
            Span::styled(
                self.restaurant_name,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(brand, inner);

        let mut nav = Vec::with_capacity(NAV_ITEMS.len() * 2);
        for item in NAV_ITEMS {
            let style = if item == ACTIVE_NAV {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            nav.push(Span::styled(item, style));
            nav.push(Span::raw("   "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(nav)).alignment(Alignment::Right),
            inner,
        );
    }
}
