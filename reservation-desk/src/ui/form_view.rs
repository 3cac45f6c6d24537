//! Booking form view
//!
//! Renders each draft field as a bordered input with its inline error (or a
//! hint) on the line below, followed by the "Reserve Table" button. Hints
//! such as the earliest date or the `1-10` party size are advisory only;
//! only the validation schema decides what is accepted. The date input takes
//! nothing but digits and `-`, up to `YYYY-MM-DD`.

use crate::form::{FormController, SubmitOutcome};
use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use shared::models::{MAX_GUESTS, MAX_SPECIAL_REQUESTS_LEN, MIN_GUESTS, TIME_SLOTS, time_slot_index};
use shared::validation::input_len;
use shared::{Occasion, ReservationField};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

pub const SUBMIT_LABEL: &str = "Reserve Table";
pub const TIME_PLACEHOLDER: &str = "Select a time";
pub const OCCASION_PLACEHOLDER: &str = "Select an occasion";
pub const REQUESTS_PLACEHOLDER: &str = "Any dietary restrictions or special requirements?";

/// Rows per field: bordered input (3) + error/hint line (1)
const FIELD_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
/// `YYYY-MM-DD`
const DATE_INPUT_LEN: usize = 10;

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(ReservationField),
    Submit,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Field(ReservationField::Date),
    Focus::Field(ReservationField::Time),
    Focus::Field(ReservationField::Guests),
    Focus::Field(ReservationField::Occasion),
    Focus::Field(ReservationField::SpecialRequests),
    Focus::Submit,
];

/// Result of feeding one key to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submitted(SubmitOutcome),
}

/// A `<select>`: index 0 is the empty placeholder option
#[derive(Debug, Clone, Copy, Default)]
struct Select {
    selected: usize,
    len: usize,
}

impl Select {
    fn new(options: usize, selected: usize) -> Self {
        Self {
            selected,
            len: options + 1,
        }
    }

    fn next(&mut self) {
        self.selected = (self.selected + 1) % self.len;
    }

    fn prev(&mut self) {
        self.selected = (self.selected + self.len - 1) % self.len;
    }

    /// Index into the option list, `None` for the placeholder
    fn option(&self) -> Option<usize> {
        self.selected.checked_sub(1)
    }
}

/// View state of the booking form
///
/// Holds only presentation state (focus, text cursors, select positions).
/// Field values live in the [`FormController`].
pub struct FormView {
    focus: usize,
    date: Input,
    guests: Input,
    special_requests: Input,
    time: Select,
    occasion: Select,
    today: NaiveDate,
}

impl FormView {
    /// Bind a view to the controller's current draft
    pub fn new(controller: &FormController, today: NaiveDate) -> Self {
        let draft = controller.draft();
        let time_selected = time_slot_index(&draft.time).map(|i| i + 1).unwrap_or(0);
        let occasion_selected = draft
            .occasion_kind()
            .and_then(|o| Occasion::ALL.iter().position(|x| *x == o))
            .map(|i| i + 1)
            .unwrap_or(0);

        Self {
            focus: 0,
            date: Input::new(draft.date.clone()),
            guests: Input::new(draft.guests.to_string()),
            special_requests: Input::new(draft.special_requests.clone()),
            time: Select::new(TIME_SLOTS.len(), time_selected),
            occasion: Select::new(Occasion::ALL.len(), occasion_selected),
            today,
        }
    }

    pub fn focus(&self) -> Focus {
        FOCUS_ORDER[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if let Some(i) = FOCUS_ORDER.iter().position(|f| *f == focus) {
            self.focus = i;
        }
    }

    /// Text currently shown in a field's input
    pub fn display_value(&self, field: ReservationField) -> String {
        match field {
            ReservationField::Date => self.date.value().to_string(),
            ReservationField::Guests => self.guests.value().to_string(),
            ReservationField::SpecialRequests => self.special_requests.value().to_string(),
            ReservationField::Time => self
                .time
                .option()
                .map(|i| TIME_SLOTS[i].to_string())
                .unwrap_or_default(),
            ReservationField::Occasion => self
                .occasion
                .option()
                .map(|i| Occasion::ALL[i].as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Route one key press
    ///
    /// Tab/Down and Shift-Tab/Up move focus, Enter submits from anywhere,
    /// Left/Right/Space cycle select options, everything else edits the
    /// focused text input.
    pub fn handle_key(&mut self, key: KeyEvent, controller: &mut FormController) -> FormAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return FormAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return FormAction::None;
            }
            KeyCode::Enter => return FormAction::Submitted(controller.on_submit()),
            _ => {}
        }

        let Focus::Field(field) = self.focus() else {
            return FormAction::None;
        };

        match field {
            ReservationField::Time | ReservationField::Occasion => {
                let select = if field == ReservationField::Time {
                    &mut self.time
                } else {
                    &mut self.occasion
                };
                match key.code {
                    KeyCode::Right | KeyCode::Char(' ') => select.next(),
                    KeyCode::Left => select.prev(),
                    _ => return FormAction::None,
                }
                let value = self.display_value(field);
                controller.on_field_change(field, &value);
            }
            ReservationField::Date
            | ReservationField::Guests
            | ReservationField::SpecialRequests => {
                if field == ReservationField::Date
                    && let KeyCode::Char(c) = key.code
                    && !accepts_date_char(self.date.value(), c)
                {
                    return FormAction::None;
                }

                let input = match field {
                    ReservationField::Date => &mut self.date,
                    ReservationField::Guests => &mut self.guests,
                    _ => &mut self.special_requests,
                };
                if let Some(changed) = input.handle_event(&Event::Key(key))
                    && changed.value
                {
                    let value = input.value().to_string();
                    controller.on_field_change(field, &value);
                }
            }
        }

        FormAction::None
    }

    /// Rows needed to show the whole form
    pub fn height() -> u16 {
        FIELD_HEIGHT * ReservationField::ALL.len() as u16 + BUTTON_HEIGHT
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, controller: &FormController) {
        let mut constraints: Vec<Constraint> = ReservationField::ALL
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in ReservationField::ALL.iter().enumerate() {
            self.render_field(frame, rows[i], *field, controller);
        }
        self.render_submit(frame, rows[ReservationField::ALL.len()]);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: ReservationField,
        controller: &FormController,
    ) {
        let [input_area, message_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT - 1),
            Constraint::Length(1),
        ])
        .areas(area);

        let focused = self.focus() == Focus::Field(field);
        let error = controller.error_for(field);

        let mut title = vec![Span::raw(format!(" {} ", field.label()))];
        if field.is_required() {
            title.push(Span::styled("* ", Style::default().fg(Color::Red)));
        }

        let border_style = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title));

        let inner_width = input_area.width.saturating_sub(2);

        match field {
            ReservationField::Time | ReservationField::Occasion => {
                let value = controller.draft().value_of(field);
                let (label, style) = if value.is_empty() {
                    let placeholder = if field == ReservationField::Time {
                        TIME_PLACEHOLDER
                    } else {
                        OCCASION_PLACEHOLDER
                    };
                    (placeholder.to_string(), Style::default().fg(Color::DarkGray))
                } else if field == ReservationField::Occasion
                    && let Some(occasion) = controller.draft().occasion_kind()
                {
                    (occasion.label().to_string(), Style::default())
                } else {
                    (value, Style::default())
                };
                let line = Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(label, style),
                    Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                ]);
                frame.render_widget(Paragraph::new(line).block(block), input_area);
            }
            _ => {
                let input = match field {
                    ReservationField::Date => &self.date,
                    ReservationField::Guests => &self.guests,
                    _ => &self.special_requests,
                };
                let scroll = input.visual_scroll(inner_width as usize);
                let paragraph = if input.value().is_empty()
                    && field == ReservationField::SpecialRequests
                {
                    Paragraph::new(REQUESTS_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
                } else {
                    Paragraph::new(input.value()).scroll((0, scroll as u16))
                };
                frame.render_widget(paragraph.block(block), input_area);

                if focused {
                    frame.set_cursor_position((
                        input_area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                        input_area.y + 1,
                    ));
                }
            }
        }

        let message = match error {
            Some(msg) => Paragraph::new(msg.to_string()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new(self.hint(field, controller)),
        };
        frame.render_widget(message, message_area);
    }

    /// Advisory line shown under a field that has no error
    fn hint(&self, field: ReservationField, controller: &FormController) -> Span<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let value = controller.draft().value_of(field);
        match field {
            ReservationField::Date => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) if date < self.today => Span::styled(
                    format!("Earlier than today ({})", self.today.format("%Y-%m-%d")),
                    Style::default().fg(Color::Yellow),
                ),
                Ok(date) => Span::styled(date.format("%A, %B %-d").to_string(), dim),
                Err(_) => Span::styled(
                    format!("YYYY-MM-DD, from {}", self.today.format("%Y-%m-%d")),
                    dim,
                ),
            },
            ReservationField::Time | ReservationField::Occasion => {
                Span::styled("←/→ to choose", dim)
            }
            ReservationField::Guests => {
                Span::styled(format!("{MIN_GUESTS}-{MAX_GUESTS} guests"), dim)
            }
            ReservationField::SpecialRequests => Span::styled(
                format!("{}/{}", input_len(&value), MAX_SPECIAL_REQUESTS_LEN),
                dim,
            ),
        }
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let style = if self.focus() == Focus::Submit {
            Style::default()
                .fg(Color::White)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(SUBMIT_LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(button, area);
    }
}

/// Whether typing `c` into a date input holding `current` is allowed
fn accepts_date_char(current: &str, c: char) -> bool {
    (c.is_ascii_digit() || c == '-') && current.chars().count() < DATE_INPUT_LEN
}
