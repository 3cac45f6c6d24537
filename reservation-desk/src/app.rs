//! Terminal application: event loop, key dispatch, and screen composition

use crate::core::Config;
use crate::form::{Acknowledgment, FormController, SubmitOutcome};
use crate::ui::{FormAction, FormView, PageShell, render_alert};
use chrono::{Local, NaiveDate};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use shared::{AppError, AppResult};
use std::io::{self, Stdout, Write};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

pub struct App {
    config: Config,
    controller: FormController,
    view: FormView,
    /// Open acknowledgment modal, if any
    alert: Option<Acknowledgment>,
    /// Logger Widget State
    logger_state: TuiWidgetState,
    should_quit: bool,
}

impl App {
    /// Mount a fresh booking form
    pub fn new(config: Config, today: NaiveDate) -> Self {
        let controller = FormController::new();
        let view = FormView::new(&controller, today);
        Self {
            config,
            controller,
            view,
            alert: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn alert(&self) -> Option<&Acknowledgment> {
        self.alert.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The modal swallows everything until it is dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::PageUp if self.config.show_log_pane => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey)
            }
            KeyCode::PageDown if self.config.show_log_pane => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey)
            }
            _ => {
                if let FormAction::Submitted(SubmitOutcome::Accepted(ack)) =
                    self.view.handle_key(key, &mut self.controller)
                {
                    self.alert = Some(ack);
                }
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let page_area = if self.config.show_log_pane {
            let [page, logs] =
                Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .areas(area);
            self.draw_logs(frame, logs);
            page
        } else {
            area
        };

        let form_area = PageShell::new(&self.config.restaurant_name).render(frame, page_area);
        self.view.render(frame, form_area, &self.controller);

        if let Some(ack) = &self.alert {
            render_alert(frame, area, ack.message);
        }
    }

    fn draw_logs(&self, frame: &mut Frame, area: Rect) {
        let widget = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .title(" Booking Log ")
                    .border_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::DIM),
                    )
                    .borders(Borders::ALL),
            )
            .output_separator('|')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(true)
            .output_file(false)
            .output_line(false)
            .style(Style::default().fg(Color::White))
            .state(&self.logger_state);
        frame.render_widget(widget, area);
    }
}

/// Raw mode + alternate screen, undone on drop
///
/// Dropping restores the terminal on every exit path, including `?` returns
/// and unwinding panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> AppResult<Self> {
        enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
        // from here on, drop undoes raw mode even if the next step fails
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(terminal_error("enter alternate screen"))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Leave raw mode and the alternate screen, show the cursor
///
/// Best effort: a failing step does not stop the next one.
fn restore_terminal(out: &mut impl Write) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Restore the terminal before the panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut io::stdout());
        default_hook(info);
    }));
}

fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> AppError {
    move |e| AppError::terminal(format!("Failed to {action}: {e}")).with_detail("action", action)
}

/// Take over the terminal and run the booking form until the user quits
pub fn run(config: Config) -> anyhow::Result<()> {
    let mut app = App::new(config, Local::now().date_naive());

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(terminal_error("create terminal"))?;

    tracing::info!("Tab/Shift-Tab to move, Enter to reserve, Esc to quit");
    run_loop(&mut terminal, &mut app).map_err(terminal_error("run event loop"))?;

    tracing::info!("Reservation desk closed");
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let tick_rate = app.config.tick_rate();
    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ReservationField;

    fn app() -> App {
        App::new(
            Config::with_overrides("Little Lemon", false),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_even_with_alert() {
        let mut app = app();
        type_text(&mut app, "2026-10-20");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.alert().is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.controller().draft().date, "");
    }

    #[test]
    fn test_success_opens_alert_and_enter_closes_it() {
        let mut app = app();
        type_text(&mut app, "2026-10-20");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let ack = app.alert().expect("alert should be open");
        assert_eq!(ack.draft.time, "12:00");

        // keys do not reach the form while the modal is open
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.controller().draft().date, "2026-10-20");

        press(&mut app, KeyCode::Enter);
        assert!(app.alert().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
    }

    #[test]
    fn test_terminal_error_mapping() {
        let io_err = io::Error::new(io::ErrorKind::Unsupported, "not a tty");
        let err = terminal_error("enable raw mode")(io_err);

        assert_eq!(err.code, shared::ErrorCode::TerminalError);
        assert_eq!(err.to_string(), "Failed to enable raw mode: not a tty");
        assert_eq!(err.details.unwrap()["action"], "enable raw mode");
    }

    #[test]
    fn test_rejected_submit_keeps_alert_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.alert().is_none());
        assert!(app.controller().error_for(ReservationField::Date).is_some());
    }
}
