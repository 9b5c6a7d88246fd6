use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use toaster::{Config, Severity, ToastHandle, ToastHit, ToastProvider, ToastRequest};

/// Upper bound on how long the event loop waits for input
const MAX_POLL: Duration = Duration::from_millis(250);

const KEY_HELP: &str = "s  success toast\n\
e  error toast\n\
w  warning toast\n\
i  info toast\n\
p  persistent toast\n\
z  toast with duration 0\n\
d  dismiss newest toast\n\
x  call the deprecated show_toast\n\
q  quit\n\
\n\
Click [x] on a toast to close it.";

/// Demo application state
pub struct App {
    provider: ToastProvider,
    toasts: ToastHandle,
    counter: u32,
    last_click: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new App, mounting the toast provider
    pub fn new(config: &Config, config_warning: Option<String>) -> Self {
        let provider = ToastProvider::mount(&config.toasts);
        let toasts = provider.handle();

        if let Some(warning) = config_warning {
            toasts.warning(&warning, Some("Config ignored"));
        }

        Self {
            provider,
            toasts,
            counter: 0,
            last_click: None,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('s') => {
                self.toasts.success("Saved successfully", None);
            }
            KeyCode::Char('e') => {
                self.toasts.error("Failed", Some("Upload error"));
            }
            KeyCode::Char('w') => {
                let message = format!("Disk usage at {}%", 80 + self.next_count() % 20);
                self.toasts.warning(&message, None);
            }
            KeyCode::Char('i') => {
                let message = format!("Background job #{} finished", self.next_count());
                self.toasts.info(&message, Some("Jobs"));
            }
            KeyCode::Char('p') => {
                self.toasts.add(
                    ToastRequest::new(Severity::Warning, "This toast stays until closed")
                        .title("Persistent")
                        .persistent(true),
                );
            }
            KeyCode::Char('z') => {
                self.toasts.add(
                    ToastRequest::new(Severity::Info, "Duration 0 never expires")
                        .duration_ms(0),
                );
            }
            KeyCode::Char('d') => {
                self.provider.dismiss_newest(now);
            }
            KeyCode::Char('x') => {
                #[allow(deprecated)]
                toaster::notification::show_toast("legacy call", Severity::Info);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        // Clicks the stack does not claim fall through to the page
        match self.provider.click(mouse.column, mouse.row, now) {
            Some(ToastHit::Close(_)) | Some(ToastHit::Body(_)) => {}
            None => self.last_click = Some(format!("{},{}", mouse.column, mouse.row)),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.provider.tick(now);
    }

    /// How long to wait for input before the next timer is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.provider
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        self.render_page(frame, layout[0]);
        self.render_status_line(frame, layout[1]);

        // Toasts go last so they sit above everything else
        self.provider.render(frame);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Toaster ")
            .border_style(Style::default().fg(Color::Cyan));

        let content = Paragraph::new(KEY_HELP)
            .block(block)
            .style(Style::default().fg(Color::White));

        frame.render_widget(content, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut status = format!(" {} active toast(s)", self.provider.len());
        if let Some(click) = &self.last_click {
            status.push_str(&format!(" | page clicked at {}", click));
        }

        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn next_count(&mut self) -> u32 {
        self.counter = self.counter.wrapping_add(1);
        self.counter
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
