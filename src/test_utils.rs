#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    use crate::config::ToastConfig;
    use crate::notification::ToastProvider;

    pub fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    pub fn test_provider() -> ToastProvider {
        ToastProvider::mount(&ToastConfig::default())
    }

    pub fn provider_with(config: ToastConfig) -> ToastProvider {
        ToastProvider::mount(&config)
    }

    /// Mounted provider plus the instant tests measure time from
    pub fn provider_at_start() -> (ToastProvider, Instant) {
        (test_provider(), Instant::now())
    }

    pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    /// Render the provider's stack over a frame filled with `.` characters
    pub fn render_to_string(provider: &mut ToastProvider, width: u16, height: u16) -> String {
        let mut terminal = create_test_terminal(width, height);
        terminal
            .draw(|f| {
                let filler = ".".repeat(usize::from(width));
                let lines = vec![filler; usize::from(height)].join("\n");
                f.render_widget(Paragraph::new(lines), f.area());
                provider.render(f);
            })
            .unwrap();
        terminal.backend().to_string()
    }
}
