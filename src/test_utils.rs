#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::rc::Rc;
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::SearchConfig;
    use crate::input::InputState;
    use crate::suggest::{
        SuggestRequest, SuggestResponse, SuggestState, Suggestion, SuggestionKind, parse_base_url,
    };

    pub const TEST_BASE_URL: &str = "http://vault.test";

    /// App with a detached controller: nothing leaves the process
    pub fn test_app() -> App {
        let base_url = parse_base_url(TEST_BASE_URL).expect("valid test URL");
        App::from_parts(
            InputState::new(),
            SuggestState::new(&SearchConfig::default()),
            base_url,
        )
    }

    /// App whose controller talks to test channels instead of a worker
    pub fn wired_app() -> (
        App,
        UnboundedReceiver<SuggestRequest>,
        mpsc::Sender<SuggestResponse>,
    ) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.suggest.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// App showing `suggestions`, rendered once so layout regions are known
    pub fn app_with_panel(suggestions: Vec<Suggestion>) -> App {
        let mut app = test_app();
        app.suggest.show_suggestions(suggestions);
        render_app(&mut app, 80, 20);
        app
    }

    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = ratatui::Terminal::new(backend).expect("test terminal");
        terminal.draw(|f| app.render(f)).expect("draw");
        terminal.backend().to_string()
    }

    pub fn type_text(app: &mut App, text: &str, now: Instant) {
        for ch in text.chars() {
            app.handle_event(key(KeyCode::Char(ch)), now);
        }
    }

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    pub fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    pub fn sample_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new("Physics 101", "/folder/5", SuggestionKind::Folder),
            Suggestion::new("physics-lab-report.pdf", "/file/12", SuggestionKind::File),
        ]
    }

    /// Serve one canned HTTP response per accepted connection, in order
    ///
    /// Returns the base URL to point a client at and a channel carrying the
    /// request line (`GET /path?query HTTP/1.1`) of every request served.
    pub fn spawn_http_responder(responses: Vec<(u16, String)>) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let (seen_tx, seen_rx) = mpsc::channel();

        std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&request);
                let request_line = request.lines().next().unwrap_or_default().to_string();
                let _ = seen_tx.send(request_line);

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        (format!("http://{}", addr), seen_rx)
    }

    /// Terminal output that can be inspected after the writer is dropped
    #[derive(Clone, Default)]
    pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl SharedOutput {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Base URL of a port with nothing listening on it
    pub fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        drop(listener);
        format!("http://{}", addr)
    }

    /// Run a future to completion on a throwaway current-thread runtime
    pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime")
            .block_on(future)
    }

    /// Tick the app until `done` holds or the timeout expires
    pub fn tick_until(app: &mut App, timeout_ms: u64, done: impl Fn(&App) -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < Duration::from_millis(timeout_ms) {
            app.tick(Instant::now());
            if done(app) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }
}
