//! Shared harness for driving the whole application headlessly

use crossterm::event::{Event, KeyCode};
use std::sync::Once;
use tickline::cmd_args::CommandLineArgs;
use tickline::todo::io::{MockEventStream, MockRenderStream};
use tickline::{logging, AppController, TodoModel};

pub const SEED: &str = r#"[
    { "name": "Learn the model/controller/view split", "done": true },
    { "name": "Build a todo list", "done": false }
]"#;

static TRACING: Once = Once::new();

/// Scripted keyboard session against a mock terminal
pub struct TodoWorld {
    pub events: MockEventStream,
    pub screen: MockRenderStream,
    seed: String,
}

impl TodoWorld {
    pub fn new() -> Self {
        Self::with_seed(SEED)
    }

    pub fn with_seed(seed: &str) -> Self {
        TRACING.call_once(|| {
            #[allow(clippy::disallowed_methods)]
            let level = std::env::var("TICKLINE_LOG_LEVEL").unwrap_or_else(|_| "error".into());
            logging::init(&level);
        });

        Self {
            events: MockEventStream::empty(),
            screen: MockRenderStream::with_size((80, 24)),
            seed: seed.to_string(),
        }
    }

    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.events.push_key(code);
        self
    }

    /// Press a key several times
    pub fn press_n(&mut self, code: KeyCode, times: usize) -> &mut Self {
        for _ in 0..times {
            self.events.push_key(code);
        }
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.events.push_text(text);
        self
    }

    pub fn ctrl(&mut self, c: char) -> &mut Self {
        self.events.push_ctrl(c);
        self
    }

    pub fn resize(&mut self, width: u16, height: u16) -> &mut Self {
        self.events.push_event(Event::Resize(width, height));
        self
    }

    /// Run the queued session to completion and hand back the application
    pub fn run(&mut self) -> AppController<MockEventStream, MockRenderStream> {
        let args = CommandLineArgs::parse_from(["tickline", "--seed", self.seed.as_str()]);
        let events = std::mem::take(&mut self.events);
        let mut app = AppController::with_io_streams(args, events, self.screen.clone())
            .expect("application should start");
        app.run().expect("session should finish cleanly");
        app
    }
}

/// Seed JSON with `count` open items named "task 00", "task 01", ...
pub fn numbered_seed(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|n| format!(r#"{{ "name": "task {:02}", "done": false }}"#, n))
        .collect();
    format!("[{}]", items.join(","))
}

pub fn names(model: &TodoModel) -> Vec<String> {
    model.items().iter().map(|item| item.name().to_string()).collect()
}
