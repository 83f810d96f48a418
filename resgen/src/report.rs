//! Console status lines: section headers and one line per file outcome

use crossterm::style::Stylize;
use parking_lot::Mutex;
use supports_color::Stream;

/// Receives status lines from the probe and generation stages.
///
/// Icon and splash outputs of one platform are produced on the rayon pool,
/// so implementations must be callable from several threads at once.
pub trait Reporter: Sync {
    fn header(&self, text: &str);
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

/// Writes status lines to stdout, coloured when the terminal supports it
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            color: supports_color::on(Stream::Stdout).is_some(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn header(&self, text: &str) {
        if self.color {
            println!("\n {}\n", text.cyan().underlined());
        } else {
            println!("\n {text}\n");
        }
    }

    fn success(&self, text: &str) {
        if self.color {
            println!("  {}  {text}", "✓".green());
        } else {
            println!("  ✓  {text}");
        }
    }

    fn error(&self, text: &str) {
        if self.color {
            println!("  {}  {text}", "✗".red());
        } else {
            println!("  ✗  {text}");
        }
    }
}

/// One captured status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(String),
    Success(String),
    Error(String),
}

/// Keeps every status line in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct Recorder {
    lines: Mutex<Vec<Line>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| match line {
                Line::Success(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| match line {
                Line::Error(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for Recorder {
    fn header(&self, text: &str) {
        self.lines.lock().push(Line::Header(text.to_string()));
    }

    fn success(&self, text: &str) {
        self.lines.lock().push(Line::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.lines.lock().push(Line::Error(text.to_string()));
    }
}

#[test]
fn recorder_keeps_order_and_kind() {
    let recorder = Recorder::new();
    recorder.header("Generating Icons for ios");
    recorder.success("icon-40.png created");
    recorder.error("icon-50.png: Failed to decode");

    assert_eq!(recorder.lines().len(), 3);
    assert_eq!(recorder.successes(), vec!["icon-40.png created".to_string()]);
    assert_eq!(recorder.errors(), vec!["icon-50.png: Failed to decode".to_string()]);
}
