// Console trace shared by every demo.
// A trace either prints each line to stdout or records it for assertions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use colored::Colorize;

use crate::config::DemoConfig;

#[derive(Debug)]
enum Sink {
    Stdout { color: bool },
    Recording(Vec<String>),
}

/// Cheaply clonable handle to one ordered stream of trace lines.
///
/// Clones share the same sink, so a receiver and the history driving it
/// interleave their lines in the order they happen.
#[derive(Clone)]
pub struct Trace {
    sink: Rc<RefCell<Sink>>,
    separator_width: usize,
}

impl Trace {
    pub fn stdout(config: &DemoConfig) -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Stdout {
                color: config.color,
            })),
            separator_width: config.separator_width,
        }
    }

    pub fn recording() -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Recording(Vec::new()))),
            separator_width: DemoConfig::default().separator_width,
        }
    }

    pub fn line(&self, line: impl Into<String>) {
        let line = line.into();
        match &mut *self.sink.borrow_mut() {
            Sink::Stdout { .. } => println!("{}", line),
            Sink::Recording(lines) => lines.push(line),
        }
    }

    /// Section banner such as `--- Command Pattern Example ---`.
    pub fn banner(&self, title: &str) {
        let text = format!("--- {} ---", title);
        match &mut *self.sink.borrow_mut() {
            Sink::Stdout { color: true } => println!("{}", text.bold().cyan()),
            Sink::Stdout { color: false } => println!("{}", text),
            Sink::Recording(lines) => lines.push(text),
        }
    }

    /// Blank line, a dashed rule, blank line.
    pub fn separator(&self) {
        self.line("");
        self.line("-".repeat(self.separator_width));
        self.line("");
    }

    /// Lines recorded so far. Always empty for a stdout trace.
    pub fn lines(&self) -> Vec<String> {
        match &*self.sink.borrow() {
            Sink::Stdout { .. } => Vec::new(),
            Sink::Recording(lines) => lines.clone(),
        }
    }

    /// Recorded lines with separators and blank lines filtered out.
    pub fn events(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| !line.is_empty() && !line.chars().all(|c| c == '-'))
            .collect()
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("sink", &self.sink.borrow())
            .field("separator_width", &self.separator_width)
            .finish()
    }
}
