use serde::{Deserialize, Serialize};

/// The application router, as seen by the tab registry.
pub trait Navigator {
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
    fn back(&mut self);
    fn forward(&mut self);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn push(&mut self, path: &str) {
        (**self).push(path)
    }

    fn replace(&mut self, path: &str) {
        (**self).replace(path)
    }

    fn back(&mut self) {
        (**self).back()
    }

    fn forward(&mut self) {
        (**self).forward()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "path", rename_all = "snake_case")]
pub enum NavigationEvent {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

/// In-memory router with browser-like history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<String>,
    /// Index of the current entry in `history`.
    cursor: usize,
    events: Vec<NavigationEvent>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `path` as the current entry.
    pub fn starting_at(path: &str) -> Self {
        Self {
            history: vec![path.to_string()],
            cursor: 0,
            events: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.history.get(self.cursor).map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    /// Paths passed to `push`, oldest first.
    pub fn pushed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                NavigationEvent::Push(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, path: &str) {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(path.to_string());
        self.cursor = self.history.len() - 1;
        self.events.push(NavigationEvent::Push(path.to_string()));
    }

    fn replace(&mut self, path: &str) {
        match self.history.get_mut(self.cursor) {
            Some(current) => *current = path.to_string(),
            None => self.history.push(path.to_string()),
        }
        self.events.push(NavigationEvent::Replace(path.to_string()));
    }

    fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.events.push(NavigationEvent::Back);
    }

    fn forward(&mut self) {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
        }
        self.events.push(NavigationEvent::Forward);
    }
}
