//! Transient feedback shown in a page's message area.
//!
//! DESIGN
//! ======
//! A message body is either literal text or a formatted block (emphasized
//! heading plus line-broken entries). Formatting is structural rather than a
//! markup string, so backend-provided text is never interpreted as HTML.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::time::Duration;

/// Heading shown above field-level validation errors.
pub const VALIDATION_HEADING: &str = "Ops, preencha os campos abaixo corretamente:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    /// Rendered verbatim.
    Text(String),
    /// Rendered as a bold heading followed by one line per entry.
    Formatted { heading: String, lines: Vec<String> },
}

impl MessageBody {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Plain-text rendering, with formatted lines joined by newlines.
    pub fn plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Formatted { heading, lines } => {
                std::iter::once(heading.as_str()).chain(lines.iter().map(String::as_str)).collect::<Vec<_>>().join("\n")
            }
        }
    }
}

/// How long a message stays on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifetime {
    Persistent,
    Expires(Duration),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub severity: Severity,
    pub body: MessageBody,
}

/// Ordered list of visible messages. Appending never clears earlier ones.
#[derive(Clone, Debug, Default)]
pub struct MessageBoard {
    items: Vec<Message>,
    next_id: u64,
}

impl MessageBoard {
    /// Append a message and return its id.
    pub fn push(&mut self, severity: Severity, body: MessageBody) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Message { id, severity, body });
        id
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove one message. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Message] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
