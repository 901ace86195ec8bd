//! Event-recording visitor.
//!
//! [`EventLog`] materializes each callback into a [`WalkEvent`] so the walk
//! can be inspected, asserted on, or serialized after the fact. Key and
//! primitive tokens are cut out of the buffer suffix here — string tokens at
//! their closing quote, everything else at the next structural or whitespace
//! byte — which is exactly the materialization work the engine delegates to
//! its visitor.

use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use crate::visitor::{ScopeKind, ScopeStack, Visitor};

/// One semantic boundary of a walk, with key and primitive tokens captured
/// as raw text (string escapes are preserved, not decoded).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WalkEvent {
    StartDocument,
    EndDocument,
    StartObject,
    EndObject,
    EmptyObject,
    /// Key text without its surrounding quotes.
    Key(String),
    NextField,
    StartArray,
    EndArray,
    EmptyArray,
    NextArrayElement,
    /// Raw token text; string primitives keep their quotes.
    Primitive(String),
    RootPrimitive(String),
}

/// A visitor that records every callback as a [`WalkEvent`].
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<WalkEvent>,
    scopes: ScopeStack,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in callback order.
    #[must_use]
    pub fn events(&self) -> &[WalkEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<WalkEvent> {
        self.events
    }
}

impl<'src> Visitor<'src> for EventLog {
    type Error = Infallible;

    fn start_document(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::StartDocument);
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::EndDocument);
        Ok(())
    }

    fn root_primitive(&mut self, value: &'src [u8]) -> Result<(), Infallible> {
        self.events.push(WalkEvent::RootPrimitive(token_text(value)));
        Ok(())
    }

    fn start_object(&mut self) -> Result<(), Infallible> {
        self.scopes.push_object();
        self.events.push(WalkEvent::StartObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::EndObject);
        Ok(())
    }

    fn empty_object(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::EmptyObject);
        Ok(())
    }

    fn key(&mut self, key: &'src [u8]) -> Result<(), Infallible> {
        self.events.push(WalkEvent::Key(key_text(key)));
        Ok(())
    }

    fn next_field(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::NextField);
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), Infallible> {
        self.scopes.push_array();
        self.events.push(WalkEvent::StartArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::EndArray);
        Ok(())
    }

    fn empty_array(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::EmptyArray);
        Ok(())
    }

    fn next_array_element(&mut self) -> Result<(), Infallible> {
        self.events.push(WalkEvent::NextArrayElement);
        Ok(())
    }

    fn primitive(&mut self, value: &'src [u8]) -> Result<(), Infallible> {
        self.events.push(WalkEvent::Primitive(token_text(value)));
        Ok(())
    }

    fn end_container(&mut self) -> ScopeKind {
        self.scopes.pop()
    }
}

/// Length of the token at the head of `value`: a quoted string runs to its
/// unescaped closing quote, anything else to the next structural or
/// whitespace byte. An unterminated token runs to end of buffer.
fn token_len(value: &[u8]) -> usize {
    match value.first() {
        Some(b'"') => {
            let mut i = 1;
            while i < value.len() {
                match value[i] {
                    b'\\' => i += 2,
                    b'"' => return i + 1,
                    _ => i += 1,
                }
            }
            value.len()
        }
        _ => value
            .iter()
            .position(|&b| {
                matches!(
                    b,
                    b',' | b'}' | b']' | b'{' | b'[' | b':' | b'"' | b' ' | b'\t' | b'\n' | b'\r'
                )
            })
            .unwrap_or(value.len()),
    }
}

fn token_text(value: &[u8]) -> String {
    String::from_utf8_lossy(&value[..token_len(value)]).into_owned()
}

fn key_text(key: &[u8]) -> String {
    let token = &key[..token_len(key)];
    let token = token.strip_prefix(b"\"").unwrap_or(token);
    let token = token.strip_suffix(b"\"").unwrap_or(token);
    String::from_utf8_lossy(token).into_owned()
}
