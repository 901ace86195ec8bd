//! Shared test visitors and walk helpers.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::{
    scan, EventLog, ScopeKind, ScopeStack, StructuralIndex, Visitor, WalkError, WalkEvent, Walker,
};

/// Scans `json` and walks it strictly, returning the outcome together with
/// the events that fired before it.
pub(crate) fn walk(json: &str) -> (Result<(), WalkError<Infallible>>, Vec<WalkEvent>) {
    let buf = json.as_bytes();
    let offsets = scan(buf);
    let index = StructuralIndex::new(buf, &offsets);
    let mut log = EventLog::new();
    let outcome = Walker::new(index).walk_document(&mut log);
    (outcome, log.into_events())
}

pub(crate) fn walk_ok(json: &str) -> Vec<WalkEvent> {
    let (outcome, events) = walk(json);
    assert!(outcome.is_ok(), "walk of {json:?} failed: {outcome:?}");
    events
}

/// Asserts the structural invariants every accepted walk must satisfy:
/// container starts and ends pair up, and keys only fire inside an object.
pub(crate) fn assert_balanced(events: &[WalkEvent]) {
    let mut scopes = Vec::new();
    for event in events {
        match event {
            WalkEvent::StartObject => scopes.push(ScopeKind::Object),
            WalkEvent::StartArray => scopes.push(ScopeKind::Array),
            WalkEvent::EndObject => assert_eq!(scopes.pop(), Some(ScopeKind::Object)),
            WalkEvent::EndArray => assert_eq!(scopes.pop(), Some(ScopeKind::Array)),
            WalkEvent::Key(_) => assert_eq!(scopes.last(), Some(&ScopeKind::Object)),
            _ => {}
        }
    }
    assert!(scopes.is_empty(), "unclosed containers: {scopes:?}");
}

/// Visitor that fails on its `budget`-th fallible callback and records any
/// callback that arrives after the failure.
pub(crate) struct FailAfter {
    budget: usize,
    errored: bool,
    pub(crate) calls_after_error: usize,
    scopes: ScopeStack,
}

impl FailAfter {
    pub(crate) fn new(budget: usize) -> Self {
        Self {
            budget,
            errored: false,
            calls_after_error: 0,
            scopes: ScopeStack::new(),
        }
    }

    fn tick(&mut self) -> Result<(), &'static str> {
        if self.errored {
            self.calls_after_error += 1;
            return Err("callback after error");
        }
        if self.budget == 0 {
            self.errored = true;
            return Err("injected visitor failure");
        }
        self.budget -= 1;
        Ok(())
    }
}

impl<'src> Visitor<'src> for FailAfter {
    type Error = &'static str;

    fn start_document(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn end_document(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn root_primitive(&mut self, _value: &'src [u8]) -> Result<(), &'static str> {
        self.tick()
    }

    fn start_object(&mut self) -> Result<(), &'static str> {
        self.tick()?;
        self.scopes.push_object();
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn empty_object(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn key(&mut self, _key: &'src [u8]) -> Result<(), &'static str> {
        self.tick()
    }

    fn next_field(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn start_array(&mut self) -> Result<(), &'static str> {
        self.tick()?;
        self.scopes.push_array();
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn empty_array(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn next_array_element(&mut self) -> Result<(), &'static str> {
        self.tick()
    }

    fn primitive(&mut self, _value: &'src [u8]) -> Result<(), &'static str> {
        self.tick()
    }

    fn increment_count(&mut self) {
        if self.errored {
            self.calls_after_error += 1;
        }
    }

    fn end_container(&mut self) -> ScopeKind {
        if self.errored {
            self.calls_after_error += 1;
        }
        self.scopes.pop()
    }
}

/// Visitor recording per-container element counts via `increment_count`,
/// pushed to `closed` in container-close order.
pub(crate) struct ElementCounter {
    open: Vec<usize>,
    pub(crate) closed: Vec<usize>,
    scopes: ScopeStack,
}

impl ElementCounter {
    pub(crate) fn new() -> Self {
        Self {
            open: Vec::new(),
            closed: Vec::new(),
            scopes: ScopeStack::new(),
        }
    }
}

impl<'src> Visitor<'src> for ElementCounter {
    type Error = Infallible;

    fn start_object(&mut self) -> Result<(), Infallible> {
        self.scopes.push_object();
        self.open.push(0);
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), Infallible> {
        self.scopes.push_array();
        self.open.push(0);
        Ok(())
    }

    fn increment_count(&mut self) {
        *self.open.last_mut().expect("count outside any container") += 1;
    }

    fn end_container(&mut self) -> ScopeKind {
        let count = self.open.pop().expect("close without open");
        self.closed.push(count);
        self.scopes.pop()
    }
}
