//! Stage-2 structural walk engine for a two-stage JSON parser.
//!
//! Stage 1 of such a parser scans the raw buffer (typically with SIMD
//! routines) and produces a *structural index*: the ordered byte offsets of
//! every JSON-significant character (`{` `}` `[` `]` `,` `:` and the first
//! byte of each string, number or literal). This crate is stage 2: given the
//! buffer and the index, [`Walker`] validates the JSON grammar doing O(1)
//! work per structural character and drives a caller-supplied [`Visitor`]
//! through the document, emitting object/array boundaries, keys and
//! primitives as it goes.
//!
//! Primitive materialization (number parsing, string unescaping, literal
//! recognition) is deliberately the visitor's concern; the engine only ever
//! reads the bytes the index names, allocates nothing, and stops at the
//! first grammar or visitor error.
//!
//! A reference scalar scanner ([`scan`]) is included so the crate is usable
//! on its own; production callers are expected to supply indexes from a
//! vectorized stage 1.
//!
//! # Examples
//!
//! ```
//! use jsonwalk::{EventLog, StructuralIndex, WalkEvent, Walker};
//!
//! let buf = br#"{"a":[1,2]}"#;
//! let offsets = jsonwalk::scan(buf);
//! let index = StructuralIndex::new(buf, &offsets);
//!
//! let mut log = EventLog::new();
//! Walker::new(index).walk_document(&mut log).unwrap();
//! assert_eq!(
//!     log.events(),
//!     [
//!         WalkEvent::StartDocument,
//!         WalkEvent::StartObject,
//!         WalkEvent::Key("a".into()),
//!         WalkEvent::StartArray,
//!         WalkEvent::Primitive("1".into()),
//!         WalkEvent::NextArrayElement,
//!         WalkEvent::Primitive("2".into()),
//!         WalkEvent::EndArray,
//!         WalkEvent::EndObject,
//!         WalkEvent::EndDocument,
//!     ]
//! );
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod events;
mod index;
mod iter;
mod logger;
mod validate;
mod visitor;
mod walk;

pub use error::{TapeError, WalkError};
pub use events::{EventLog, WalkEvent};
pub use index::{scan, StructuralIndex};
pub use iter::StructuralIterator;
pub use validate::{DepthError, StructuralValidator};
pub use visitor::{ScopeKind, ScopeStack, Visitor};
pub use walk::Walker;

#[cfg(test)]
mod tests;
