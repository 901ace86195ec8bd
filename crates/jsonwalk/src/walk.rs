//! The grammar state machine.
//!
//! [`Walker`] consumes structurals through a [`StructuralIterator`],
//! validates the JSON grammar, and invokes the [`Visitor`] at every semantic
//! boundary. The grammar is a flat `match` over a small state enum inside
//! one loop; each state's body is short and consumes O(1) structurals. The
//! byte that disambiguated the current transition is always the most
//! recently advanced structural.

#![allow(clippy::inline_always)]

use crate::{
    error::{TapeError, WalkError},
    index::StructuralIndex,
    iter::StructuralIterator,
    logger::walk_log,
    visitor::Visitor,
};

/// Grammar position between structurals. The walk loop carries the most
/// recently advanced value slice alongside the state; `ObjectField` reads it
/// as the pending key, `ArrayValue` as the pending element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ObjectFirstField,
    ObjectField,
    ObjectContinue,
    ArrayFirstValue,
    ArrayValue,
    ArrayContinue,
    ScopeEnd,
    DocumentEnd,
}

#[inline(always)]
fn fail<T, E>(reason: TapeError) -> Result<T, WalkError<E>> {
    walk_log!("", "ERROR", reason);
    Err(WalkError::Tape(reason))
}

/// One walk over one document (strict mode) or one document slice
/// (streaming mode).
///
/// The walker borrows the buffer and index read-only and the visitor
/// exclusively for the duration of [`walk_document`]; it allocates nothing
/// and holds no state beyond the cursor. In streaming mode the cursor is
/// left just past the walked document, so repeated calls consume a stream
/// of concatenated top-level values one at a time.
///
/// [`walk_document`]: Self::walk_document
#[derive(Debug)]
pub struct Walker<'src> {
    index: StructuralIndex<'src>,
    iter: StructuralIterator<'src>,
    streaming: bool,
}

impl<'src> Walker<'src> {
    /// Strict-mode walker: the index holds exactly one top-level value and
    /// the walk must consume it entirely.
    #[must_use]
    pub fn new(index: StructuralIndex<'src>) -> Self {
        Self {
            index,
            iter: StructuralIterator::new(index, 0),
            streaming: false,
        }
    }

    /// Streaming-mode walker starting at index slot `start`: each
    /// [`walk_document`](Self::walk_document) call consumes one top-level
    /// value and leaves the cursor on the next.
    #[must_use]
    pub fn streaming(index: StructuralIndex<'src>, start: u32) -> Self {
        Self {
            index,
            iter: StructuralIterator::new(index, start),
            streaming: true,
        }
    }

    /// Index slot the next walk would start from.
    ///
    /// After a successful streaming walk this is the resume cursor; after an
    /// error its position is unspecified and must not be used to resume.
    #[must_use]
    pub fn next_structural_index(&self) -> u32 {
        self.iter.cursor() as u32
    }

    /// Whether every structural in the index has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.iter.at_end()
    }

    #[inline(always)]
    fn advance_or<E>(&mut self, reason: TapeError) -> Result<&'src [u8], WalkError<E>> {
        match self.iter.advance() {
            Some(value) => Ok(value),
            None => fail(reason),
        }
    }

    #[inline(always)]
    fn advance_byte_or<E>(&mut self, reason: TapeError) -> Result<u8, WalkError<E>> {
        match self.iter.advance_byte() {
            Some(byte) => Ok(byte),
            None => fail(reason),
        }
    }

    /// Dispatches on a value's opening byte. Containers route to their
    /// header states; primitives are emitted in place and the walk resumes
    /// in `cont`, which is also where empty containers land.
    #[inline(always)]
    fn begin_value<V: Visitor<'src>>(
        &mut self,
        visitor: &mut V,
        value: &mut &'src [u8],
        cont: State,
    ) -> Result<State, WalkError<V::Error>> {
        match value[0] {
            b'{' => {
                let next = self.advance_or(TapeError::NoKeyInFirstField)?;
                match next[0] {
                    b'"' => {
                        *value = next;
                        Ok(State::ObjectFirstField)
                    }
                    b'}' => {
                        walk_log!("", "object", "empty");
                        visitor.empty_object().map_err(WalkError::Visitor)?;
                        Ok(cont)
                    }
                    _ => fail(TapeError::NoKeyInFirstField),
                }
            }
            b'[' => {
                let next = self.advance_or(TapeError::MissingCommaInArray)?;
                match next[0] {
                    b']' => {
                        walk_log!("", "array", "empty");
                        visitor.empty_array().map_err(WalkError::Visitor)?;
                        Ok(cont)
                    }
                    _ => {
                        *value = next;
                        Ok(State::ArrayFirstValue)
                    }
                }
            }
            _ => {
                walk_log!("", "primitive", "");
                visitor.primitive(value).map_err(WalkError::Visitor)?;
                Ok(cont)
            }
        }
    }

    /// Walks one document, driving `visitor` through it.
    ///
    /// Returns `Ok(())` when the grammar held and every visitor call
    /// succeeded; in strict mode that additionally requires the whole index
    /// to be consumed. The first grammar or visitor error aborts the walk.
    /// An index with no structurals at all yields [`WalkError::Empty`].
    #[allow(clippy::too_many_lines)]
    pub fn walk_document<V: Visitor<'src>>(
        &mut self,
        visitor: &mut V,
    ) -> Result<(), WalkError<V::Error>> {
        let Some(mut value) = self.iter.advance() else {
            return Err(WalkError::Empty);
        };
        walk_log!("+", "document", "");
        visitor.start_document().map_err(WalkError::Visitor)?;

        // The root value: primitives get their own callback, and a root
        // array is gated on the index ending in `]`. Without that gate an
        // unterminated root array would walk the visitor's depth
        // bookkeeping past the intended document end.
        let mut state = match value[0] {
            b'{' => {
                let next = self.advance_or(TapeError::NoKeyInFirstField)?;
                match next[0] {
                    b'"' => {
                        value = next;
                        State::ObjectFirstField
                    }
                    b'}' => {
                        walk_log!("", "object", "empty");
                        visitor.empty_object().map_err(WalkError::Visitor)?;
                        State::DocumentEnd
                    }
                    _ => return fail(TapeError::NoKeyInFirstField),
                }
            }
            b'[' => {
                if !self.streaming && self.index.last_byte() != Some(b']') {
                    return fail(TapeError::RootArrayNotClosed);
                }
                let next = self.advance_or(TapeError::MissingCommaInArray)?;
                match next[0] {
                    b']' => {
                        walk_log!("", "array", "empty");
                        visitor.empty_array().map_err(WalkError::Visitor)?;
                        State::DocumentEnd
                    }
                    _ => {
                        value = next;
                        State::ArrayFirstValue
                    }
                }
            }
            _ => {
                walk_log!("", "primitive", "root");
                visitor.root_primitive(value).map_err(WalkError::Visitor)?;
                State::DocumentEnd
            }
        };

        loop {
            state = match state {
                State::ObjectFirstField => {
                    walk_log!("+", "object", "");
                    visitor.start_object().map_err(WalkError::Visitor)?;
                    visitor.increment_count();
                    State::ObjectField
                }

                // `value` is the key's opening quote.
                State::ObjectField => {
                    walk_log!("", "key", "");
                    visitor.key(value).map_err(WalkError::Visitor)?;
                    if self.advance_byte_or(TapeError::MissingColon)? != b':' {
                        return fail(TapeError::MissingColon);
                    }
                    value = self.advance_or(TapeError::MissingCommaInObject)?;
                    self.begin_value(visitor, &mut value, State::ObjectContinue)?
                }

                State::ObjectContinue => {
                    match self.advance_byte_or(TapeError::MissingCommaInObject)? {
                        b',' => {
                            visitor.next_field().map_err(WalkError::Visitor)?;
                            visitor.increment_count();
                            value = self.advance_or(TapeError::MissingKeyString)?;
                            if value[0] != b'"' {
                                return fail(TapeError::MissingKeyString);
                            }
                            State::ObjectField
                        }
                        b'}' => {
                            walk_log!("-", "object", "");
                            visitor.end_object().map_err(WalkError::Visitor)?;
                            State::ScopeEnd
                        }
                        _ => return fail(TapeError::MissingCommaInObject),
                    }
                }

                State::ArrayFirstValue => {
                    walk_log!("+", "array", "");
                    visitor.start_array().map_err(WalkError::Visitor)?;
                    visitor.increment_count();
                    State::ArrayValue
                }

                // `value` is the element's opening byte.
                State::ArrayValue => self.begin_value(visitor, &mut value, State::ArrayContinue)?,

                State::ArrayContinue => {
                    match self.advance_byte_or(TapeError::MissingCommaInArray)? {
                        b',' => {
                            visitor.next_array_element().map_err(WalkError::Visitor)?;
                            visitor.increment_count();
                            value = self.advance_or(TapeError::MissingCommaInArray)?;
                            State::ArrayValue
                        }
                        b']' => {
                            walk_log!("-", "array", "");
                            visitor.end_array().map_err(WalkError::Visitor)?;
                            State::ScopeEnd
                        }
                        _ => return fail(TapeError::MissingCommaInArray),
                    }
                }

                State::ScopeEnd => {
                    let parent = visitor.end_container();
                    if !parent.in_container() {
                        State::DocumentEnd
                    } else if parent.in_array() {
                        State::ArrayContinue
                    } else {
                        State::ObjectContinue
                    }
                }

                State::DocumentEnd => {
                    walk_log!("-", "document", "");
                    visitor.end_document().map_err(WalkError::Visitor)?;
                    if !self.streaming && !self.iter.at_end() {
                        return fail(TapeError::TrailingContent);
                    }
                    return Ok(());
                }
            };
        }
    }
}
