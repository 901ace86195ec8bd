//! Depth-checking visitor.
//!
//! [`StructuralValidator`] accepts every token and only maintains the scope
//! stack, making a walk with it a pure grammar check. It also enforces a
//! configurable maximum nesting depth, the one guard the engine cannot
//! provide because depth bookkeeping is delegated to the visitor.

use thiserror::Error;

use crate::visitor::{ScopeKind, ScopeStack, Visitor};

/// The document nests deeper than the validator allows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("exceeded maximum nesting depth of {limit}")]
pub struct DepthError {
    pub limit: usize,
}

/// Visitor that validates document shape and nesting depth, nothing else.
///
/// Primitive syntax is out of scope here: the engine delegates token
/// materialization to the visitor, and this one accepts any token.
#[derive(Debug, Clone)]
pub struct StructuralValidator {
    scopes: ScopeStack,
    max_depth: usize,
}

impl StructuralValidator {
    /// Default nesting limit, matching what large-buffer JSON parsers
    /// conventionally accept.
    pub const DEFAULT_MAX_DEPTH: usize = 1024;

    #[must_use]
    pub fn new() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }

    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            scopes: ScopeStack::new(),
            max_depth,
        }
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.depth()
    }

    fn check_depth(&self) -> Result<(), DepthError> {
        if self.scopes.depth() > self.max_depth {
            return Err(DepthError {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for StructuralValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Visitor<'src> for StructuralValidator {
    type Error = DepthError;

    fn start_object(&mut self) -> Result<(), DepthError> {
        self.scopes.push_object();
        self.check_depth()
    }

    fn start_array(&mut self) -> Result<(), DepthError> {
        self.scopes.push_array();
        self.check_depth()
    }

    fn end_container(&mut self) -> ScopeKind {
        self.scopes.pop()
    }
}
