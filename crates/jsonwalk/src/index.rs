//! The structural index: a borrowed view over stage-1 output, plus a
//! reference scalar scanner for producing one without a vectorized stage 1.

use alloc::vec::Vec;

/// Borrowed view pairing a byte buffer with its structural index.
///
/// Both borrows are non-exclusive and caller-owned; the view is `Copy` and
/// outlives any number of walks. The offsets must name, in order, every
/// JSON-significant byte of `buf`, and every offset must be in bounds —
/// this is the stage-1 contract, checked here only in debug builds.
#[derive(Debug, Clone, Copy)]
pub struct StructuralIndex<'src> {
    buf: &'src [u8],
    offsets: &'src [u32],
}

impl<'src> StructuralIndex<'src> {
    /// Pairs a buffer with the structural offsets produced for it.
    #[must_use]
    pub fn new(buf: &'src [u8], offsets: &'src [u32]) -> Self {
        debug_assert!(
            offsets.iter().all(|&off| (off as usize) < buf.len()),
            "structural offset out of bounds"
        );
        Self { buf, offsets }
    }

    /// The underlying byte buffer.
    #[must_use]
    pub fn buf(&self) -> &'src [u8] {
        self.buf
    }

    /// The structural offsets, in document order.
    #[must_use]
    pub fn offsets(&self) -> &'src [u32] {
        self.offsets
    }

    /// Number of structural characters in the index.
    #[must_use]
    pub fn n_structurals(&self) -> usize {
        self.offsets.len()
    }

    /// The byte named by the final structural offset, if any.
    ///
    /// Used by the walker's root-array gate: a well-formed non-streaming
    /// document rooted at `[` must end in `]`.
    #[must_use]
    pub fn last_byte(&self) -> Option<u8> {
        let &off = self.offsets.last()?;
        Some(self.buf[off as usize])
    }
}

/// Scans `buf` and returns the offsets of its structural characters.
///
/// This is a plain scalar reference implementation of stage 1: punctuation
/// bytes, the opening quote of every string (skipping escaped interior
/// quotes), and the first byte of every number or literal. It does not
/// validate anything — malformed input simply produces an index whose walk
/// fails. Buffers must be under 4 GiB, the range of a `u32` offset.
#[must_use]
pub fn scan(buf: &[u8]) -> Vec<u32> {
    let mut offsets = Vec::new();
    let mut i = 0;
    while i < buf.len() {
        match buf[i] {
            b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                offsets.push(i as u32);
                i += 1;
            }
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'"' => {
                offsets.push(i as u32);
                i += 1;
                while i < buf.len() {
                    match buf[i] {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
            }
            _ => {
                // Number, literal, or garbage: one structural at its first
                // byte, then skip to the next token boundary.
                offsets.push(i as u32);
                i += 1;
                while i < buf.len()
                    && !matches!(
                        buf[i],
                        b'{' | b'}'
                            | b'['
                            | b']'
                            | b':'
                            | b','
                            | b'"'
                            | b' '
                            | b'\t'
                            | b'\n'
                            | b'\r'
                    )
                {
                    i += 1;
                }
            }
        }
    }
    offsets
}
