//! Corrective rewrites for a family of non-conformant tools.
//!
//! The emitting framework of that family has known defects: a malformed
//! vector-type marker line in place of a proper opening tag, a stray
//! sentinel after the document and an error preamble before it. The
//! rewrites are line-level and deliberately narrow. The marker fix is a
//! one-shot two-state flag, not a stack; nested malformed markers stay
//! broken.

/// Marker line emitted instead of a proper vector-type opening tag.
const MALFORMED_VECTOR_MARKER: &str = "<file collection: semi-colon delimited list>";
/// Opening tag the marker line stands in for.
const VECTOR_OPENING_TAG: &str = "<file-vector>";
/// Closing tag the armed flag rewrites.
const BASE_CLOSING_TAG: &str = "</file>";
/// Closing tag it becomes.
const VECTOR_CLOSING_TAG: &str = "</file-vector>";
/// Sentinel sometimes appended after the document.
const TRAILING_SENTINEL: &str = "XML";
/// Error line sometimes printed before the document.
const ERROR_PREAMBLE: &str = "Error: Unable to set default atlas";

/// Rewrite state for the malformed vector marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VectorRewrite {
    Idle,
    /// The next base closing tag becomes the vector closing tag.
    Armed,
}

/// Applies the compatibility rewrites to raw descriptor text and trims
/// surrounding whitespace. Conformant text passes through unchanged apart
/// from the trim.
pub fn apply_compat_rewrites(raw: &str) -> String {
    let mut rewritten = String::with_capacity(raw.len());
    let mut state = VectorRewrite::Idle;
    for line in raw.lines() {
        match (state, line.trim()) {
            (_, MALFORMED_VECTOR_MARKER) => {
                rewritten.push_str(VECTOR_OPENING_TAG);
                state = VectorRewrite::Armed;
            }
            (VectorRewrite::Armed, BASE_CLOSING_TAG) => {
                rewritten.push_str(VECTOR_CLOSING_TAG);
                state = VectorRewrite::Idle;
            }
            _ => rewritten.push_str(line),
        }
        rewritten.push('\n');
    }

    let mut text = rewritten.trim();
    if let Some(stripped) = text.strip_suffix(TRAILING_SENTINEL) {
        text = stripped;
    }
    if let Some(stripped) = text.strip_prefix(ERROR_PREAMBLE) {
        text = stripped;
    }
    text.to_string()
}

// ============================================================================
// TESTS
// ============================================================================
