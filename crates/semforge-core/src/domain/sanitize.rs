//! Identifier sanitation for generated code.
//!
//! Raw parameter names and flags come from tool authors and are not always
//! valid identifiers in the generated target language. The rules here are
//! pure and deterministic: trim padding, then disambiguate reserved words
//! with a fixed prefix. Applying them twice changes nothing.

/// Reserved words of the generated target language.
const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Prefix applied to names that collide with a reserved word.
pub const DISAMBIGUATION_PREFIX: &str = "opt_";

/// Maps a raw declared name to a safe identifier.
///
/// Trimming happens before the reserved-word check, so a padded keyword
/// like `" for "` still gets prefixed. Idempotent: a prefixed name no
/// longer collides, so a second pass returns its input unchanged.
pub fn sanitize_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    if RESERVED_WORDS.contains(&trimmed) {
        format!("{DISAMBIGUATION_PREFIX}{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Strips flag decoration: leading spaces and dashes, trailing spaces.
/// `--threshold`, `-threshold` and `threshold` all name the same flag.
pub fn strip_flag(raw: &str) -> &str {
    raw.trim_start_matches([' ', '-']).trim_end_matches(' ')
}

// ============================================================================
// TESTS
// ============================================================================
