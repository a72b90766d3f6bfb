//! A minimal regular-expression engine with fullmatch semantics.
//!
//! Patterns support literal characters, `.`, the quantifiers `*`, `+` and
//! `?` on bare literals, `(...)` grouping and the `^`/`$` anchors. A match
//! must consume the entire input, not just a prefix or substring.
//!
//! Matching is greedy with no backtracking: once a quantifier has consumed
//! characters it never gives them back, so e.g. `a*ab` can never match
//! `aab`. Quantifiers apply only to the literal immediately before them,
//! never to groups, `.` or anchors, and `|` terminates the sequence being
//! parsed instead of introducing an alternative.

pub mod ast;
pub mod engine;
pub mod generate;
pub mod matcher;
pub mod parser;
pub mod token;

pub use engine::Engine;

/// Compile a pattern. This never fails; malformed syntax degrades to a
/// partial tree rather than erroring.
pub fn compile(pattern: &str) -> Engine {
    Engine::new(pattern)
}

/// One-shot fullmatch of `text` against `pattern`.
pub fn is_match(pattern: &str, text: &str) -> bool {
    compile(pattern).is_match(text)
}
