use crate::matcher::match_node;
use crate::parser::Parser;

/// A compiled pattern.
///
/// Compilation never fails: every pattern string parses into some tree,
/// possibly not the one its author intended (see [`crate::parser`]). The
/// tree is rebuilt on every match call and discarded afterwards; nothing
/// is cached, so separate calls share no state.
pub struct Engine {
    pattern: String,
}

impl Engine {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    /// True iff `text` is matched end to end by the pattern.
    ///
    /// Fullmatch semantics: the match starts at position 0 and must land
    /// exactly on the end of the text. Positions count characters, not
    /// bytes.
    pub fn is_match(&self, text: &str) -> bool {
        let mut parser = Parser::new(&self.pattern);
        let ast = parser.parse();
        let chars: Vec<char> = text.chars().collect();
        match_node(&ast, &chars, 0) == Some(chars.len())
    }
}
