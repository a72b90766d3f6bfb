use crate::ast::Node;
use crate::token::{Token, Tokenizer};

/// Recursive-descent parser for the restricted pattern syntax.
///
/// The `Parser` owns its tokenizer exclusively; one parser builds one AST
/// and is then done. Parsing is total: every pattern string produces some
/// tree. Unbalanced parentheses and stray `|` terminate the sequence being
/// built instead of raising an error.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(pattern),
        }
    }

    /// Parse the whole pattern into its root `Sequence`.
    ///
    /// Example:
    /// - Pattern: `a*b` → Sequence([Star(Literal('a')), Literal('b')])
    pub fn parse(&mut self) -> Node {
        self.parse_sequence()
    }

    /// Parse one sequence of nodes, recursing for parenthesized groups.
    ///
    /// The sequence runs until the tokens are exhausted or a terminator
    /// token (`)` or `|`) is pulled. The terminator itself is dropped, and
    /// for `|` no alternative branch is built: whatever follows it in the
    /// same group is left for the enclosing sequence to pick up.
    fn parse_sequence(&mut self) -> Node {
        let mut nodes = Vec::new();
        while let Some(token) = self.tokens.next() {
            if token.ends_sequence() {
                break;
            }
            match token {
                Token::GroupOpen => {
                    let group = self.parse_sequence();
                    if self.tokens.peek() == Some(')') {
                        self.tokens.next();
                    }
                    nodes.push(group);
                }
                Token::Wildcard => nodes.push(Node::Wildcard),
                Token::Char('^') => nodes.push(Node::StartAnchor),
                Token::Char('$') => nodes.push(Node::EndAnchor),
                Token::Char(c) => nodes.push(self.quantified_literal(c)),
                // A quantifier with no literal before it has nothing to
                // wrap and is dropped. Groups, `.` and anchors never look
                // ahead for a quantifier, so one following them lands here
                // too. GroupClose is unreachable past ends_sequence.
                Token::Star | Token::Plus | Token::Question | Token::GroupClose => {}
            }
        }
        Node::Sequence(nodes)
    }

    /// A literal, wrapped in a quantifier if one immediately follows.
    /// Bare literals are the only quantifiable atoms.
    ///
    /// Example:
    /// - Pattern: `a+` → Plus(Literal('a'))
    /// - Pattern: `a`  → Literal('a')
    fn quantified_literal(&mut self, c: char) -> Node {
        let literal = Node::Literal(c);
        match self.tokens.peek() {
            Some('*') => {
                self.tokens.next();
                Node::Star(Box::new(literal))
            }
            Some('+') => {
                self.tokens.next();
                Node::Plus(Box::new(literal))
            }
            Some('?') => {
                self.tokens.next();
                Node::Question(Box::new(literal))
            }
            _ => literal,
        }
    }
}
