/// A single pattern token.
///
/// Only the six structural symbols get their own variant; every other
/// character, including `^`, `$` and `|`, comes out as an ordinary `Char`
/// token. Their special meaning is decided later, by the parser, purely by
/// comparing the character value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    GroupOpen,
    GroupClose,
    Star,
    Plus,
    Question,
    Wildcard,
    Char(char),
}

impl Token {
    /// True for the tokens that end the current sequence without becoming
    /// part of it: `)` and `|`. No alternation branch is ever built for
    /// `|`; it only terminates.
    pub fn ends_sequence(&self) -> bool {
        matches!(self, Token::GroupClose | Token::Char('|'))
    }
}

/// Cursor over a pattern string, yielding one token per character.
///
/// The sequence is finite and not restartable. `peek` looks at the next
/// pattern character without advancing the cursor.
pub struct Tokenizer<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    /// The next pattern character, without advancing.
    pub fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        let token = match ch {
            '(' => Token::GroupOpen,
            ')' => Token::GroupClose,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Question,
            '.' => Token::Wildcard,
            c => Token::Char(c),
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_symbols() {
        let tokens: Vec<Token> = Tokenizer::new("()*+?.").collect();
        assert_eq!(
            tokens,
            vec![
                Token::GroupOpen,
                Token::GroupClose,
                Token::Star,
                Token::Plus,
                Token::Question,
                Token::Wildcard,
            ]
        );
    }

    #[test]
    fn anchors_and_pipe_are_plain_chars() {
        let tokens: Vec<Token> = Tokenizer::new("^$|a").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Char('^'),
                Token::Char('$'),
                Token::Char('|'),
                Token::Char('a'),
            ]
        );
    }

    #[test]
    fn peek_does_not_advance() {
        let mut tokens = Tokenizer::new("ab");
        assert_eq!(tokens.peek(), Some('a'));
        assert_eq!(tokens.peek(), Some('a'));
        assert_eq!(tokens.next(), Some(Token::Char('a')));
        assert_eq!(tokens.peek(), Some('b'));
    }

    #[test]
    fn exhausted_tokenizer_stays_exhausted() {
        let mut tokens = Tokenizer::new("a");
        assert_eq!(tokens.next(), Some(Token::Char('a')));
        assert_eq!(tokens.peek(), None);
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn multibyte_characters_are_single_tokens() {
        let tokens: Vec<Token> = Tokenizer::new("é.ß").collect();
        assert_eq!(
            tokens,
            vec![Token::Char('é'), Token::Wildcard, Token::Char('ß')]
        );
    }

    #[test]
    fn sequence_terminators() {
        assert!(Token::GroupClose.ends_sequence());
        assert!(Token::Char('|').ends_sequence());
        assert!(!Token::GroupOpen.ends_sequence());
        assert!(!Token::Star.ends_sequence());
        assert!(!Token::Char('a').ends_sequence());
    }
}
