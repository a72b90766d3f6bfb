//! Heuristic pattern generation for common string shapes.
//!
//! Given a free-form string, guess a regex that would match strings of the
//! same shape. URLs, email addresses, phone numbers and ZIP codes each map
//! to a fixed pattern; anything else falls back to a character-by-character
//! literal pattern. The guesses use richer syntax than [`crate::Engine`]
//! accepts; they are meant for display and for use with a full regex
//! implementation.

const URL_PATTERN: &str =
    r"(http|https):\/\/(www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}([\/a-zA-Z0-9#-]*)?";
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"(\+?1[-.\s]?)?(\(?\d{3}\)?)[-.\s]?\d{3}[-.\s]?\d{4}";
const ZIP_PATTERN: &str = r"\d{5}(-\d{4})?";

/// Guess a regex for `input` from its shape.
///
/// The checks run in a fixed order and the first hit wins: URL, email,
/// phone number, ZIP code, literal fallback. Note the order makes some
/// inputs counter-intuitive: a ZIP+4 like `12345-6789` is ten phone-ish
/// characters and therefore classified as a phone number.
pub fn regex_for_string(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") || input.contains("www.") {
        URL_PATTERN.to_string()
    } else if input.contains('@') && input.contains('.') {
        EMAIL_PATTERN.to_string()
    } else if looks_like_phone(input) {
        PHONE_PATTERN.to_string()
    } else if looks_like_zip(input) {
        ZIP_PATTERN.to_string()
    } else {
        escape_literal(input)
    }
}

// At least ten leading characters drawn from digits, whitespace, parens
// and dashes.
fn looks_like_phone(input: &str) -> bool {
    input
        .chars()
        .take_while(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '-'))
        .count()
        >= 10
}

// Five leading ASCII digits; whatever follows them is ignored.
fn looks_like_zip(input: &str) -> bool {
    input.len() >= 5 && input.chars().take(5).all(|c| c.is_ascii_digit())
}

/// Build a literal pattern matching strings shaped like `input`: digits
/// become `\d`, letters `[a-zA-Z]`, whitespace `\s`, and regex
/// metacharacters are backslash-escaped.
fn escape_literal(input: &str) -> String {
    let mut pattern = String::new();
    for c in input.chars() {
        if c.is_ascii_digit() {
            pattern.push_str(r"\d");
        } else if c.is_alphabetic() {
            pattern.push_str("[a-zA-Z]");
        } else if c.is_whitespace() {
            pattern.push_str(r"\s");
        } else if is_metachar(c) {
            pattern.push('\\');
            pattern.push(c);
        } else {
            pattern.push(c);
        }
    }
    pattern
}

fn is_metachar(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | '?' | '*' | '+' | '-' | '|' | '^' | '$' | '\\' | '.'
            | '&' | '~' | '#'
    )
}
