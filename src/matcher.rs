use crate::ast::Node;

// Return the position after matching `node` at `pos`, or None on failure.
//
// Matching is forward-only: a greedy quantifier keeps every character it
// consumed even when that starves a later sibling, so a sequence that fails
// after one fails outright. The parser only wraps literals in quantifiers,
// so every repetition step consumes at least one character.
pub fn match_node(node: &Node, input: &[char], pos: usize) -> Option<usize> {
    match node {
        Node::Literal(c) => {
            if pos < input.len() && input[pos] == *c { Some(pos + 1) } else { None }
        }
        Node::Wildcard => {
            if pos < input.len() { Some(pos + 1) } else { None }
        }
        Node::StartAnchor => {
            if pos == 0 { Some(pos) } else { None }
        }
        Node::EndAnchor => {
            if pos == input.len() { Some(pos) } else { None }
        }
        Node::Star(child) => {
            let mut pos = pos;
            while let Some(next) = match_node(child, input, pos) {
                pos = next;
            }
            Some(pos)
        }
        Node::Plus(child) => {
            let mut pos = match_node(child, input, pos)?;
            while let Some(next) = match_node(child, input, pos) {
                pos = next;
            }
            Some(pos)
        }
        Node::Question(child) => Some(match_node(child, input, pos).unwrap_or(pos)),
        Node::Sequence(nodes) => {
            let mut pos = pos;
            for node in nodes {
                pos = match_node(node, input, pos)?;
            }
            Some(pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn literal_consumes_one_matching_char() {
        let input = chars("ab");
        assert_eq!(match_node(&Literal('a'), &input, 0), Some(1));
        assert_eq!(match_node(&Literal('a'), &input, 1), None);
        assert_eq!(match_node(&Literal('b'), &input, 2), None);
    }

    #[test]
    fn wildcard_needs_a_char() {
        let input = chars("x");
        assert_eq!(match_node(&Wildcard, &input, 0), Some(1));
        assert_eq!(match_node(&Wildcard, &input, 1), None);
    }

    #[test]
    fn anchors_are_zero_width() {
        let input = chars("ab");
        assert_eq!(match_node(&StartAnchor, &input, 0), Some(0));
        assert_eq!(match_node(&StartAnchor, &input, 1), None);
        assert_eq!(match_node(&EndAnchor, &input, 2), Some(2));
        assert_eq!(match_node(&EndAnchor, &input, 1), None);
    }

    #[test]
    fn star_is_greedy_and_never_fails() {
        let star = Star(Box::new(Literal('a')));
        assert_eq!(match_node(&star, &chars("aaab"), 0), Some(3));
        assert_eq!(match_node(&star, &chars("b"), 0), Some(0));
        assert_eq!(match_node(&star, &chars(""), 0), Some(0));
    }

    #[test]
    fn plus_requires_one_repetition() {
        let plus = Plus(Box::new(Literal('a')));
        assert_eq!(match_node(&plus, &chars("aa"), 0), Some(2));
        assert_eq!(match_node(&plus, &chars("ba"), 0), None);
    }

    #[test]
    fn question_keeps_position_on_failure() {
        let question = Question(Box::new(Literal('a')));
        assert_eq!(match_node(&question, &chars("ab"), 0), Some(1));
        assert_eq!(match_node(&question, &chars("ba"), 0), Some(0));
    }

    #[test]
    fn sequence_threads_the_position() {
        let seq = Sequence(vec![Literal('a'), Wildcard, Literal('c')]);
        assert_eq!(match_node(&seq, &chars("abc"), 0), Some(3));
        assert_eq!(match_node(&seq, &chars("abd"), 0), None);
    }

    #[test]
    fn sequence_does_not_retreat_into_a_greedy_child() {
        // Star eats both `a`s; the literal `a` after it fails with no way
        // to give one back.
        let seq = Sequence(vec![Star(Box::new(Literal('a'))), Literal('a')]);
        assert_eq!(match_node(&seq, &chars("aa"), 0), None);
    }

    #[test]
    fn empty_sequence_matches_zero_width() {
        assert_eq!(match_node(&Sequence(vec![]), &chars("xyz"), 1), Some(1));
    }
}
