/// A matcher node.
///
/// Built once by the parser and never mutated; every node exclusively owns
/// its children, so the whole pattern is a tree. Quantifiers wrap exactly
/// one child, a `Sequence` holds zero or more in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(char),
    Wildcard,
    StartAnchor,
    EndAnchor,
    Star(Box<Node>),
    Plus(Box<Node>),
    Question(Box<Node>),
    Sequence(Vec<Node>),
}
