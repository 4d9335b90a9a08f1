use std::fmt;

/// A single integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberNode {
    /// The parsed value.
    pub value:  i64,
    /// Character offset of the literal in the source.
    pub offset: usize,
}

/// A bracketed list of elements, such as `[1, [2, 3]]`.
///
/// Lists may be empty and may nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// The elements in source order.
    pub elements: Vec<Element>,
    /// Character offset of the opening delimiter.
    pub offset:   usize,
}

/// Anything that may appear inside a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// An integer literal.
    Number(NumberNode),
    /// A nested sublist.
    List(ListNode),
}

/// The `count(...)` operand of a division.
///
/// The elements written between the parentheses are held as a [`ListNode`]
/// whose offset is the `(`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountNode {
    /// The list being counted.
    pub list:   ListNode,
    /// Character offset of the `count` keyword.
    pub offset: usize,
}

/// The root of every program: `left / count(right)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionNode {
    /// The dividend list.
    pub left:   ListNode,
    /// The count operand.
    pub right:  CountNode,
    /// Character offset of the `/`.
    pub offset: usize,
}

/// A borrowed view over any node of the tree.
///
/// The typed structs above make malformed trees unrepresentable (a division
/// always divides by a count, a count always wraps a list); `Node` erases
/// that distinction for code that walks the whole tree generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// See [`NumberNode`].
    Number(&'a NumberNode),
    /// See [`ListNode`].
    List(&'a ListNode),
    /// See [`CountNode`].
    Count(&'a CountNode),
    /// See [`DivisionNode`].
    Division(&'a DivisionNode),
}

impl<'a> Node<'a> {
    /// Returns the direct children of this node, in source order.
    #[must_use]
    pub fn children(self) -> Vec<Self> {
        match self {
            Self::Number(_) => Vec::new(),
            Self::List(list) => list.elements.iter().map(Self::from).collect(),
            Self::Count(count) => vec![Self::List(&count.list)],
            Self::Division(division) => {
                vec![Self::List(&division.left), Self::Count(&division.right)]
            },
        }
    }

    /// Character offset of the node in the source.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Number(node) => node.offset,
            Self::List(node) => node.offset,
            Self::Count(node) => node.offset,
            Self::Division(node) => node.offset,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Number(node) => format!("Number {}", node.value),
            Self::List(node) => format!("List ({} elements)", node.elements.len()),
            Self::Count(_) => "Count".to_string(),
            Self::Division(_) => "Division".to_string(),
        }
    }

    fn write_tree(self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{} @{}", "", self.label(), self.offset(), indent = depth * 2)?;
        for child in self.children() {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a Element> for Node<'a> {
    fn from(element: &'a Element) -> Self {
        match element {
            Element::Number(number) => Self::Number(number),
            Element::List(list) => Self::List(list),
        }
    }
}

/// Renders the subtree one node per line, children indented by two spaces.
///
/// ```
/// use countavg::{ast::Node, parse_source};
///
/// let program = parse_source("[1]/count(1)").unwrap();
/// assert_eq!(Node::Division(&program).to_string(),
///            "Division @3\n  List (1 elements) @0\n    Number 1 @1\n  Count @4\n    List (1 elements) @9\n      Number 1 @10\n");
/// ```
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
