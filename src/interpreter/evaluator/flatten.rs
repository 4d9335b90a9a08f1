use crate::ast::{Element, ListNode, NumberNode};

/// Flattens a list into its integer literals, depth first and left to right.
///
/// `[[1, 2], 3]` yields the literals `1`, `2`, `3`; empty sublists contribute
/// nothing.
///
/// # Examples
/// ```
/// use countavg::{interpreter::evaluator::flatten::flatten_values, parse_source};
///
/// let program = parse_source("[[1, 2], [], 3] / count(1, 2, 3)").unwrap();
/// assert_eq!(flatten_values(&program.left), [1, 2, 3]);
/// ```
#[must_use]
pub fn flatten(list: &ListNode) -> Vec<&NumberNode> {
    let mut numbers = Vec::new();
    collect(list, &mut numbers);
    numbers
}

/// Like [`flatten`], keeping only the values.
#[must_use]
pub fn flatten_values(list: &ListNode) -> Vec<i64> {
    flatten(list).into_iter().map(|number| number.value).collect()
}

fn collect<'a>(list: &'a ListNode, numbers: &mut Vec<&'a NumberNode>) {
    for element in &list.elements {
        match element {
            Element::Number(number) => numbers.push(number),
            Element::List(sublist) => collect(sublist, numbers),
        }
    }
}
