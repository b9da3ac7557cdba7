use crate::element::Element;

/// A decision of a visit function about the element just visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Keep the element and visit its children.
    Descend,
    /// Keep the element but leave its children unvisited.
    Retain,
    /// Remove the element together with its whole subtree.
    Remove,
}

/// Walks an element tree depth-first in pre-order, applying a visit
/// function to each element before its children.
///
/// Children are visited in their original order and only when the visit
/// function decides [`Decision::Descend`] for their parent. A child whose
/// own visit decides [`Decision::Remove`] is detached from its parent's
/// child list, so the child and everything underneath it are dropped
/// without further visits. Sibling order is never changed.
///
/// Returns whether the root element itself was kept; detaching the root is
/// the caller's responsibility. The walker makes no decisions of its own.
pub fn walk(element: &mut Element, visit: &mut impl FnMut(&mut Element) -> Decision) -> bool {
    match visit(element) {
        Decision::Remove => false,
        Decision::Retain => true,
        Decision::Descend => {
            element.retain_children(|child| walk(child, visit));
            true
        }
    }
}
