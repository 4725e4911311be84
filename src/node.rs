/// A possibly nested list element.
///
/// `Group` owns its children outright, so a value of this type is always a
/// finite tree. [`flatten`](crate::flatten) turns it back into a flat sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// A leaf value.
    Single(T),

    /// A sublist of further nodes (arbitrary depth).
    Group(Vec<Node<T>>),
}

impl<T> Node<T> {
    /// Creates a leaf node.
    pub fn single(value: T) -> Self {
        Node::Single(value)
    }

    /// Creates a group node from any collection of nodes.
    pub fn group<I: IntoIterator<Item = Node<T>>>(children: I) -> Self {
        Node::Group(children.into_iter().collect())
    }

    /// Returns true for `Single`.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Single(_))
    }

    /// Counts the leaves below this node.
    ///
    /// Walks with an explicit stack so deep nesting cannot overflow.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Single(_) => count += 1,
                Node::Group(children) => stack.extend(children.iter()),
            }
        }

        count
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::Single(value)
    }
}
