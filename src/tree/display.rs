//! Sideways text rendering of the tree.

use alloc::vec::Vec;
use core::fmt;

use crate::node::Node;
use crate::tree::LinkedBst;

/// Pending work for the reverse in-order walk.
enum Step<'a, T> {
    Expand(&'a Node<T>, usize),
    Emit(&'a T, usize),
}

impl<T: fmt::Display> fmt::Display for LinkedBst<T> {
    /// Renders the tree rotated 90 degrees counter-clockwise.
    ///
    /// Right subtree first, then the node, then the left subtree; each item on
    /// its own line, indented with one `"| "` per level of depth.
    ///
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Step<'_, T>> = Vec::new();
        stack.extend(self.root().map(|root| Step::Expand(root, 0)));

        while let Some(step) = stack.pop() {
            match step {
                Step::Expand(node, level) => {
                    // Popped as right subtree, self, left subtree
                    stack.extend(node.left().map(|n| Step::Expand(n, level + 1)));
                    stack.push(Step::Emit(&node.data, level));
                    stack.extend(node.right().map(|n| Step::Expand(n, level + 1)));
                }
                Step::Emit(data, level) => {
                    for _ in 0..level {
                        f.write_str("| ")?;
                    }
                    writeln!(f, "{}", data)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_empty() {
        let tree = LinkedBst::<u32>::new();
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn test_display_scenario_a() {
        let tree: LinkedBst<u32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let expected = "| | 9\n| 8\n| | 7\n5\n| | 4\n| 3\n| | 1\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_display_chain() {
        let tree: LinkedBst<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(tree.to_string(), "| | 3\n| 2\n1\n");
    }
}
