use indexmap::IndexMap;

use crate::ConfigValue;

/// A possibly nested mapping, rendered as a nested map literal.
///
/// The tree owns its children, so cyclic structures are unrepresentable and
/// emission terminates after at most [`ConfigTree::depth`] recursive steps.
/// Branch entries keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigTree {
    Leaf(ConfigValue),
    Branch(IndexMap<String, ConfigTree>),
}

impl ConfigTree {
    /// An empty branch, ready for [`field`](Self::field) and
    /// [`child`](Self::child) calls.
    pub fn branch() -> Self {
        Self::Branch(IndexMap::new())
    }

    pub fn leaf(value: impl Into<ConfigValue>) -> Self {
        Self::Leaf(value.into())
    }

    /// Adds a leaf entry. Has no effect on a leaf tree.
    pub fn field(self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.child(key, Self::Leaf(value.into()))
    }

    /// Adds a subtree entry. Has no effect on a leaf tree.
    pub fn child(mut self, key: impl Into<String>, subtree: ConfigTree) -> Self {
        if let Self::Branch(entries) = &mut self {
            entries.insert(key.into(), subtree);
        }
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Nesting depth: the number of branch levels below and including this
    /// node. A leaf has depth zero.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(entries) => {
                1 + entries
                    .values()
                    .map(ConfigTree::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl From<ConfigValue> for ConfigTree {
    fn from(value: ConfigValue) -> Self {
        Self::Leaf(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_keeps_insertion_order() {
        let tree = ConfigTree::branch()
            .field("zebra", 1)
            .field("apple", 2)
            .field("mango", 3);

        let ConfigTree::Branch(entries) = tree else {
            panic!("expected a branch");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn depth_counts_branch_levels() {
        assert_eq!(ConfigTree::leaf(1).depth(), 0);
        assert_eq!(ConfigTree::branch().depth(), 1);

        let nested = ConfigTree::branch()
            .field("flat", "value")
            .child("inner", ConfigTree::branch().field("leaf", true));
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn inserting_into_a_leaf_is_inert() {
        let leaf = ConfigTree::leaf("fixed");
        assert_eq!(leaf.clone().field("key", 1), leaf);
    }
}
