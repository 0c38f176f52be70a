//! Flyweight pattern: a forest where trees share their heavy type data.
//!
//! Name, color and texture live in a [`TreeType`] that the [`TreeFactory`]
//! hands out behind an `Arc`; each [`Tree`] only stores its coordinates.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Intrinsic state, shared between trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn draw(&self, x: i32, y: i32) -> String {
        format!(
            "{} tree ({}, {}) at ({}, {})",
            self.name, self.color, self.texture, x, y
        )
    }
}

/// Caches tree types so each combination exists once.
#[derive(Debug, Default)]
pub struct TreeFactory {
    types: HashMap<(String, String, String), Arc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree_type(&mut self, name: &str, color: &str, texture: &str) -> Arc<TreeType> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        let tree_type = self.types.entry(key).or_insert_with(|| {
            debug!(name, color, texture, "new tree type");
            Arc::new(TreeType {
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            })
        });
        Arc::clone(tree_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Extrinsic state plus a shared type.
#[derive(Debug, Clone)]
pub struct Tree {
    x: i32,
    y: i32,
    kind: Arc<TreeType>,
}

impl Tree {
    pub fn kind(&self) -> &Arc<TreeType> {
        &self.kind
    }

    pub fn draw(&self) -> String {
        self.kind.draw(self.x, self.y)
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    trees: Vec<Tree>,
    factory: TreeFactory,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant(&mut self, x: i32, y: i32, name: &str, color: &str, texture: &str) {
        let kind = self.factory.tree_type(name, color, texture);
        self.trees.push(Tree { x, y, kind });
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Distinct shared types in use.
    pub fn type_count(&self) -> usize {
        self.factory.len()
    }

    pub fn draw(&self) -> Vec<String> {
        self.trees.iter().map(Tree::draw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_types_are_shared() {
        let mut forest = Forest::new();
        for i in 0..100 {
            forest.plant(i, i * 2, "Oak", "green", "rough");
        }
        forest.plant(0, 0, "Birch", "white", "smooth");

        assert_eq!(forest.tree_count(), 101);
        assert_eq!(forest.type_count(), 2);

        let first = forest.trees()[0].kind();
        let second = forest.trees()[1].kind();
        assert!(Arc::ptr_eq(first, second));
    }

    #[test]
    fn any_differing_field_creates_new_type() {
        let mut factory = TreeFactory::new();
        let a = factory.tree_type("Oak", "green", "rough");
        let b = factory.tree_type("Oak", "red", "rough");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn draw_combines_shared_and_own_state() {
        let mut forest = Forest::new();
        forest.plant(3, 4, "Pine", "dark green", "needles");
        assert_eq!(forest.draw(), vec!["Pine tree (dark green, needles) at (3, 4)"]);
    }
}
