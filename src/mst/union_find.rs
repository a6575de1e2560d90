use std::collections::HashMap;

/// A vertex slot in the union-find forest.
struct Vertex {
    /// Index of the parent slot; a root points at itself.
    parent: usize,
}

impl Vertex {
    /// Creates a slot that is its own root.
    ///
    /// # Arguments
    ///
    /// * `key` - Index of the slot being created.
    fn new(key: usize) -> Vertex {
        Vertex { parent: key }
    }
}

/// Disjoint sets of vertex labels.
///
/// Labels are registered lazily the first time they are looked up and
/// interned to dense indices. `find` compresses paths; `union` is unranked
/// and always hangs the root of the first argument under the root of the
/// second.
///
/// # Example
///
/// ```
/// use mst_solver::mst::UnionFind;
///
/// let mut sets = UnionFind::default();
/// sets.union("A", "B");
/// assert_eq!(sets.find("A"), "B");
/// assert!(sets.same("B", "A"));
/// assert!(!sets.same("A", "C"));
/// ```
#[derive(Default)]
pub struct UnionFind {
    /// Label to slot index.
    indices: HashMap<String, usize>,
    /// Slot index to label.
    labels: Vec<String>,
    /// Parent links, indexed by slot.
    vertices: Vec<Vertex>,
}

impl UnionFind {
    /// Creates an empty structure with no labels registered.
    pub fn new() -> UnionFind {
        UnionFind::default()
    }

    /// Number of labels seen so far.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no label has been looked up yet.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the representative label of the set containing `label`.
    ///
    /// # Arguments
    ///
    /// * `label` - The vertex label to look up; registered if unseen.
    ///
    /// # Returns
    ///
    /// The label at the root of `label`'s set.
    pub fn find(&mut self, label: &str) -> &str {
        let key = self.key(label);
        let root = self.find_set(key);
        &self.labels[root]
    }

    /// Returns `true` if `a` and `b` are in the same set.
    ///
    /// Both labels are registered if unseen.
    pub fn same(&mut self, a: &str, b: &str) -> bool {
        let a = self.key(a);
        let b = self.key(b);
        self.find_set(a) == self.find_set(b)
    }

    /// Merges the set of `a` into the set of `b`.
    ///
    /// # Arguments
    ///
    /// * `a` - A label whose root becomes a child.
    /// * `b` - A label whose root stays a root.
    ///
    /// # Returns
    ///
    /// `false` if both labels were already in the same set.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let a = self.key(a);
        let b = self.key(b);
        let root_a = self.find_set(a);
        let root_b = self.find_set(b);
        if root_a == root_b {
            return false;
        }
        self.vertices[root_a].parent = root_b;
        true
    }

    /// Returns the slot index of `label`, allocating a new root slot if unseen.
    fn key(&mut self, label: &str) -> usize {
        if let Some(&key) = self.indices.get(label) {
            return key;
        }
        let key = self.vertices.len();
        self.indices.insert(label.to_string(), key);
        self.labels.push(label.to_string());
        self.vertices.push(Vertex::new(key));
        key
    }

    /// Walks up to the root, then points every slot on the path at it.
    ///
    /// # Arguments
    ///
    /// * `key` - Slot index to resolve.
    ///
    /// # Returns
    ///
    /// The slot index of the root.
    fn find_set(&mut self, key: usize) -> usize {
        let mut root = key;
        while self.vertices[root].parent != root {
            root = self.vertices[root].parent;
        }

        let mut current = key;
        while current != root {
            let next = self.vertices[current].parent;
            self.vertices[current].parent = root;
            current = next;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_should_register_unknown_labels_as_roots() {
        let mut sets = UnionFind::new();
        assert!(sets.is_empty());
        assert_eq!(sets.find("A"), "A");
        assert_eq!(sets.find("B"), "B");
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn union_should_hang_first_root_under_second() {
        let mut sets = UnionFind::new();
        assert!(sets.union("A", "B"));
        assert!(sets.union("C", "A"));
        assert_eq!(sets.find("C"), "B");
        assert_eq!(sets.find("A"), "B");
        assert!(!sets.union("A", "C"));
    }

    #[test]
    fn find_should_compress_paths() {
        let mut sets = UnionFind::new();
        // Chain D -> C -> B -> A without going through find on the way.
        sets.union("B", "A");
        sets.union("C", "B");
        let c = sets.key("C");
        let b = sets.key("B");
        sets.vertices[c].parent = b;
        let d = sets.key("D");
        sets.vertices[d].parent = c;

        assert_eq!(sets.find("D"), "A");
        let a = sets.key("A");
        assert_eq!(sets.vertices[d].parent, a);
        assert_eq!(sets.vertices[c].parent, a);
    }

    #[test]
    fn labels_should_compare_exactly() {
        let mut sets = UnionFind::new();
        sets.union("a", "b");
        assert!(!sets.same("A", "b"));
        assert!(sets.same("a", "b"));
    }
}
