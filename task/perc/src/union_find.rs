/// A partition of `0..len` into disjoint sets.
///
/// Ids outside of `0..len` are a caller bug and make implementations panic.
pub trait DisjointSet {
    fn with_len(len: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges the sets containing `a` and `b`.
    fn union(&mut self, a: usize, b: usize);

    /// Returns the representative of the set containing `id`.
    fn find(&self, id: usize) -> usize;

    fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Union by size. Paths are halved while `union` walks them, so `find`
/// never needs a mutable borrow.
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl WeightedQuickUnion {
    fn root_halving(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }
}

impl DisjointSet for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.root_halving(a);
        let mut b = self.root_halving(b);
        if a == b {
            return;
        }

        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }

    fn find(&self, mut id: usize) -> usize {
        while self.parent[id] != id {
            id = self.parent[id];
        }
        id
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singletons() {
        let set = WeightedQuickUnion::with_len(4);
        assert_eq!(set.len(), 4);
        for id in 0..4 {
            assert_eq!(set.find(id), id);
        }
        assert!(!set.connected(0, 1));
    }

    #[test]
    fn transitive_union() {
        let mut set = WeightedQuickUnion::with_len(6);
        set.union(0, 1);
        set.union(2, 3);
        assert!(!set.connected(1, 2));

        set.union(1, 3);
        assert!(set.connected(0, 2));
        assert!(set.connected(3, 0));
        assert!(!set.connected(0, 4));

        set.union(3, 3);
        set.union(0, 2);
        assert_eq!(set.size[set.find(0)], 4);
    }

    #[test]
    fn smaller_tree_goes_under_larger() {
        let mut set = WeightedQuickUnion::with_len(5);
        set.union(0, 1);
        set.union(0, 2);
        let root = set.find(0);

        set.union(4, 0);
        assert_eq!(set.find(4), root);
    }

    #[test]
    fn long_chain_stays_shallow() {
        let len = 1 << 12;
        let mut set = WeightedQuickUnion::with_len(len);
        for id in 1..len {
            set.union(id - 1, id);
        }

        let root = set.find(0);
        let mut depth = 0;
        let mut id = len - 1;
        while set.parent[id] != id {
            id = set.parent[id];
            depth += 1;
        }
        assert_eq!(id, root);
        assert!(depth <= 12);
    }

    #[test]
    #[should_panic]
    fn id_out_of_range() {
        WeightedQuickUnion::with_len(3).find(3);
    }
}
