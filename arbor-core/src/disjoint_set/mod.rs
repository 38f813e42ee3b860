//! Union-find (disjoint set union) over node identifiers.
//!
//! The spanning-forest builder processes edges in weight order and uses this
//! structure to decide whether an edge joins two separate components. The
//! partition starts as `n` singletons and only ever coarsens.
//!
//! `find` compresses paths iteratively: one pass walks to the root, a second
//! relinks every visited node directly to it. Stack usage therefore stays
//! constant however deep a chain grows before it is compressed.

use crate::error::{ForestError, Result};

/// A partition of `[0, n)` into disjoint subsets.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(0, 2)?);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), arbor_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton subsets, each its own representative.
    ///
    /// Allocation failure aborts, as it does for any `Vec`. Use
    /// [`Self::try_new`] when `n` comes from untrusted input.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Creates `n` singleton subsets, reserving storage fallibly.
    ///
    /// # Errors
    /// Returns [`ForestError::InvalidSize`] when storage for `n` nodes cannot
    /// be allocated.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{DisjointSet, ForestError};
    ///
    /// assert_eq!(DisjointSet::try_new(3)?.component_count(), 3);
    /// assert!(matches!(
    ///     DisjointSet::try_new(usize::MAX),
    ///     Err(ForestError::InvalidSize { .. }),
    /// ));
    /// # Ok::<(), ForestError>(())
    /// ```
    pub fn try_new(n: usize) -> Result<Self> {
        let too_large = |_| ForestError::InvalidSize {
            requested: i128::try_from(n).unwrap_or(i128::MAX),
        };

        let mut parent = Vec::new();
        parent.try_reserve_exact(n).map_err(too_large)?;
        parent.extend(0..n);

        let mut rank = Vec::new();
        rank.try_reserve_exact(n).map_err(too_large)?;
        rank.resize(n, 0);

        Ok(Self {
            parent,
            rank,
            components: n,
        })
    }

    /// Creates a partition from a signed node count.
    ///
    /// # Errors
    /// Returns [`ForestError::InvalidSize`] when `n` is negative or storage
    /// for `n` nodes cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{DisjointSet, ForestError};
    ///
    /// assert_eq!(DisjointSet::try_from_signed(3)?.len(), 3);
    /// assert_eq!(
    ///     DisjointSet::try_from_signed(-1).unwrap_err(),
    ///     ForestError::InvalidSize { requested: -1 },
    /// );
    /// # Ok::<(), ForestError>(())
    /// ```
    pub fn try_from_signed(n: i64) -> Result<Self> {
        checked_node_count(n).and_then(Self::try_new)
    }

    /// Returns the number of elements in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint subsets.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of the subset containing `node`.
    ///
    /// Every node visited on the way to the root is relinked directly to it.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the subsets containing `left` and `right`.
    ///
    /// The root with the lower rank is linked under the other; on a tie the
    /// root of `left` becomes the parent and its rank grows by one.
    ///
    /// Returns `true` when a merge happened and `false` when both nodes
    /// already shared a subset.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either node is outside the
    /// partition. The partition is left untouched in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;

        let mut parent = self.find_root(left);
        let mut child = self.find_root(right);
        if parent == child {
            return Ok(false);
        }

        let parent_rank = self.rank[parent];
        let child_rank = self.rank[child];
        if parent_rank < child_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.parent[child] = parent;
        if parent_rank == child_rank {
            self.rank[parent] = parent_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a subset.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRange`] when either node is outside the
    /// partition.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(ForestError::OutOfRange {
                node,
                node_count: self.parent.len(),
            })
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

/// Converts a signed node count into a size, rejecting negative values.
///
/// Whether the count can actually be allocated is checked later, by
/// [`DisjointSet::try_new`].
///
/// # Errors
/// Returns [`ForestError::InvalidSize`] when `requested` is negative or does
/// not fit in `usize`.
///
/// # Examples
/// ```
/// use arbor_core::{ForestError, checked_node_count};
///
/// assert_eq!(checked_node_count(6), Ok(6));
/// assert_eq!(checked_node_count(-2), Err(ForestError::InvalidSize { requested: -2 }));
/// ```
pub fn checked_node_count(requested: i64) -> Result<usize> {
    usize::try_from(requested).map_err(|_| ForestError::InvalidSize {
        requested: requested.into(),
    })
}
