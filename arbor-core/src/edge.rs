//! Weighted undirected edges.

/// An undirected edge between two nodes, carrying a weight.
///
/// The endpoints are kept in the order the caller supplied them; the
/// builder never canonicalises orientation so selected edges can be matched
/// back to the input verbatim.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new(3, 1, 2.5_f64);
/// assert_eq!(edge.endpoints(), (3, 1));
/// assert_eq!(edge.weight(), 2.5);
/// assert_eq!(Edge::from((3, 1, 2.5_f64)), edge);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns `true` when the edge joins a node to itself.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}
