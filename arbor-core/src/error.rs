//! Error types for the Arbor core library.
//!
//! Defines the error enum shared by the disjoint-set and the spanning-forest
//! builder, its stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned by [`crate::DisjointSet`] and
/// [`crate::SpanningForestBuilder`].
///
/// Every variant describes a contract violation by the caller. None of them
/// are retried internally.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// The requested node count is negative or too large to allocate.
    #[error("node count must be non-negative and small enough to allocate (got {requested})")]
    InvalidSize {
        /// The node count supplied by the caller.
        requested: i128,
    },
    /// A disjoint-set query referenced a node outside `[0, node_count)`.
    #[error("node {node} is out of range for {node_count} nodes")]
    OutOfRange {
        /// The offending node identifier.
        node: usize,
        /// The number of nodes in the partition.
        node_count: usize,
    },
    /// An edge endpoint fell outside `[0, node_count)`.
    #[error("edge {index} references node {node}, but node_count is {node_count}")]
    EdgeOutOfRange {
        /// Position of the edge in the caller's input.
        index: usize,
        /// The offending endpoint.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("edge {index} is a self-loop on node {node}")]
    InvalidEdge {
        /// Position of the edge in the caller's input.
        index: usize,
        /// The node the loop is attached to.
        node: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {index} ({source_node}, {target}) has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the edge in the caller's input.
        index: usize,
        /// The source endpoint as supplied.
        source_node: usize,
        /// The target endpoint as supplied.
        target: usize,
    },
    /// Accumulating the total cost overflowed the weight type.
    #[error("total cost overflowed while adding edge {index}")]
    CostOverflow {
        /// Position, in the caller's input, of the edge whose weight overflowed.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// The requested node count is negative or too large to allocate.
        InvalidSize => InvalidSize { .. } => "FOREST_INVALID_SIZE",
        /// A disjoint-set query referenced a node outside the partition.
        OutOfRange => OutOfRange { .. } => "FOREST_OUT_OF_RANGE",
        /// An edge endpoint fell outside the graph.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "FOREST_EDGE_OUT_OF_RANGE",
        /// An edge joined a node to itself.
        InvalidEdge => InvalidEdge { .. } => "FOREST_INVALID_EDGE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "FOREST_NON_FINITE_WEIGHT",
        /// Accumulating the total cost overflowed the weight type.
        CostOverflow => CostOverflow { .. } => "FOREST_COST_OVERFLOW",
    }
}

impl ForestError {
    /// Returns the input position of the offending edge, when the error is
    /// about a specific edge.
    #[must_use]
    pub const fn edge_index(&self) -> Option<usize> {
        match self {
            Self::EdgeOutOfRange { index, .. }
            | Self::InvalidEdge { index, .. }
            | Self::NonFiniteWeight { index, .. }
            | Self::CostOverflow { index } => Some(*index),
            Self::InvalidSize { .. } | Self::OutOfRange { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
