//! Numeric weights accepted by the spanning-forest builder.
//!
//! Kruskal's algorithm only needs three things from a weight: a total order
//! to sort by, a zero to start the running cost from, and an addition that
//! reports overflow. [`Weight`] captures exactly that and is implemented for
//! the primitive integers and floats.

use std::cmp::Ordering;
use std::fmt;

/// A numeric edge weight.
///
/// Integer weights order with [`Ord`] and accumulate with `checked_add`.
/// Float weights compare numerically, so `-0.0` and `0.0` tie, and fall back
/// to `total_cmp` otherwise. They must be finite to be admitted and report
/// overflow when the running sum stops being finite.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use arbor_core::Weight;
///
/// assert_eq!(3_i32.total_order(&4), Ordering::Less);
/// assert_eq!(u8::MAX.checked_accumulate(1), None);
/// assert!(!f64::NAN.is_admissible());
/// ```
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq {
    /// The additive identity, used as the cost of an empty forest.
    const ZERO: Self;

    /// Compares two weights under a total order.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Returns `false` for values that cannot take part in a run.
    fn is_admissible(&self) -> bool {
        true
    }

    /// Adds `rhs`, returning `None` when the sum is not representable.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn total_order(&self, other: &Self) -> Ordering {
                    if self == other {
                        Ordering::Equal
                    } else {
                        self.total_cmp(other)
                    }
                }

                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }

                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }
            }
        )+
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
