use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Identity of a node within a [`Graph`](crate::Graph).
///
/// Any hashable, cloneable value with a display form qualifies. The display
/// form is used in error messages and to reject blank identities.
pub trait NodeKey: Eq + Hash + Clone + fmt::Display {}

impl<T> NodeKey for T where T: Eq + Hash + Clone + fmt::Display {}

/// Numeric edge weight usable by the shortest path search.
///
/// The search only needs addition, a zero, and a total order for the
/// frontier. Floating point weights are ordered with `total_cmp`, so a stray
/// NaN sorts after every finite cost instead of corrupting the heap.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    /// Additive identity; the cost of the empty path.
    const ZERO: Self;

    /// Total ordering used by the search frontier.
    fn order(&self, other: &Self) -> Ordering;

    /// Sum of two costs, or `None` when it cannot be represented.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Lossy conversion used when aggregating statistics.
    fn as_f64(self) -> f64;
}

macro_rules! float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                // Float sums saturate to infinity, which still orders correctly.
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn as_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

float_weight!(f32, f64);
integer_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_order_places_nan_last() {
        assert_eq!(1.0_f64.order(&f64::NAN), Ordering::Less);
        assert_eq!(f64::INFINITY.order(&2.0), Ordering::Greater);
    }

    #[test]
    fn integer_order_matches_ord() {
        assert_eq!(3_u32.order(&7), Ordering::Less);
        assert_eq!(<i64 as Weight>::ZERO, 0);
    }

    #[test]
    fn integer_checked_add_detects_overflow() {
        assert_eq!(Weight::checked_add(200_u8, 55), Some(255));
        assert_eq!(Weight::checked_add(200_u8, 100), None);
        assert_eq!(Weight::checked_add(u32::MAX - 1, 5), None);
    }

    #[test]
    fn float_checked_add_always_succeeds() {
        assert_eq!(Weight::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
    }
}
