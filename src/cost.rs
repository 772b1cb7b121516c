// Numeric field accepted by the solvers

use num_traits::{Bounded, NumCast, Signed, ToPrimitive};
use std::fmt::Debug;

/// Scalar type of a cost matrix.
///
/// Implemented for every signed, bounded, totally-ordered-in-practice numeric
/// type, i.e. `f32`, `f64` and the signed integers. Unsigned types are not
/// accepted because reduced costs `c_ij - v_j` become negative.
pub trait Cost: Copy + PartialOrd + Signed + Bounded + NumCast + Debug + Send + Sync {
    /// `false` for NaN and infinities. Integers are always finite.
    fn is_finite_cost(self) -> bool {
        self.to_f64().is_some_and(f64::is_finite)
    }

    /// `+inf` marks a pair that must not be assigned.
    fn is_forbidden(self) -> bool {
        self.to_f64() == Some(f64::INFINITY)
    }

    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> Cost for T where T: Copy + PartialOrd + Signed + Bounded + NumCast + Debug + Send + Sync {}
