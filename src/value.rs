//! Value trait for type-safe encoding with configurable value sizes.
//!
//! Uses the sealed trait pattern to restrict implementations to i8, i16, i32.
//! Every implementor widens losslessly to `i64`, so the shift and the
//! normalized value of any range always fit without overflow.

use std::fmt::Debug;

/// Private module to seal the trait - users cannot implement `Value` for other types
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
}

/// Trait for integers that can be packed by `Encoder`.
///
/// This trait is sealed - it can only be implemented for `i8`, `i16`, and `i32`.
pub trait Value: private::Sealed + Copy + Debug + PartialEq + PartialOrd + Ord + Default {
    /// Width of the type in bits; no range of this type needs more per value
    const BITS: u32;

    /// Widen to i64 for internal calculations
    fn to_i64(self) -> i64;

    /// Narrow from i64, `None` if `v` is outside the type's range
    fn try_from_i64(v: i64) -> Option<Self>;
}

macro_rules! impl_value {
    ($t:ty) => {
        impl Value for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn to_i64(self) -> i64 {
                i64::from(self)
            }

            #[inline]
            fn try_from_i64(v: i64) -> Option<Self> {
                <$t>::try_from(v).ok()
            }
        }
    };
}

impl_value!(i8);
impl_value!(i16);
impl_value!(i32);
