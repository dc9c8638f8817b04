use std::{cmp::Ordering, fmt};

/// Primitive numeric types that can be stored as [`Series`](crate::Series) values.
///
/// Values are compared with a total order: integers use [`Ord`] and floats use
/// IEEE 754 `totalOrder`, which places NaN after every number.
pub trait Numeric: num_traits::Num + Copy + PartialOrd + fmt::Display + fmt::Debug {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_numeric_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_numeric_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
