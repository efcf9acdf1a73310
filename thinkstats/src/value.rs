//! Numeric keys for frequency and probability tables.

use std::fmt::{Debug, Display};

/// A discrete numeric value usable as a table key.
///
/// Keys are totally ordered, so every table iterates in ascending key order.
pub trait Value: Copy + Ord + Debug + Display {
    fn to_f64(self) -> f64;
}

macro_rules! impl_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_value!(i8, i16, i32, i64, u8, u16, u32, u64);
