//! Floating-point element types accepted by the kernels.

use rand::distr::uniform::SampleUniform;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

/// Element type of every sequence handled by the kernels.
///
/// Implemented for `f32` and `f64` only.
pub trait Element:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + SampleUniform
    + Send
    + Sync
    + 'static
{
    /// Identity of the inner product.
    const ZERO: Self;
    /// Identity of the minimum: the largest finite value.
    const MAX: Self;
    /// Relative error allowed between two inner-product kernels.
    const DOT_TOLERANCE: f64;
    /// Precision tag used in benchmark reports.
    const PRECISION: &'static str;

    fn from_f64(v: f64) -> Self;

    fn to_f64(self) -> f64;

    /// `b` if `b < a`, otherwise `a`.
    #[inline(always)]
    fn min_of(a: Self, b: Self) -> Self {
        if b < a {
            b
        } else {
            a
        }
    }
}

macro_rules! impl_element {
    ($t:ty, $tol:expr, $tag:literal) => {
        impl Element for $t {
            const ZERO: Self = 0.0;
            const MAX: Self = <$t>::MAX;
            const DOT_TOLERANCE: f64 = $tol;
            const PRECISION: &'static str = $tag;

            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_element!(f32, 1e-4, "float");
impl_element!(f64, 1e-12, "double");

/// Element type selected at build time (`f32` feature, otherwise `f64`).
#[cfg(feature = "f32")]
pub type Floating = f32;

#[cfg(not(feature = "f32"))]
pub type Floating = f64;
