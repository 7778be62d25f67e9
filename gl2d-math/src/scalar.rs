use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element type backing a [`Mat3`](crate::Mat3) or [`Vec2`](crate::Vec2).
///
/// `f32` matches what the GPU consumes through `uniformMatrix3fv`; `f64`
/// keeps full double precision for host-side math. Pick one per program,
/// usually through a type alias, and convert at the boundary with
/// [`Mat3::cast`](crate::Mat3::cast).
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    fn sin_cos(self) -> (Self, Self);
    fn abs(self) -> Self;
    fn to_radians(self) -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                <$t>::sin_cos(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn to_radians(self) -> Self {
                <$t>::to_radians(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
