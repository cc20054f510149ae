pub use core::{
    fmt::Debug,
    ops::{
        Add, AddAssign,
        Sub, SubAssign,
        Mul, MulAssign,
        Div, DivAssign,
        Neg,
    },
};

pub trait Num32:
    Sized + Copy + Clone
    + Send + Sync
    + Debug
    + PartialEq + PartialOrd
    + Add<Output = Self> + AddAssign
    + Sub<Output = Self> + SubAssign
    + Mul<Output = Self> + MulAssign
    + Div<Output = Self> + DivAssign
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

impl Num32 for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl Num32 for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}
