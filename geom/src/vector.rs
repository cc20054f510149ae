use core::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, Div,
    Neg,
};
use std::fmt;
pub use crate::num::Num32;

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct V2<T: Num32> {
    pub x: T,
    pub y: T,
}

pub type V2i = V2<i32>;
pub type V2f = V2<f32>;

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct V3<T: Num32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type V3i = V3<i32>;
pub type V3f = V3<f32>;

#[macro_export]
macro_rules! v2 {
    ($x:expr, $y:expr $(,)?) => {
        $crate::vector::V2 { x: $x, y: $y }
    };
}

#[macro_export]
macro_rules! v3 {
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::vector::V3 { x: $x, y: $y, z: $z }
    };
}

/// Component-wise operators shared by both vector sizes.
macro_rules! componentwise_ops {
    ($V:ident { $($c:ident),+ }) => {
        impl<T: Num32> $V<T> {
            pub fn diag(val: T) -> Self {
                Self { $($c: val),+ }
            }

            pub fn zero() -> Self {
                Self::diag(T::ZERO)
            }

            pub fn map(self, f: impl Fn(T) -> T) -> Self {
                Self { $($c: f(self.$c)),+ }
            }
        }

        impl<T: Num32> Add for $V<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($c: self.$c + rhs.$c),+ }
            }
        }

        impl<T: Num32> AddAssign for $V<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Num32> Sub for $V<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($c: self.$c - rhs.$c),+ }
            }
        }

        impl<T: Num32> SubAssign for $V<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Num32> Mul for $V<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($c: self.$c * rhs.$c),+ }
            }
        }

        impl<T: Num32> Mul<T> for $V<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($c: self.$c * rhs),+ }
            }
        }

        impl Mul<$V<i32>> for i32 {
            type Output = $V<i32>;
            fn mul(self, rhs: Self::Output) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$V<f32>> for f32 {
            type Output = $V<f32>;
            fn mul(self, rhs: Self::Output) -> Self::Output {
                rhs * self
            }
        }

        impl<T: Num32> Div for $V<T> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self::Output {
                Self { $($c: self.$c / rhs.$c),+ }
            }
        }

        impl<T: Num32> Div<T> for $V<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self::Output {
                Self { $($c: self.$c / rhs),+ }
            }
        }

        impl<T: Num32> Neg for $V<T> {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self { $($c: -self.$c),+ }
            }
        }

        impl $V<f32> {
            /// Euclidean length.
            pub fn magnitude(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Divides by `magnitude()`. A zero vector yields NaN components.
            pub fn normalize(self) -> Self {
                self / self.magnitude()
            }

            pub fn round(self) -> Self {
                self.map(f32::round)
            }

            pub fn floor(self) -> Self {
                self.map(f32::floor)
            }
        }
    };
}

componentwise_ops!(V2 { x, y });
componentwise_ops!(V3 { x, y, z });

impl<T: Num32> V2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// A 2D cross product has no vector result; this is always the zero vector.
    /// Use [`V2::perp_dot`] for the scalar z of the embedded 3D cross product.
    pub fn cross(self, _rhs: Self) -> Self {
        Self::zero()
    }

    pub fn perp_dot(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn extend(self, z: T) -> V3<T> {
        V3 { x: self.x, y: self.y, z }
    }
}

impl<T: Num32> V3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn truncate(self) -> V2<T> {
        V2 { x: self.x, y: self.y }
    }
}

impl From<V2i> for V2f {
    fn from(v: V2i) -> Self {
        Self { x: v.x as f32, y: v.y as f32 }
    }
}

impl From<V2f> for V2i {
    fn from(v: V2f) -> Self {
        Self { x: v.x as i32, y: v.y as i32 }
    }
}

impl<T: Num32> From<(T, T)> for V2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Num32> From<V2<T>> for (T, T) {
    fn from(v: V2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Num32> From<(T, T, T)> for V3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

pub fn dot<T: Num32>(lhs: V2<T>, rhs: V2<T>) -> T {
    lhs.dot(rhs)
}

pub fn distance_sq<T: Num32>(lhs: V2<T>, rhs: V2<T>) -> T {
    let distance_vector = rhs - lhs;
    dot(distance_vector, distance_vector)
}

impl fmt::Display for V2f {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V2({:.2}, {:.2})", self.x, self.y)
    }
}

impl fmt::Display for V3f {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V3({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::{approx_eq, EPSILON};

    fn v2_approx_eq(lhs: V2f, rhs: V2f) -> bool {
        approx_eq(lhs.x, rhs.x, EPSILON) && approx_eq(lhs.y, rhs.y, EPSILON)
    }

    fn v3_approx_eq(lhs: V3f, rhs: V3f) -> bool {
        v2_approx_eq(lhs.truncate(), rhs.truncate()) && approx_eq(lhs.z, rhs.z, EPSILON)
    }

    const V2_SAMPLES: [(f32, f32); 5] = [
        (0.0, 0.0),
        (1.0, -2.5),
        (-3.25, 7.0),
        (12.5, 1e-3),
        (0.1, 0.2),
    ];

    const V3_SAMPLES: [(f32, f32, f32); 4] = [
        (0.0, 0.0, 0.0),
        (1.0, 2.0, 3.0),
        (-4.5, 0.25, 9.0),
        (0.3, -0.7, 0.01),
    ];

    #[test]
    fn add_sub_are_inverse() {
        for &a in V2_SAMPLES.iter() {
            for &b in V2_SAMPLES.iter() {
                let (a, b) = (V2f::from(a), V2f::from(b));
                assert!(v2_approx_eq((a + b) - b, a), "{} {}", a, b);
            }
        }
        for &a in V3_SAMPLES.iter() {
            for &b in V3_SAMPLES.iter() {
                let (a, b) = (V3f::from(a), V3f::from(b));
                assert!(v3_approx_eq((a + b) - b, a), "{} {}", a, b);
            }
        }
    }

    #[test]
    fn componentwise_mul_div() {
        let a: V2f = v2!(2.0, -3.0);
        let b: V2f = v2!(4.0, 0.5);
        assert_eq!(a * b, v2!(8.0, -1.5));
        assert_eq!(a / b, v2!(0.5, -6.0));
        assert_eq!(a * 2.0, v2!(4.0, -6.0));
        assert_eq!(2.0 * a, v2!(4.0, -6.0));

        let c = v3!(1, 2, 3);
        assert_eq!(c * v3!(2, 2, 2), v3!(2, 4, 6));
        assert_eq!(v3!(9, 8, 6) / v3!(3, 2, 3), v3!(3, 4, 2));
    }

    #[test]
    fn dot_products() {
        assert_eq!(v2!(1, 2).dot(v2!(3, 4)), 11);
        assert_eq!(dot(V2f::new(1.0, 0.0), V2f::new(0.0, 1.0)), 0.0);
        assert_eq!(v3!(1, 2, 3).dot(v3!(4, -5, 6)), 12);
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_eq!(V2f::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(V3f::new(2.0, 3.0, 6.0).magnitude(), 7.0);

        for &s in V2_SAMPLES.iter().skip(1) {
            let n = V2f::from(s).normalize();
            assert!(approx_eq(n.magnitude(), 1.0, EPSILON), "{}", n);
        }
        for &s in V3_SAMPLES.iter().skip(1) {
            let n = V3f::from(s).normalize();
            assert!(approx_eq(n.magnitude(), 1.0, EPSILON), "{}", n);
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = V2f::zero().normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn v2_cross_is_always_zero() {
        for &a in V2_SAMPLES.iter() {
            for &b in V2_SAMPLES.iter() {
                assert_eq!(V2f::from(a).cross(V2f::from(b)), v2!(0.0, 0.0));
            }
        }
    }

    #[test]
    fn v3_cross_is_right_handed() {
        let x = v3!(1, 0, 0);
        let y = v3!(0, 1, 0);
        let z = v3!(0, 0, 1);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);

        let a = v3!(1, 2, 3);
        let b = v3!(4, 5, 6);
        assert_eq!(a.cross(b), v3!(-3, 6, -3));
        assert_eq!(a.cross(b).dot(a), 0);
        assert_eq!(a.cross(b).dot(b), 0);
    }

    #[test]
    fn perp_dot_is_signed_area() {
        assert_eq!(v2!(1, 0).perp_dot(v2!(0, 1)), 1);
        assert_eq!(v2!(0, 1).perp_dot(v2!(1, 0)), -1);
    }
}
