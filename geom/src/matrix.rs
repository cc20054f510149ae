use core::ops::{Add, Sub, Mul};
use super::num::Num32;
use super::vector::{V2, V2f, V3};

/// 3x3 matrix stored row-major, for affine transforms of 2D points
/// in homogeneous coordinates.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Mat3<T: Num32> {
    pub e: [T; 9],
}

pub type Mat3f = Mat3<f32>;

impl<T: Num32> From<[[T; 3]; 3]> for Mat3<T> {
    fn from([[e0, e1, e2], [e3, e4, e5], [e6, e7, e8]]: [[T; 3]; 3]) -> Self {
        Self { e: [e0, e1, e2, e3, e4, e5, e6, e7, e8] }
    }
}

impl<T: Num32> Default for Mat3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Num32> Mat3<T> {
    pub fn identity() -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from([
            [l, o, o],
            [o, l, o],
            [o, o, l],
        ])
    }

    pub fn translate(tx: T, ty: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from([
            [l, o, tx],
            [o, l, ty],
            [o, o, l],
        ])
    }

    pub fn translate_v(by: V2<T>) -> Self {
        Self::translate(by.x, by.y)
    }

    pub fn scale(sx: T, sy: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from([
            [sx, o, o],
            [o, sy, o],
            [o, o, l],
        ])
    }

    pub fn scale_v(by: V2<T>) -> Self {
        Self::scale(by.x, by.y)
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.e[row * 3 + col]
    }

    pub fn row(&self, row: usize) -> V3<T> {
        V3::new(self.at(row, 0), self.at(row, 1), self.at(row, 2))
    }

    /// Applies the transform to `(x, y, 1)` and drops the homogeneous coordinate.
    pub fn transform_point(&self, p: V2<T>) -> V2<T> {
        (self * p.extend(T::ONE)).truncate()
    }

    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut e = self.e;
        for (l, &r) in e.iter_mut().zip(rhs.e.iter()) {
            *l = f(*l, r);
        }
        Self { e }
    }
}

impl Mat3<f32> {
    /// Counter-clockwise rotation in a y-up frame; clockwise on a y-down screen.
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from([
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about `pivot` instead of the origin.
    pub fn rotate_about(radians: f32, pivot: V2f) -> Self {
        Self::translate_v(pivot) * Self::rotate(radians) * Self::translate_v(-pivot)
    }

    pub fn approx_eq(&self, rhs: &Self, epsilon: f32) -> bool {
        self.e.iter().zip(rhs.e.iter()).all(|(&l, &r)| utils::approx_eq(l, r, epsilon))
    }
}

impl<T: Num32> Add for Mat3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

impl<T: Num32> Sub for Mat3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// `(a * b)` applied to a point equals applying `b` first, then `a`.
impl<T: Num32> Mul for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut e = [T::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = T::ZERO;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                e[row * 3 + col] = sum;
            }
        }
        Self { e }
    }
}

impl<T: Num32> Mul<V3<T>> for &Mat3<T> {
    type Output = V3<T>;
    fn mul(self, v: Self::Output) -> Self::Output {
        V3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};
    use utils::EPSILON;

    fn sample() -> Mat3f {
        Mat3::from([
            [1.5, -2.0, 3.0],
            [0.25, 4.0, -1.0],
            [7.0, 0.5, 2.0],
        ])
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        similar_asserts::assert_eq!(Mat3::identity() * m, m);
        similar_asserts::assert_eq!(m * Mat3::identity(), m);

        let mi = Mat3::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(Mat3::identity() * mi, mi);
        assert_eq!(mi * Mat3::identity(), mi);
    }

    #[test]
    fn opposite_translations_cancel() {
        for &(tx, ty) in [(0.0, 0.0), (3.5, -2.0), (-100.25, 0.125)].iter() {
            let m = Mat3f::translate(tx, ty) * Mat3f::translate(-tx, -ty);
            assert!(m.approx_eq(&Mat3f::identity(), EPSILON), "{:?}", m);
        }
    }

    #[test]
    fn translate_and_scale_points() {
        let p = V2f::new(2.0, 3.0);
        assert_eq!(Mat3f::translate(1.0, -1.0).transform_point(p), V2f::new(3.0, 2.0));
        assert_eq!(Mat3f::translate_v(V2f::new(1.0, -1.0)), Mat3f::translate(1.0, -1.0));
        assert_eq!(Mat3f::scale(2.0, 0.5).transform_point(p), V2f::new(4.0, 1.5));
        assert_eq!(Mat3f::scale_v(V2f::new(2.0, 0.5)), Mat3f::scale(2.0, 0.5));
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = Mat3f::rotate(FRAC_PI_2).transform_point(V2f::new(1.0, 0.0));
        assert!(utils::approx_eq(p.x, 0.0, EPSILON) && utils::approx_eq(p.y, 1.0, EPSILON), "{}", p);

        let full = Mat3f::rotate(PI) * Mat3f::rotate(PI);
        assert!(full.approx_eq(&Mat3f::identity(), EPSILON), "{:?}", full);
    }

    #[test]
    fn rotate_about_keeps_pivot() {
        let pivot = V2f::new(5.0, 5.0);
        let m = Mat3f::rotate_about(1.234, pivot);
        let p = m.transform_point(pivot);
        assert!(utils::approx_eq(p.x, 5.0, EPSILON) && utils::approx_eq(p.y, 5.0, EPSILON), "{}", p);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let t = Mat3f::translate(10.0, 0.0);
        let s = Mat3f::scale(2.0, 2.0);
        let p = V2f::new(1.0, 1.0);
        // scale then translate
        assert_eq!((t * s).transform_point(p), V2f::new(12.0, 2.0));
        // translate then scale
        assert_eq!((s * t).transform_point(p), V2f::new(22.0, 2.0));
    }

    #[test]
    fn add_sub_elementwise() {
        let m = sample();
        let i = Mat3::identity();
        let sum = m + i;
        assert_eq!(sum.e[0], 2.5);
        assert_eq!(sum.e[1], -2.0);
        assert_eq!(sum.e[4], 5.0);
        assert_eq!(sum.e[8], 3.0);
        similar_asserts::assert_eq!(sum - i, m);
        assert_eq!(m - m, Mat3::from([[0.0; 3]; 3]));
    }

    #[test]
    fn integer_product() {
        let a = Mat3::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let b = Mat3::from([[9, 8, 7], [6, 5, 4], [3, 2, 1]]);
        assert_eq!(a * b, Mat3::from([[30, 24, 18], [84, 69, 54], [138, 114, 90]]));
    }
}
