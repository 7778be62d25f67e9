use std::ops::{Index, Mul};

use crate::{Scalar, Vec2};

/// 3x3 homogeneous matrix for 2D transforms.
///
/// Elements are stored column-major, which is the layout `uniformMatrix3fv`
/// expects with `transpose = false`. The translation lives in `data[6]` and
/// `data[7]`.
///
/// Composition follows the column-vector convention: `a.multiply(&b)` yields
/// a matrix that applies `b` first, then `a`. The chaining helpers
/// ([`project`](Self::project), [`translate`](Self::translate),
/// [`rotate`](Self::rotate), [`scale`](Self::scale)) all post-multiply, so the
/// last call in a chain is the first transform a vertex sees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T: Scalar = f32> {
    pub data: [T; 9],
}

impl<T: Scalar> Default for Mat3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Mat3<T> {
    /// Builds a matrix from nine column-major elements.
    pub const fn from_cols_array(data: [T; 9]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        let mut m = Self::zeroed();
        m.set_identity();
        m
    }

    /// Projection from pixel space (origin top-left, y down) to clip space.
    ///
    /// Maps `(0, 0)` to `(-1, 1)` and `(width, height)` to `(1, -1)`.
    pub fn projection(width: T, height: T) -> Self {
        let mut m = Self::zeroed();
        m.set_projection(width, height);
        m
    }

    pub fn translation(tx: T, ty: T) -> Self {
        let mut m = Self::zeroed();
        m.set_translation(tx, ty);
        m
    }

    /// Counter-clockwise rotation (in a y-up frame); `(1, 0)` maps to
    /// `(cos, sin)`. On a y-down pixel canvas positive angles turn clockwise.
    pub fn rotation(angle_radians: T) -> Self {
        let mut m = Self::zeroed();
        m.set_rotation(angle_radians);
        m
    }

    pub fn scaling(sx: T, sy: T) -> Self {
        let mut m = Self::zeroed();
        m.set_scaling(sx, sy);
        m
    }

    pub fn set_identity(&mut self) {
        let (o, l) = (T::ZERO, T::ONE);
        self.data = [l, o, o, o, l, o, o, o, l];
    }

    pub fn set_projection(&mut self, width: T, height: T) {
        let (o, l) = (T::ZERO, T::ONE);
        self.data = [T::TWO / width, o, o, o, -T::TWO / height, o, -l, l, l];
    }

    pub fn set_translation(&mut self, tx: T, ty: T) {
        let (o, l) = (T::ZERO, T::ONE);
        self.data = [l, o, o, o, l, o, tx, ty, l];
    }

    pub fn set_rotation(&mut self, angle_radians: T) {
        let (s, c) = angle_radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        self.data = [c, s, o, -s, c, o, o, o, l];
    }

    pub fn set_scaling(&mut self, sx: T, sy: T) {
        let (o, l) = (T::ZERO, T::ONE);
        self.data = [sx, o, o, o, sy, o, o, o, l];
    }

    /// Returns `self * rhs`: applies `rhs`, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut dst = Self::zeroed();
        self.multiply_into(rhs, &mut dst);
        dst
    }

    /// Writes `self * rhs` into `dst`.
    pub fn multiply_into(&self, rhs: &Self, dst: &mut Self) {
        let a = &self.data;
        let b = &rhs.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);
        let (b00, b01, b02) = (b[0], b[1], b[2]);
        let (b10, b11, b12) = (b[3], b[4], b[5]);
        let (b20, b21, b22) = (b[6], b[7], b[8]);

        dst.data = [
            b00 * a00 + b01 * a10 + b02 * a20,
            b00 * a01 + b01 * a11 + b02 * a21,
            b00 * a02 + b01 * a12 + b02 * a22,
            b10 * a00 + b11 * a10 + b12 * a20,
            b10 * a01 + b11 * a11 + b12 * a21,
            b10 * a02 + b11 * a12 + b12 * a22,
            b20 * a00 + b21 * a10 + b22 * a20,
            b20 * a01 + b21 * a11 + b22 * a21,
            b20 * a02 + b21 * a12 + b22 * a22,
        ];
    }

    pub fn project(&self, width: T, height: T) -> Self {
        self.multiply(&Self::projection(width, height))
    }

    pub fn project_into(&self, width: T, height: T, dst: &mut Self) {
        self.multiply_into(&Self::projection(width, height), dst);
    }

    pub fn translate(&self, tx: T, ty: T) -> Self {
        self.multiply(&Self::translation(tx, ty))
    }

    pub fn translate_into(&self, tx: T, ty: T, dst: &mut Self) {
        self.multiply_into(&Self::translation(tx, ty), dst);
    }

    pub fn rotate(&self, angle_radians: T) -> Self {
        self.multiply(&Self::rotation(angle_radians))
    }

    pub fn rotate_into(&self, angle_radians: T, dst: &mut Self) {
        self.multiply_into(&Self::rotation(angle_radians), dst);
    }

    pub fn scale(&self, sx: T, sy: T) -> Self {
        self.multiply(&Self::scaling(sx, sy))
    }

    pub fn scale_into(&self, sx: T, sy: T, dst: &mut Self) {
        self.multiply_into(&Self::scaling(sx, sy), dst);
    }

    /// Applies the matrix to a homogeneous point `[x, y, w]`.
    pub fn transform_homogeneous(&self, p: [T; 3]) -> [T; 3] {
        let m = &self.data;
        let [x, y, w] = p;
        [
            m[0] * x + m[3] * y + m[6] * w,
            m[1] * x + m[4] * y + m[7] * w,
            m[2] * x + m[5] * y + m[8] * w,
        ]
    }

    /// Applies the matrix to the point `(x, y, 1)` and drops the third
    /// component. No perspective divide; the primitives here are affine.
    pub fn transform_point(&self, p: Vec2<T>) -> Vec2<T> {
        let [x, y, _] = self.transform_homogeneous([p.x, p.y, T::ONE]);
        Vec2::new(x, y)
    }

    /// Element-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }

    /// Converts to another element type.
    pub fn cast<U: Scalar>(&self) -> Mat3<U> {
        Mat3 { data: self.data.map(|v| U::from_f64(v.to_f64())) }
    }

    pub fn to_cols_array(&self) -> [T; 9] {
        self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn zeroed() -> Self {
        Self { data: [T::ZERO; 9] }
    }
}

impl<T: Scalar> Index<usize> for Mat3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Mat3<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<Vec2<T>> for Mat3<T> {
    type Output = Vec2<T>;

    fn mul(self, rhs: Vec2<T>) -> Self::Output {
        self.transform_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-12;

    fn sample() -> Mat3<f64> {
        Mat3::<f64>::identity()
            .project(640.0, 480.0)
            .translate(12.5, -3.0)
            .rotate(0.7)
            .scale(1.5, 0.25)
    }

    #[test]
    fn test_identity_is_two_sided_unit() {
        let m = sample();
        let id = Mat3::<f64>::identity();

        assert_eq!(id.multiply(&m), m);
        assert_eq!(m.multiply(&id), m);
    }

    #[test]
    fn test_translate_moves_origin() {
        let m = Mat3::<f64>::identity().translate(30.0, -12.0);

        assert_eq!(m.transform_homogeneous([0.0, 0.0, 1.0]), [30.0, -12.0, 1.0]);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let m = Mat3::<f64>::identity().rotate(FRAC_PI_2);
        let p = m.transform_point(Vec2::new(1.0, 0.0));

        assert!(p.approx_eq(&Vec2::new(0.0, 1.0), EPS), "got {p:?}");
    }

    #[test]
    fn test_rotation_layout() {
        let (s, c) = 0.3_f64.sin_cos();
        let m = Mat3::rotation(0.3_f64);

        assert_eq!(m.data, [c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scale_axes() {
        let m = Mat3::<f64>::identity().scale(2.0, 3.0);

        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_projection_corners() {
        let (w, h) = (800.0, 600.0);
        let m = Mat3::<f64>::projection(w, h);

        assert!(m.transform_point(Vec2::new(0.0, 0.0)).approx_eq(&Vec2::new(-1.0, 1.0), EPS));
        assert!(m.transform_point(Vec2::new(w, h)).approx_eq(&Vec2::new(1.0, -1.0), EPS));
        assert!(m.transform_point(Vec2::new(w / 2.0, h / 2.0)).approx_eq(&Vec2::zero(), EPS));
    }

    #[test]
    fn test_projection_coefficients() {
        let m = Mat3::<f32>::projection(800.0, 800.0);

        assert_eq!(
            m.data,
            [2.0 / 800.0, 0.0, 0.0, 0.0, -2.0 / 800.0, 0.0, -1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_multiply_is_associative() {
        let a = Mat3::<f64>::rotation(PI / 5.0).translate(4.0, 9.0);
        let b = Mat3::<f64>::scaling(0.5, 3.0).rotate(-1.1);
        let c = Mat3::<f64>::projection(300.0, 150.0).translate(-7.0, 2.5);

        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));

        assert!(left.approx_eq(&right, EPS), "{left:?} != {right:?}");
    }

    #[test]
    fn test_multiply_applies_rhs_first() {
        // translate then scale: the scale must not affect the translation
        let t = Mat3::<f64>::translation(10.0, 20.0);
        let s = Mat3::<f64>::scaling(2.0, 2.0);

        let p = t.multiply(&s).transform_point(Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(12.0, 22.0));

        let p = s.multiply(&t).transform_point(Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(22.0, 42.0));
    }

    #[test]
    fn test_helpers_post_multiply() {
        let m = Mat3::<f64>::scaling(2.0, 2.0);

        assert_eq!(m.translate(1.0, 2.0), m.multiply(&Mat3::translation(1.0, 2.0)));
        assert_eq!(m.rotate(0.4), m.multiply(&Mat3::rotation(0.4)));
        assert_eq!(m.scale(3.0, 4.0), m.multiply(&Mat3::scaling(3.0, 4.0)));
        assert_eq!(m.project(10.0, 20.0), m.multiply(&Mat3::projection(10.0, 20.0)));
    }

    #[test]
    fn test_into_variants_match_allocating() {
        let m = sample();
        let mut dst = Mat3::<f64>::identity();

        m.translate_into(3.0, 4.0, &mut dst);
        assert_eq!(dst, m.translate(3.0, 4.0));

        m.rotate_into(1.2, &mut dst);
        assert_eq!(dst, m.rotate(1.2));

        m.scale_into(0.5, 2.0, &mut dst);
        assert_eq!(dst, m.scale(0.5, 2.0));

        m.project_into(64.0, 32.0, &mut dst);
        assert_eq!(dst, m.project(64.0, 32.0));
    }

    #[test]
    fn test_inputs_untouched() {
        let a = sample();
        let before = a;
        let _ = a.rotate(1.0).scale(2.0, 2.0);

        assert_eq!(a, before);
    }

    #[test]
    fn test_affine_composite_keeps_last_row() {
        let m = sample();

        assert!((m[2]).abs() < EPS);
        assert!((m[5]).abs() < EPS);
        assert!((m[8] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_nan_propagates() {
        let m = Mat3::<f64>::identity().translate(f64::NAN, 0.0);

        assert!(m[6].is_nan());
        assert!(!m[0].is_nan());
        assert!(!m[4].is_nan());
    }

    #[test]
    fn test_cast_to_f32() {
        let m = Mat3::<f64>::projection(512.0, 256.0).cast::<f32>();

        assert_eq!(m.as_slice(), Mat3::<f32>::projection(512.0, 256.0).as_slice());
    }

    #[test]
    fn test_mul_operators() {
        let a = Mat3::<f64>::translation(1.0, 1.0);
        let b = Mat3::<f64>::scaling(4.0, 4.0);

        assert_eq!(a * b, a.multiply(&b));
        assert_eq!(a * Vec2::new(2.0, 3.0), Vec2::new(3.0, 4.0));
    }
}
