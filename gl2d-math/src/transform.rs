use crate::{Mat3, Scalar, Vec2};

/// Transform parameters for a single 2D scene.
///
/// Holds what the demo sliders manipulate: a translation in pixels, a
/// rotation in degrees, a per-axis scale and an origin (pivot) offset in
/// the geometry's own pixel space. Each redraw turns the current state into
/// a clip-space matrix with [`matrix`](Self::matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Transform2d<T: Scalar = f32> {
    pub translation: Vec2<T>,
    pub angle_degrees: T,
    pub scale: Vec2<T>,
    pub origin: Vec2<T>,
}

impl<T: Scalar> Default for Transform2d<T> {
    fn default() -> Self {
        Self {
            translation: Vec2::zero(),
            angle_degrees: T::ZERO,
            scale: Vec2::splat(T::ONE),
            origin: Vec2::zero(),
        }
    }
}

impl<T: Scalar> Transform2d<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pivot the geometry rotates and scales around.
    pub fn with_origin(mut self, x: T, y: T) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn set_translation_x(&mut self, x: T) {
        self.translation.x = x;
    }

    pub fn set_translation_y(&mut self, y: T) {
        self.translation.y = y;
    }

    pub fn set_angle_degrees(&mut self, degrees: T) {
        self.angle_degrees = degrees;
    }

    pub fn set_scale_x(&mut self, sx: T) {
        self.scale.x = sx;
    }

    pub fn set_scale_y(&mut self, sy: T) {
        self.scale.y = sy;
    }

    pub fn angle_radians(&self) -> T {
        self.angle_degrees.to_radians()
    }

    /// Clip-space matrix for a drawable surface of `width` x `height` pixels.
    ///
    /// Vertices are moved by `-origin`, scaled, rotated, translated and
    /// finally projected to clip space.
    pub fn matrix(&self, width: T, height: T) -> Mat3<T> {
        let mut dst = Mat3::identity();
        self.matrix_into(width, height, &mut dst);
        dst
    }

    /// Same as [`matrix`](Self::matrix), writing into `dst`.
    pub fn matrix_into(&self, width: T, height: T, dst: &mut Mat3<T>) {
        let mut scratch = Mat3::identity();

        dst.set_projection(width, height);
        dst.translate_into(self.translation.x, self.translation.y, &mut scratch);
        scratch.rotate_into(self.angle_radians(), dst);
        dst.scale_into(self.scale.x, self.scale.y, &mut scratch);
        scratch.translate_into(-self.origin.x, -self.origin.y, dst);
    }
}
