//! 2D affine transforms as 3x3 homogeneous matrices.
//!
//! Everything here is pure: constructors return fresh matrices, chaining
//! helpers return new matrices, and the `*_into` variants write into a
//! caller-owned destination for redraw loops that want to reuse a buffer.
//!
//! The element type doubles as the storage switch: [`Mat3<f32>`] is what
//! gets uploaded to the GPU, [`Mat3<f64>`] keeps double precision on the host.

mod mat3;
mod scalar;
mod transform;
mod vec2;

pub use mat3::Mat3;
pub use scalar::Scalar;
pub use transform::Transform2d;
pub use vec2::Vec2;
