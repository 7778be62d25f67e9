//! Shader program setup for WebGL with fail-soft error reporting, plus the
//! glue to feed [`Transform2d`] matrices to a `mat3` uniform.
//!
//! Program setup is written against [`GlBackend`], implemented for both
//! WebGL context types. Every failure is reported once to a
//! [`DiagnosticSink`] and returned as an [`Error`].

mod error;
mod gl;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use gl2d_math::{Mat3, Scalar, Transform2d, Vec2};

pub use crate::{
    error::Error,
    gl::{
        create_program, load_shader, load_shaders, ConsoleSink, DiagnosticSink, GlBackend,
        MatrixUniform, ProgramBuilder, ShaderBatchPolicy, ShaderProgram, ShaderSource,
        ShaderStage, Surface,
    },
};

/// Bundled shaders: a `vec2 a_position` transformed by `mat3 u_matrix`,
/// filled with `vec4 u_color`.
pub const TRANSFORM2D_VERTEX_GLSL: &str = include_str!("../shaders/transform2d.vert");
pub const TRANSFORM2D_FRAGMENT_GLSL: &str = include_str!("../shaders/transform2d.frag");
