use gl2d_math::Mat3;
use web_sys::WebGlUniformLocation;

use crate::{
    error::Error,
    gl::{ShaderProgram, GL},
};

/// A `mat3` uniform, looked up once after linking and written every redraw.
#[derive(Debug)]
pub struct MatrixUniform {
    location: WebGlUniformLocation,
}

impl MatrixUniform {
    pub fn lookup(gl: &GL, shader: &ShaderProgram<GL>, name: &str) -> Result<Self, Error> {
        let location = gl
            .get_uniform_location(shader.program(), name)
            .ok_or(Error::uniform_location_failed(name))?;

        Ok(Self { location })
    }

    /// Uploads `matrix` as-is; its column-major layout needs no transpose.
    pub fn upload(&self, gl: &GL, matrix: &Mat3<f32>) {
        gl.uniform_matrix3fv_with_f32_array(Some(&self.location), false, matrix.as_slice());
    }
}
