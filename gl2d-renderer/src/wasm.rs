use gl2d_math::Transform2d;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use web_sys::{WebGl2RenderingContext, WebGlProgram};

use crate::gl::ProgramBuilder;

/// JavaScript wrapper for a scene's transform state
#[wasm_bindgen(js_name = "Transform2d")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Transform2dJs {
    inner: Transform2d<f32>,
}

#[wasm_bindgen(js_class = "Transform2d")]
impl Transform2dJs {
    /// Identity transform: no translation, no rotation, unit scale
    #[wasm_bindgen(constructor)]
    pub fn new() -> Transform2dJs {
        Transform2dJs::default()
    }

    /// Builds a transform from a plain object, e.g.
    /// `{ translation: { x: 10, y: 20 }, angleDegrees: 45 }`.
    /// Missing fields keep their defaults.
    #[wasm_bindgen(js_name = "fromObject")]
    pub fn from_object(value: JsValue) -> Result<Transform2dJs, JsValue> {
        from_value::<Transform2d<f32>>(value)
            .map(|inner| Transform2dJs { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "setTranslation")]
    pub fn set_translation(&mut self, x: f32, y: f32) {
        self.inner.set_translation_x(x);
        self.inner.set_translation_y(y);
    }

    #[wasm_bindgen(js_name = "setAngleDegrees")]
    pub fn set_angle_degrees(&mut self, degrees: f32) {
        self.inner.set_angle_degrees(degrees);
    }

    #[wasm_bindgen(js_name = "setScale")]
    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.inner.set_scale_x(sx);
        self.inner.set_scale_y(sy);
    }

    #[wasm_bindgen(js_name = "setOrigin")]
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.inner = self.inner.with_origin(x, y);
    }

    /// Column-major clip-space matrix, ready for `uniformMatrix3fv`
    #[wasm_bindgen]
    pub fn matrix(&self, width: f32, height: f32) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.inner.matrix(width, height).as_slice())
    }

    /// Writes the matrix into an existing array of at least 9 elements
    #[wasm_bindgen(js_name = "writeMatrix")]
    pub fn write_matrix(&self, width: f32, height: f32, dst: &mut [f32]) -> Result<(), JsValue> {
        if dst.len() < 9 {
            return Err(JsValue::from_str("writeMatrix needs room for 9 elements"));
        }

        let m = self.inner.matrix(width, height);
        dst[..9].copy_from_slice(m.as_slice());
        Ok(())
    }
}

/// Compiles and links a vertex/fragment pair, binding `attribs` to their
/// positional locations. Failures are logged to the console and rethrown.
#[wasm_bindgen(js_name = "createProgram")]
pub fn create_program(
    gl: &WebGl2RenderingContext,
    vertex_source: &str,
    fragment_source: &str,
    attribs: Vec<String>,
) -> Result<WebGlProgram, JsValue> {
    let builder = ProgramBuilder::new(gl)
        .vertex(vertex_source)
        .fragment(fragment_source);

    attribs
        .iter()
        .fold(builder, |b, name| b.attrib(name))
        .build()
        .map(|program| program.into_program(gl))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
