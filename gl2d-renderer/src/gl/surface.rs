use gl2d_math::Mat3;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlBuffer};

use crate::{error::Error, gl::GL};

/// A canvas and its WebGL2 context.
///
/// Supplies the drawable size the projection matrix is built from.
#[derive(Debug)]
pub struct Surface {
    gl: GL,
    canvas: HtmlCanvasElement,
}

impl Surface {
    /// Looks up a canvas with a CSS selector (e.g. `"canvas"` or `"#c"`)
    /// and acquires its WebGL2 context.
    pub fn create(selector: &str) -> Result<Self, Error> {
        let document = web_sys::window()
            .ok_or(Error::window_not_found())?
            .document()
            .ok_or(Error::document_not_found())?;

        let canvas = document
            .query_selector(selector)
            .map_err(|_| Error::canvas_not_found())?
            .ok_or(Error::canvas_not_found())?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::canvas_not_found())?;

        Self::create_with_canvas(canvas)
    }

    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let gl = canvas
            .get_context("webgl2")
            .map_err(|_| Error::canvas_context_failed())?
            .ok_or(Error::webgl_context_failed())?
            .dyn_into::<GL>()
            .map_err(|_| Error::webgl_context_failed())?;

        let surface = Self { gl, canvas };
        surface.reset_viewport();
        Ok(surface)
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Drawable size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Pixel-to-clipspace projection for the current drawable size.
    pub fn projection(&self) -> Mat3<f32> {
        let (w, h) = self.canvas_size();
        Mat3::projection(w as f32, h as f32)
    }

    /// Maps clip space onto the whole drawable.
    pub fn reset_viewport(&self) {
        let (w, h) = self.canvas_size();
        self.gl.viewport(0, 0, w as i32, h as i32);
    }

    pub fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    /// Creates an `ARRAY_BUFFER` holding `vertices`, left bound.
    pub fn static_vertex_buffer(&self, vertices: &[f32]) -> Result<WebGlBuffer, Error> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(Error::buffer_creation_failed("vertex"))?;

        let data = js_sys::Float32Array::from(vertices);
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        Ok(buffer)
    }
}
