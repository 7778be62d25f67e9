mod backend;
mod diagnostic;
mod program;
mod surface;
#[cfg(test)]
pub(crate) mod testing;
mod uniform;

pub use backend::GlBackend;
pub use diagnostic::{ConsoleSink, DiagnosticSink};
pub use program::*;
pub use surface::Surface;
pub use uniform::MatrixUniform;

pub(crate) type GL = web_sys::WebGl2RenderingContext;
