use std::fmt::Debug;

use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlRenderingContext, WebGlShader};

use crate::gl::ShaderStage;

/// The slice of a GL context that shader and program setup needs.
///
/// Handles are owned by the backend context; whoever holds a handle is
/// responsible for passing it back to the matching `delete_*` call.
pub trait GlBackend {
    type Shader: Debug;
    type Program: Debug;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn bind_attrib_location(&self, program: &Self::Program, index: u32, name: &str);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<&Self::Program>);
}

macro_rules! impl_webgl_backend {
    ($ctx:ty) => {
        impl GlBackend for $ctx {
            type Shader = WebGlShader;
            type Program = WebGlProgram;

            fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
                <$ctx>::create_shader(self, stage.into())
            }

            fn shader_source(&self, shader: &WebGlShader, source: &str) {
                <$ctx>::shader_source(self, shader, source);
            }

            fn compile_shader(&self, shader: &WebGlShader) {
                <$ctx>::compile_shader(self, shader);
            }

            fn shader_compiled(&self, shader: &WebGlShader) -> bool {
                <$ctx>::get_shader_parameter(self, shader, <$ctx>::COMPILE_STATUS)
                    .as_bool()
                    .unwrap_or(false)
            }

            fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
                <$ctx>::get_shader_info_log(self, shader)
            }

            fn delete_shader(&self, shader: WebGlShader) {
                <$ctx>::delete_shader(self, Some(&shader));
            }

            fn create_program(&self) -> Option<WebGlProgram> {
                <$ctx>::create_program(self)
            }

            fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
                <$ctx>::attach_shader(self, program, shader);
            }

            fn bind_attrib_location(&self, program: &WebGlProgram, index: u32, name: &str) {
                <$ctx>::bind_attrib_location(self, program, index, name);
            }

            fn link_program(&self, program: &WebGlProgram) {
                <$ctx>::link_program(self, program);
            }

            fn program_linked(&self, program: &WebGlProgram) -> bool {
                <$ctx>::get_program_parameter(self, program, <$ctx>::LINK_STATUS)
                    .as_bool()
                    .unwrap_or(false)
            }

            fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
                <$ctx>::get_program_info_log(self, program)
            }

            fn delete_program(&self, program: WebGlProgram) {
                <$ctx>::delete_program(self, Some(&program));
            }

            fn use_program(&self, program: Option<&WebGlProgram>) {
                <$ctx>::use_program(self, program);
            }
        }
    };
}

impl_webgl_backend!(WebGl2RenderingContext);
impl_webgl_backend!(WebGlRenderingContext);
