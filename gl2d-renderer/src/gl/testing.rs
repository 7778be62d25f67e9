//! In-memory [`GlBackend`] that records every call, for exercising program
//! setup without a browser.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use crate::gl::{GlBackend, ShaderStage};

pub(crate) const VERTEX_OK: &str = "#version 300 es\n\
in vec2 a_position;\n\
uniform mat3 u_matrix;\n\
void main() {\n\
  gl_Position = vec4((u_matrix * vec3(a_position, 1)).xy, 0, 1);\n\
}";

pub(crate) const VERTEX_BROKEN: &str = "#version 300 es\n#error broken\nvoid main() {}";

pub(crate) const FRAGMENT_OK: &str = "#version 300 es\n\
precision highp float;\n\
out vec4 outColor;\n\
void main() {\n\
  outColor = vec4(1, 0, 0.5, 1);\n\
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeShader(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeProgram(pub u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct GlStats {
    pub shaders_created: usize,
    pub shaders_deleted: usize,
    pub programs_created: usize,
    pub programs_deleted: usize,
}

#[derive(Debug)]
struct ShaderState {
    stage: ShaderStage,
    source: String,
    compiled: bool,
}

/// Compiles any source without an `#error` directive; links when every
/// attached unit compiled and both stages are present.
///
/// Deleting a handle that is not live panics.
#[derive(Debug, Default)]
pub(crate) struct RecordingGl {
    pub fail_shader_creation: Cell<bool>,
    pub fail_program_creation: Cell<bool>,
    next_id: Cell<u32>,
    stats: Cell<GlStats>,
    shaders: RefCell<HashMap<u32, ShaderState>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    bound_attribs: RefCell<HashMap<u32, Vec<(u32, String)>>>,
    linked: RefCell<HashMap<u32, bool>>,
    live_shaders: RefCell<HashSet<u32>>,
    live_programs: RefCell<HashSet<u32>>,
    current_program: Cell<Option<u32>>,
}

impl RecordingGl {
    pub fn stats(&self) -> GlStats {
        self.stats.get()
    }

    pub fn attached_count(&self, program: &FakeProgram) -> usize {
        self.attached.borrow().get(&program.0).map_or(0, Vec::len)
    }

    pub fn bound_attribs(&self, program: &FakeProgram) -> Vec<(u32, String)> {
        self.bound_attribs.borrow().get(&program.0).cloned().unwrap_or_default()
    }

    /// Shader and program handles created but not yet deleted.
    pub fn live_handles(&self) -> usize {
        self.live_shaders.borrow().len() + self.live_programs.borrow().len()
    }

    pub fn current_program(&self) -> Option<u32> {
        self.current_program.get()
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn update_stats(&self, f: impl FnOnce(&mut GlStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    fn link_log(&self, program: u32) -> Option<String> {
        let attached = self.attached.borrow();
        let shaders = self.shaders.borrow();
        let units: Vec<&ShaderState> = attached
            .get(&program)
            .map(|ids| ids.iter().filter_map(|id| shaders.get(id)).collect())
            .unwrap_or_default();

        if units.iter().any(|s| !s.compiled) {
            return Some("One or more attached shaders not successfully compiled".to_string());
        }

        for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
            if !units.iter().any(|s| s.stage == stage) {
                return Some(format!("Missing {stage} shader"));
            }
        }

        None
    }
}

impl GlBackend for RecordingGl {
    type Shader = FakeShader;
    type Program = FakeProgram;

    fn create_shader(&self, stage: ShaderStage) -> Option<FakeShader> {
        if self.fail_shader_creation.get() {
            return None;
        }

        let id = self.next_id();
        self.shaders
            .borrow_mut()
            .insert(id, ShaderState { stage, source: String::new(), compiled: false });
        self.live_shaders.borrow_mut().insert(id);
        self.update_stats(|s| s.shaders_created += 1);
        Some(FakeShader(id))
    }

    fn shader_source(&self, shader: &FakeShader, source: &str) {
        if let Some(state) = self.shaders.borrow_mut().get_mut(&shader.0) {
            state.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: &FakeShader) {
        if let Some(state) = self.shaders.borrow_mut().get_mut(&shader.0) {
            state.compiled = !state.source.contains("#error");
        }
    }

    fn shader_compiled(&self, shader: &FakeShader) -> bool {
        self.shaders.borrow().get(&shader.0).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: &FakeShader) -> Option<String> {
        let shaders = self.shaders.borrow();
        let state = shaders.get(&shader.0)?;
        let line = state.source.lines().position(|l| l.contains("#error"))?;

        Some(format!("ERROR: 0:{}: '#error' : broken", line + 1))
    }

    fn delete_shader(&self, shader: FakeShader) {
        // attached units survive until their program is gone, as in GL
        let live = self.live_shaders.borrow_mut().remove(&shader.0);
        assert!(live, "delete_shader on unknown or deleted {shader:?}");
        self.update_stats(|s| s.shaders_deleted += 1);
    }

    fn create_program(&self) -> Option<FakeProgram> {
        if self.fail_program_creation.get() {
            return None;
        }

        let id = self.next_id();
        self.live_programs.borrow_mut().insert(id);
        self.update_stats(|s| s.programs_created += 1);
        Some(FakeProgram(id))
    }

    fn attach_shader(&self, program: &FakeProgram, shader: &FakeShader) {
        self.attached.borrow_mut().entry(program.0).or_default().push(shader.0);
    }

    fn bind_attrib_location(&self, program: &FakeProgram, index: u32, name: &str) {
        self.bound_attribs
            .borrow_mut()
            .entry(program.0)
            .or_default()
            .push((index, name.to_string()));
    }

    fn link_program(&self, program: &FakeProgram) {
        let ok = self.link_log(program.0).is_none();
        self.linked.borrow_mut().insert(program.0, ok);
    }

    fn program_linked(&self, program: &FakeProgram) -> bool {
        self.linked.borrow().get(&program.0).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: &FakeProgram) -> Option<String> {
        self.link_log(program.0)
    }

    fn delete_program(&self, program: FakeProgram) {
        let live = self.live_programs.borrow_mut().remove(&program.0);
        assert!(live, "delete_program on unknown or deleted {program:?}");

        if self.current_program.get() == Some(program.0) {
            self.current_program.set(None);
        }
        self.update_stats(|s| s.programs_deleted += 1);
    }

    fn use_program(&self, program: Option<&FakeProgram>) {
        self.current_program.set(program.map(|p| p.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_live_handles() {
        let gl = RecordingGl::default();
        let a = gl.create_shader(ShaderStage::Vertex).unwrap();
        let b = gl.create_shader(ShaderStage::Fragment).unwrap();
        let program = gl.create_program().unwrap();
        assert_eq!(gl.live_handles(), 3);

        gl.delete_shader(a);
        gl.delete_program(program);

        // b was never released
        assert_eq!(gl.live_handles(), 1);
        gl.delete_shader(b);
        assert_eq!(gl.live_handles(), 0);
    }

    #[test]
    #[should_panic(expected = "delete_shader on unknown or deleted")]
    fn test_double_shader_delete_panics() {
        let gl = RecordingGl::default();
        let a = gl.create_shader(ShaderStage::Vertex).unwrap();
        let _b = gl.create_shader(ShaderStage::Fragment).unwrap();

        gl.delete_shader(a);
        gl.delete_shader(a);
    }

    #[test]
    #[should_panic(expected = "delete_program on unknown or deleted")]
    fn test_unknown_program_delete_panics() {
        let gl = RecordingGl::default();

        gl.delete_program(FakeProgram(42));
    }
}
