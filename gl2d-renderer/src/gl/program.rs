use std::fmt::{self, Display};

use log::{debug, warn};
use web_sys::WebGl2RenderingContext;

use crate::{
    error::Error,
    gl::{ConsoleSink, DiagnosticSink, GlBackend},
};

/// Pipeline stage a shader unit is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl From<ShaderStage> for u32 {
    fn from(stage: ShaderStage) -> u32 {
        use ShaderStage::*;

        match stage {
            Vertex   => WebGl2RenderingContext::VERTEX_SHADER,
            Fragment => WebGl2RenderingContext::FRAGMENT_SHADER,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader source text paired with its stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderSource<'a> {
    pub stage: ShaderStage,
    pub source: &'a str,
}

impl<'a> ShaderSource<'a> {
    pub fn vertex(source: &'a str) -> Self {
        Self { stage: ShaderStage::Vertex, source }
    }

    pub fn fragment(source: &'a str) -> Self {
        Self { stage: ShaderStage::Fragment, source }
    }
}

/// How a batch with failed shader units is turned into the units handed
/// to [`create_program`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShaderBatchPolicy {
    /// Any failure fails the batch; units that did compile are deleted.
    #[default]
    AbortOnFailure,
    /// Failed units are dropped and the rest are kept. A batch where
    /// nothing compiled still fails.
    SkipFailed,
}

impl ShaderBatchPolicy {
    /// Resolves the positional output of [`load_shaders`].
    ///
    /// Failures were already reported by [`load_shader`]; the returned error
    /// is the first failure in input order and is not reported again.
    pub fn resolve<B: GlBackend>(
        self,
        gl: &B,
        batch: Vec<Result<B::Shader, Error>>,
    ) -> Result<Vec<B::Shader>, Error> {
        let total = batch.len();
        let mut shaders = Vec::with_capacity(total);
        let mut first_error = None;

        for result in batch {
            match result {
                Ok(shader) => shaders.push(shader),
                Err(e) => {
                    first_error.get_or_insert(e);
                },
            }
        }

        match (self, first_error) {
            (_, None) => Ok(shaders),
            (ShaderBatchPolicy::AbortOnFailure, Some(e)) => {
                shaders.into_iter().for_each(|s| gl.delete_shader(s));
                Err(e)
            },
            (ShaderBatchPolicy::SkipFailed, Some(e)) if shaders.is_empty() => Err(e),
            (ShaderBatchPolicy::SkipFailed, Some(_)) => {
                warn!("dropping {} of {total} shader units that failed to compile", total - shaders.len());
                Ok(shaders)
            },
        }
    }
}

/// A linked program together with the shader units attached to it.
///
/// The units stay alive until [`dispose`](Self::dispose) or
/// [`into_program`](Self::into_program).
#[derive(Debug)]
pub struct ShaderProgram<B: GlBackend> {
    program: B::Program,
    shaders: Vec<B::Shader>,
}

impl<B: GlBackend> ShaderProgram<B> {
    pub fn program(&self) -> &B::Program {
        &self.program
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Use the shader program.
    pub fn use_program(&self, gl: &B) {
        gl.use_program(Some(&self.program));
    }

    /// Releases the shader units and hands back the bare program handle.
    ///
    /// Attached units are only flagged for deletion by GL, so the program
    /// keeps working; the caller now owns the program handle alone.
    pub fn into_program(self, gl: &B) -> B::Program {
        self.shaders.into_iter().for_each(|s| gl.delete_shader(s));
        self.program
    }

    /// Deletes the program and its shader units.
    pub fn dispose(self, gl: &B) {
        let program = self.into_program(gl);
        gl.delete_program(program);
    }
}

fn report(sink: &mut dyn DiagnosticSink, error: Error) -> Error {
    sink.report(&error.to_string());
    error
}

/// Creates and compiles a single shader unit.
///
/// On compile failure the unit is deleted and the sink receives the backend
/// log followed by the line-numbered source.
pub fn load_shader<B: GlBackend>(
    gl: &B,
    source: &str,
    stage: ShaderStage,
    sink: &mut dyn DiagnosticSink,
) -> Result<B::Shader, Error> {
    let Some(shader) = gl.create_shader(stage) else {
        return Err(report(sink, Error::ShaderCreationFailed(stage)));
    };

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl.shader_compiled(&shader) {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(shader);
        return Err(report(sink, Error::shader_compile_failed(stage, log, source)));
    }

    debug!("compiled {stage} shader ({} bytes)", source.len());
    Ok(shader)
}

/// Compiles every source in order. Entry `i` of the result belongs to
/// `sources[i]`; see [`ShaderBatchPolicy`] for collapsing failures.
pub fn load_shaders<B: GlBackend>(
    gl: &B,
    sources: &[ShaderSource<'_>],
    sink: &mut dyn DiagnosticSink,
) -> Vec<Result<B::Shader, Error>> {
    sources
        .iter()
        .map(|s| load_shader(gl, s.source, s.stage, sink))
        .collect()
}

/// Attaches `shaders` to a new program, binds attribute locations and links.
///
/// Each name in `attribs` is bound to the matching entry of `locations`, or
/// to its own index when no location is given for it. The program takes
/// ownership of the shader units; on any failure both the program and the
/// units are deleted.
pub fn create_program<B: GlBackend>(
    gl: &B,
    shaders: Vec<B::Shader>,
    attribs: &[&str],
    locations: Option<&[u32]>,
    sink: &mut dyn DiagnosticSink,
) -> Result<ShaderProgram<B>, Error> {
    let Some(program) = gl.create_program() else {
        shaders.into_iter().for_each(|s| gl.delete_shader(s));
        return Err(report(sink, Error::ProgramCreationFailed));
    };

    for shader in &shaders {
        gl.attach_shader(&program, shader);
    }

    for (idx, name) in attribs.iter().enumerate() {
        let location = locations
            .and_then(|l| l.get(idx).copied())
            .unwrap_or(idx as u32);
        gl.bind_attrib_location(&program, location, name);
    }

    gl.link_program(&program);

    if !gl.program_linked(&program) {
        let log = gl.program_info_log(&program).unwrap_or_default();
        ShaderProgram::<B> { program, shaders }.dispose(gl);
        return Err(report(sink, Error::ProgramLinkFailed(log)));
    }

    debug!("linked program with {} shader units", shaders.len());
    Ok(ShaderProgram { program, shaders })
}

/// Fluent setup for a [`ShaderProgram`].
///
/// # Examples
///
/// ```rust,ignore
/// let program = ProgramBuilder::new(&gl)
///     .vertex(VERTEX_GLSL)
///     .fragment(FRAGMENT_GLSL)
///     .attrib_at("a_position", 0)
///     .build()?;
/// ```
pub struct ProgramBuilder<'a, B: GlBackend> {
    gl: &'a B,
    sources: Vec<ShaderSource<'a>>,
    attribs: Vec<(&'a str, Option<u32>)>,
    policy: ShaderBatchPolicy,
    sink: Box<dyn DiagnosticSink + 'a>,
}

impl<'a, B: GlBackend> ProgramBuilder<'a, B> {
    pub fn new(gl: &'a B) -> Self {
        Self {
            gl,
            sources: Vec::new(),
            attribs: Vec::new(),
            policy: ShaderBatchPolicy::default(),
            sink: Box::new(ConsoleSink),
        }
    }

    pub fn shader(mut self, stage: ShaderStage, source: &'a str) -> Self {
        self.sources.push(ShaderSource { stage, source });
        self
    }

    pub fn vertex(self, source: &'a str) -> Self {
        self.shader(ShaderStage::Vertex, source)
    }

    pub fn fragment(self, source: &'a str) -> Self {
        self.shader(ShaderStage::Fragment, source)
    }

    /// Binds `name` to its position among the declared attributes.
    pub fn attrib(mut self, name: &'a str) -> Self {
        self.attribs.push((name, None));
        self
    }

    /// Binds `name` to an explicit location.
    pub fn attrib_at(mut self, name: &'a str, location: u32) -> Self {
        self.attribs.push((name, Some(location)));
        self
    }

    pub fn policy(mut self, policy: ShaderBatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Routes failure messages to `sink` instead of the console.
    pub fn sink(mut self, sink: impl DiagnosticSink + 'a) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn on_error(self, callback: impl FnMut(&str) + 'a) -> Self {
        self.sink(callback)
    }

    pub fn build(mut self) -> Result<ShaderProgram<B>, Error> {
        let batch = load_shaders(self.gl, &self.sources, self.sink.as_mut());
        let shaders = self.policy.resolve(self.gl, batch)?;

        let names: Vec<&str> = self.attribs.iter().map(|(name, _)| *name).collect();
        let locations: Vec<u32> = self
            .attribs
            .iter()
            .enumerate()
            .map(|(idx, (_, loc))| loc.unwrap_or(idx as u32))
            .collect();

        create_program(self.gl, shaders, &names, Some(&locations), self.sink.as_mut())
    }
}
