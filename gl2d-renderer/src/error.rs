use crate::gl::ShaderStage;

/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The backend could not allocate a shader object.
    #[error("Failed to create {0} shader.")]
    ShaderCreationFailed(ShaderStage),

    /// Compilation failed; carries the backend log and the source with
    /// 1-based line numbers so the two can be read side by side.
    #[error("*** Error compiling {stage} shader: {log}\n{listing}")]
    ShaderCompileFailed {
        stage: ShaderStage,
        log: String,
        listing: String,
    },

    /// The backend could not allocate a program object.
    #[error("Failed to create program.")]
    ProgramCreationFailed,

    /// Linking failed; carries the backend log.
    #[error("Error in program linking: {0}")]
    ProgramLinkFailed(String),

    /// Failed to retrieve DOM elements or a WebGL context.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// WebGL resource creation or lookup errors.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl Error {
    pub(crate) fn shader_compile_failed(stage: ShaderStage, log: String, source: &str) -> Self {
        Self::ShaderCompileFailed { stage, log, listing: numbered_lines(source) }
    }

    // Initialization errors
    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn canvas_not_found() -> Self {
        Self::Initialization("Unable to retrieve canvas".to_string())
    }

    pub fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL2 rendering context".to_string())
    }

    pub fn canvas_context_failed() -> Self {
        Self::Initialization("Failed to retrieve canvas rendering context".to_string())
    }

    // Resource errors
    pub fn buffer_creation_failed(buffer_type: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer"))
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }
}

/// Prefixes every line of `source` with its 1-based line number.
pub(crate) fn numbered_lines(source: &str) -> String {
    source
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
