use thiserror::Error;

/// Unified error type for vc operations
#[derive(Error, Debug)]
pub enum VcError {
    #[error("Context error: {0}")]
    Context(String),

    #[error("Context parse error: {0}")]
    ContextParse(#[from] toml::de::Error),

    #[error("Context write error: {0}")]
    ContextWrite(#[from] toml::ser::Error),

    #[error("Branch lookup failed: {0}")]
    Lookup(String),

    #[error("Cannot increment {field} of {version}: already at its maximum")]
    VersionOverflow {
        field: &'static str,
        version: String,
    },

    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: String },

    #[error("run {stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<VcError>,
    },

    #[error("Pipe error ({step}): {source}")]
    Pipe {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in vc
pub type Result<T> = std::result::Result<T, VcError>;

impl VcError {
    /// Create a context store error with context
    pub fn context(msg: impl Into<String>) -> Self {
        VcError::Context(msg.into())
    }

    /// Create a branch/remote lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        VcError::Lookup(msg.into())
    }

    /// A version field that cannot be bumped any further
    pub fn overflow(field: &'static str, version: impl Into<String>) -> Self {
        VcError::VersionOverflow {
            field,
            version: version.into(),
        }
    }

    /// Label an error with the apply stage it came from ("tag", "push")
    pub fn stage(stage: &'static str, source: VcError) -> Self {
        VcError::Stage {
            stage,
            source: Box::new(source),
        }
    }

    /// Record a non-zero exit of a subprocess
    pub fn exit_status(command: impl Into<String>, status: std::process::ExitStatus) -> Self {
        VcError::ExitStatus {
            command: command.into(),
            status: status.to_string(),
        }
    }

    pub fn pipe(step: &'static str, source: std::io::Error) -> Self {
        VcError::Pipe { step, source }
    }
}
