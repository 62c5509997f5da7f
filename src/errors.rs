use std::fmt;

/// Errors originating from either the server logic (routing, bad form
/// input) or the artifact layers (model and listings files).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// An expected on-disk artifact is absent; carries the expected path
    /// so the operator knows where the training step should have put it.
    MissingArtifact(String),
    /// An artifact exists but could not be read or parsed.
    ArtifactError(String),
    /// The assembled feature record does not line up with the schema the
    /// loaded model was trained on.
    SchemaMismatch(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::MissingArtifact(path) => write!(
                f,
                "Artifact not found at {path}. Run the offline training step first."
            ),
            ServerError::ArtifactError(msg) => write!(f, "Artifact Error: {msg}"),
            ServerError::SchemaMismatch(msg) => write!(f, "Schema Mismatch: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
