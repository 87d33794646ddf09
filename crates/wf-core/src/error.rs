use crate::section::SectionId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or addressing a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The section ID does not belong to this world.
    #[error("section not found: {0}")]
    UnknownSection(SectionId),

    /// A named section could not be resolved.
    #[error("no section named \"{0}\"")]
    UnknownSectionName(String),

    /// Two sections in a blueprint share a name.
    #[error("section already exists: \"{0}\"")]
    DuplicateSection(String),

    /// The text is not one of the four compass directions.
    #[error("unknown direction: \"{0}\"")]
    UnknownDirection(String),

    /// The blueprint document could not be parsed.
    #[error("invalid blueprint: {0}")]
    Parse(#[from] serde_json::Error),
}
