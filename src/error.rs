use thiserror::Error;

/// Errors surfaced by the render boundary.
///
/// Malformed color values are not represented here: they are recovered
/// locally by falling back to the light foreground (see `color`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BadgeError {
    /// A required request parameter was absent or empty.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The identifier did not resolve against the catalog after every
    /// lookup strategy.
    #[error("no icon found for '{0}'")]
    IconNotFound(String),

    /// A grid request where none of the identifiers resolved. Partial
    /// resolution proceeds on the resolved subset instead.
    #[error("no icons found for any of: {0}")]
    NoIconsMatched(String),

    /// Grid composition invoked with zero badges.
    #[error("cannot compose an empty grid")]
    EmptyGrid,
}
