use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column holds data that doesn't match its expected shape.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Malformed JSON in {table}.{column}: {source}")]
    MalformedJsonColumn {
        table: &'static str,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A page row holds a status other than `drafted` or `published`.
    #[error("Unknown page status '{0}'")]
    UnknownPageStatus(String),

    /// A page row holds a published timestamp that isn't RFC 3339.
    #[error("Failed to parse published timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A default role is missing, meaning startup seeding didn't run.
    #[error("Role '{0}' not found")]
    MissingRole(String),

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
