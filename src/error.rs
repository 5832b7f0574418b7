//! Error types for the chat domain.
//!
//! Value objects fail with [`ValidationError`], credential checks with
//! [`AuthenticationError`], lookups that the caller decided must succeed with
//! [`NotFoundError`], and relation traversals that land on a missing aggregate
//! with [`ReferentialIntegrityError`]. [`DomainError`] wraps all of them for the
//! service layer, which is what a GraphQL resolver calls into.

/// Main error type for service-level operations.
///
/// Every variant maps to a stable machine-readable code through
/// [`DomainError::error_code`], which the transport layer uses when rendering
/// the error to a client.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A primitive could not be turned into a value object
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A credential or token was rejected
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// A lookup missed where the operation needed a hit
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Stored data references an aggregate that does not exist
    #[error("Referential integrity error: {0}")]
    ReferentialIntegrity(#[from] ReferentialIntegrityError),

    /// The operation would duplicate something that must stay unique
    #[error("Conflict: {message}")]
    Conflict { message: String },
}

/// Validation errors raised when constructing a value object.
///
/// Each variant names the value object kind (`"email"`, `"messageContent"`, ...)
/// and the rule that was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value must not be empty
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },

    /// The value does not have the expected shape
    #[error("{kind} has invalid format: '{value}'")]
    InvalidFormat { kind: &'static str, value: String },

    /// The value exceeds the maximum number of characters
    #[error("{kind} must be at most {max} characters, got {actual}")]
    TooLong {
        kind: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Rejections from credential or session checks.
///
/// No lockout or backoff is attached to any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The presented token does not belong to any account
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authenticated account is not a member of the conversation
    #[error("Account {account_id} is not a member of conversation {conversation_id}")]
    NotAMember {
        account_id: String,
        conversation_id: String,
    },
}

/// A lookup by identity that returned nothing.
///
/// Stores return `Option`; callers convert a `None` into this error only when
/// the use case requires the aggregate to exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {id}")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub id: String,
}

/// A stored relation points at an aggregate that cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{relation} of {from} references missing {kind} {target}")]
pub struct ReferentialIntegrityError {
    pub relation: &'static str,
    pub from: String,
    pub kind: &'static str,
    pub target: String,
}

/// Errors raised while assembling services from a configuration.
///
/// These are programming or deployment mistakes and surface at startup.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Demo data could not be inserted
    #[error("Failed to seed demo data: {0}")]
    Seed(#[source] DomainError),
}

impl DomainError {
    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not found error for the given aggregate kind
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound(NotFoundError::new(kind, id))
    }

    /// Stable code for rendering the error on the wire.
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::Authentication(_) => "AUTHENTICATION_ERROR",
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::ReferentialIntegrity(_) => "REFERENTIAL_INTEGRITY",
            DomainError::Conflict { .. } => "CONFLICT",
        }
    }

    /// Whether the error was caused by caller input rather than broken stored data.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DomainError::ReferentialIntegrity(_))
    }
}

impl ValidationError {
    /// Create an invalid format error
    pub fn invalid_format(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
        }
    }

    /// The value object kind that failed validation.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Empty { kind }
            | ValidationError::InvalidFormat { kind, .. }
            | ValidationError::TooLong { kind, .. } => *kind,
        }
    }
}

impl NotFoundError {
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl ReferentialIntegrityError {
    pub fn new(
        relation: &'static str,
        from: impl Into<String>,
        kind: &'static str,
        target: impl Into<String>,
    ) -> Self {
        Self {
            relation,
            from: from.into(),
            kind,
            target: target.into(),
        }
    }
}

// Result type aliases for convenience
pub type DomainResult<T> = Result<T, DomainError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BuildResult<T> = Result<T, BuildError>;
