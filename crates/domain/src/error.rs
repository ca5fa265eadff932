//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TradeHubError`]
//! via `#[from]`. Adapters keep their concrete error types (sqlx failures,
//! migration failures, …) private and box them behind
//! [`TradeHubError::Storage`].

/// Base error enum shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum TradeHubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A category membership rule was violated.
    #[error("category rule violation")]
    Category(#[from] CategoryError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The record would collide with an existing one.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An account flagged professional has no primary service category.
    #[error("professional account is missing its primary service category")]
    MissingPrimaryCategory,

    /// A service category name was empty or whitespace.
    #[error("service category name must not be empty")]
    EmptyCategoryName,

    /// The account email was empty.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The account display name was empty.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// A path or payload identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A currency amount could not be parsed.
    #[error("invalid currency amount: {0:?}")]
    InvalidAmount(String),

    /// A taxonomy section name did not match Build, Design, or Finance.
    #[error("unknown taxonomy section: {0:?}")]
    UnknownSection(String),
}

/// Service-category membership rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// The category is already listed on the account (as primary or additional).
    #[error("category {name:?} is already listed on this account")]
    Duplicate {
        /// The rejected category name.
        name: String,
    },

    /// The primary service category is permanent and cannot be removed.
    #[error("the primary service category {name:?} cannot be removed")]
    CannotRemovePrimary {
        /// The primary category name.
        name: String,
    },

    /// The category is not an additional listing on the account.
    #[error("category {name:?} is not listed on this account")]
    NotListed {
        /// The missing category name.
        name: String,
    },
}

/// A record lookup came up empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Account"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// A record would collide with an existing one on a unique key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} {value:?} already exists")]
pub struct ConflictError {
    /// Entity kind, e.g. `"Account"`.
    pub entity: &'static str,
    /// The conflicting field, e.g. `"email"`.
    pub field: &'static str,
    /// The conflicting value.
    pub value: String,
}
