//! Service-category membership for a professional account.
//!
//! Every professional lists exactly one permanent **primary** category (fixed
//! at signup) plus any number of **additional** categories. The additional
//! list has set semantics: no duplicates, and it never contains the primary.
//! Insertion order is preserved for display but carries no meaning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CategoryError, TradeHubError, ValidationError};

/// Soft warning raised when a newly added category looks like a listing the
/// account already has (e.g. `"Contractor"` next to `"Contractors"`).
///
/// This is informational and never blocks the mutation; callers decide how to
/// surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarCategory {
    /// The category that was just added.
    pub proposed: String,
    /// The pre-existing listing it resembles.
    pub existing: String,
}

impl fmt::Display for SimilarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} looks similar to the existing listing {:?}",
            self.proposed, self.existing
        )
    }
}

/// The set of service categories attached to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategorySet {
    primary: String,
    additional: Vec<String>,
}

impl ServiceCategorySet {
    /// Create a set holding only the primary category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPrimaryCategory`] when `primary` is
    /// empty or whitespace.
    pub fn new(primary: impl Into<String>) -> Result<Self, TradeHubError> {
        let primary = primary.into();
        if primary.trim().is_empty() {
            return Err(ValidationError::MissingPrimaryCategory.into());
        }
        Ok(Self {
            primary,
            additional: Vec::new(),
        })
    }

    /// Reassemble a set from stored parts without validation.
    ///
    /// Persistence adapters use this to decode rows. Legacy rows may violate
    /// invariants; [`ServiceCategorySet::validate`] and the fee calculator
    /// surface that explicitly instead of failing the decode.
    #[must_use]
    pub fn from_parts(primary: String, additional: Vec<String>) -> Self {
        Self {
            primary,
            additional,
        }
    }

    /// The permanent primary category.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The additional categories, in insertion order.
    #[must_use]
    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    /// Total number of distinct categories, primary included.
    #[must_use]
    pub fn total(&self) -> usize {
        1 + self.additional.len()
    }

    /// Whether `name` is an exact member (primary or additional).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.primary == name || self.additional.iter().any(|c| c == name)
    }

    /// Add an additional category.
    ///
    /// On success, returns a [`SimilarCategory`] warning when the new name
    /// resembles an existing listing (case-insensitive substring match after
    /// stripping a trailing `s`). The warning never blocks the add.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCategoryName`] for empty names and
    /// [`CategoryError::Duplicate`] when the name is already a member.
    pub fn add(&mut self, name: impl Into<String>) -> Result<Option<SimilarCategory>, TradeHubError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName.into());
        }
        if self.contains(&name) {
            return Err(CategoryError::Duplicate { name }.into());
        }

        let warning = self
            .members()
            .find(|existing| similar(existing, &name))
            .map(|existing| SimilarCategory {
                proposed: name.clone(),
                existing: existing.to_string(),
            });

        self.additional.push(name);
        Ok(warning)
    }

    /// Remove an additional category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::CannotRemovePrimary`] when `name` is the
    /// primary category and [`CategoryError::NotListed`] when it is not an
    /// additional member. The primary always remains; the set is never empty.
    pub fn remove(&mut self, name: &str) -> Result<(), TradeHubError> {
        if name == self.primary {
            return Err(CategoryError::CannotRemovePrimary {
                name: name.to_string(),
            }
            .into());
        }
        match self.additional.iter().position(|c| c == name) {
            Some(idx) => {
                self.additional.remove(idx);
                Ok(())
            }
            None => Err(CategoryError::NotListed {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Check domain invariants.
    ///
    /// Deserialized sets bypass [`ServiceCategorySet::new`], so persistence
    /// adapters call this after decoding a row.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing primary or empty member name,
    /// and [`CategoryError::Duplicate`] when the additional list contains the
    /// primary or repeats a member.
    pub fn validate(&self) -> Result<(), TradeHubError> {
        if self.primary.trim().is_empty() {
            return Err(ValidationError::MissingPrimaryCategory.into());
        }
        for (idx, name) in self.additional.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyCategoryName.into());
            }
            if name == &self.primary || self.additional[..idx].contains(name) {
                return Err(CategoryError::Duplicate { name: name.clone() }.into());
            }
        }
        Ok(())
    }

    fn members(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.additional.iter().map(String::as_str))
    }
}

/// Near-duplicate heuristic: lowercase both names, strip one trailing `s`,
/// then test substring containment in either direction.
fn similar(a: &str, b: &str) -> bool {
    let a = normalized(a);
    let b = normalized(b);
    a.contains(&b) || b.contains(&a)
}

fn normalized(name: &str) -> String {
    let lower = name.to_lowercase();
    lower.strip_suffix('s').unwrap_or(&lower).to_string()
}
