//! The goal resource.

use serde::{Deserialize, Serialize};

use super::GoalId;

/// Errors that can occur when validating a [`GoalInput`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// The name is empty or whitespace only.
    #[error("goal name cannot be empty")]
    EmptyName,
}

/// A stored goal.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub description: String,
}

impl Goal {
    /// Build a goal from an id and the fields supplied by a client.
    #[must_use]
    pub fn from_input(id: GoalId, input: GoalInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
        }
    }
}

/// The client-supplied fields of a goal, used for both create and update.
///
/// `name` is required; `description` defaults to an empty string. Any `id`
/// in the request body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoalInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl GoalInput {
    /// Create a new input from name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check that the input can be stored.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::EmptyName` if the name is blank.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }
        Ok(())
    }
}
