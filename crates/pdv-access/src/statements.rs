//! Statement registry.
//!
//! The registry is the closed universe of `(resource, action)` pairs a role
//! universe may reason about. It is assembled once through
//! [`RegistryBuilder`] and exposes no mutation afterwards.

use crate::error::{AccessError, Result};
use pdv_types::Scope;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A resource together with its fixed action vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Resource name, unique within the registry.
    pub resource: String,

    /// Actions in declaration order. Never empty, never repeated.
    pub actions: Vec<String>,
}

impl Statement {
    /// Returns whether `action` belongs to this vocabulary.
    pub fn contains(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

/// Static `(resource, actions)` table a registry is defined from.
pub type StatementTable<'a> = &'a [(&'a str, &'a [&'a str])];

/// Frozen mapping `resource -> actions` for one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRegistry {
    scope: Scope,
    statements: Vec<Statement>,
}

impl StatementRegistry {
    /// Starts an empty registry for the given scope.
    pub fn builder(scope: Scope) -> RegistryBuilder {
        RegistryBuilder {
            scope,
            statements: Vec::new(),
        }
    }

    /// Builds a registry from a static statement table.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdv_access::StatementRegistry;
    /// use pdv_types::Scope;
    ///
    /// let registry = StatementRegistry::from_table(
    ///     Scope::Organization,
    ///     &[("product", &["view", "create"]), ("order", &["view", "cancel"])],
    /// )?;
    ///
    /// assert_eq!(registry.vocabulary("order")?, ["view", "cancel"]);
    /// # Ok::<(), pdv_access::AccessError>(())
    /// ```
    pub fn from_table(scope: Scope, table: StatementTable<'_>) -> Result<Self> {
        table
            .iter()
            .try_fold(Self::builder(scope), |builder, (resource, actions)| {
                builder.define(resource, actions)
            })
            .map(RegistryBuilder::build)
    }

    /// Returns the scope this registry belongs to.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the full action vocabulary of a resource.
    ///
    /// # Errors
    ///
    /// [`AccessError::UnknownResource`] if the resource is not registered.
    pub fn vocabulary(&self, resource: &str) -> Result<&[String]> {
        self.statement(resource)
            .map(|s| s.actions.as_slice())
            .ok_or_else(|| AccessError::UnknownResource {
                scope: self.scope,
                resource: resource.to_string(),
            })
    }

    /// Returns the statement for a resource, if registered.
    pub fn statement(&self, resource: &str) -> Option<&Statement> {
        self.statements.iter().find(|s| s.resource == resource)
    }

    /// Returns whether the pair is part of the registry.
    pub fn contains(&self, resource: &str, action: &str) -> bool {
        self.statement(resource).is_some_and(|s| s.contains(action))
    }

    /// Returns the registered resource names in definition order.
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|s| s.resource.as_str())
    }

    /// Returns all statements in definition order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Builder that collects resource definitions before freezing them.
#[derive(Debug)]
pub struct RegistryBuilder {
    scope: Scope,
    statements: Vec<Statement>,
}

impl RegistryBuilder {
    /// Registers a resource with its fixed action vocabulary.
    ///
    /// # Errors
    ///
    /// - [`AccessError::DuplicateResource`] if `resource` is already defined
    /// - [`AccessError::EmptyVocabulary`] if `actions` is empty
    /// - [`AccessError::DuplicateAction`] if an action is listed twice
    pub fn define(mut self, resource: &str, actions: &[&str]) -> Result<Self> {
        if self.statements.iter().any(|s| s.resource == resource) {
            return Err(AccessError::DuplicateResource {
                resource: resource.to_string(),
            });
        }

        if actions.is_empty() {
            return Err(AccessError::EmptyVocabulary {
                resource: resource.to_string(),
            });
        }

        let mut vocabulary: Vec<String> = Vec::with_capacity(actions.len());
        for action in actions {
            if vocabulary.iter().any(|a| a == action) {
                return Err(AccessError::DuplicateAction {
                    resource: resource.to_string(),
                    action: (*action).to_string(),
                });
            }
            vocabulary.push((*action).to_string());
        }

        self.statements.push(Statement {
            resource: resource.to_string(),
            actions: vocabulary,
        });
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> StatementRegistry {
        debug!(
            scope = %self.scope,
            resources = self.statements.len(),
            "Statement registry built"
        );

        StatementRegistry {
            scope: self.scope,
            statements: self.statements,
        }
    }
}
