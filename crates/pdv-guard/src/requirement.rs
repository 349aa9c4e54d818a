//! What a privileged operation needs before it may run.

use std::fmt::{self, Display};

use pdv_access::{AccessModel, Role};
use pdv_types::Scope;
use serde::{Deserialize, Serialize};

/// How multiple actions in a requirement combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Match {
    /// Every action must be granted.
    All,
    /// At least one action must be granted (equivalent permissions).
    Any,
}

/// A permission requirement in one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub scope: Scope,
    pub resource: String,
    pub actions: Vec<String>,
    pub mode: Match,
}

impl Requirement {
    /// Requires one action on an organization resource.
    pub fn organization(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self::single(Scope::Organization, resource, action)
    }

    /// Requires one action on a platform resource.
    pub fn platform(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self::single(Scope::Platform, resource, action)
    }

    /// Requires any one of several equivalent actions.
    pub fn any_of(scope: Scope, resource: impl Into<String>, actions: &[&str]) -> Self {
        Self {
            scope,
            resource: resource.into(),
            actions: actions.iter().map(|a| (*a).to_string()).collect(),
            mode: Match::Any,
        }
    }

    /// Requires all of several actions.
    pub fn all_of(scope: Scope, resource: impl Into<String>, actions: &[&str]) -> Self {
        Self {
            mode: Match::All,
            ..Self::any_of(scope, resource, actions)
        }
    }

    fn single(scope: Scope, resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            scope,
            resource: resource.into(),
            actions: vec![action.into()],
            mode: Match::All,
        }
    }

    /// Evaluates the requirement for a role through the model's controller.
    pub fn is_satisfied_by(&self, model: &AccessModel, role: &Role) -> bool {
        let controller = model.controller(self.scope);
        let actions: Vec<&str> = self.actions.iter().map(String::as_str).collect();

        match self.mode {
            Match::All => controller.has_all_permissions(role, &self.resource, &actions),
            Match::Any => controller.has_any_permission(role, &self.resource, &actions),
        }
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match self.mode {
            Match::All => "&",
            Match::Any => "|",
        };
        write!(
            f,
            "{}/{}:{}",
            self.scope,
            self.resource,
            self.actions.join(joiner)
        )
    }
}
