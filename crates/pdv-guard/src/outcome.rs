//! Guard outcomes handed back to call sites.
//!
//! A denied permission is an ordinary value here, never an error: pages get
//! a redirect, form actions get an [`ActionResult`] with `success: false`.

use pdv_types::{OrganizationId, Scope};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Proof that a requirement passed, carrying the session it passed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized {
    pub session: Session,
    pub scope: Scope,
    pub role: &'static str,
}

impl Authorized {
    /// Active organization, when the check was organization-scoped.
    pub fn organization_id(&self) -> Option<&OrganizationId> {
        match self.scope {
            Scope::Organization => self.session.organization_id(),
            Scope::Platform => None,
        }
    }
}

/// Result of evaluating a requirement for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Granted(Authorized),
    /// No session, or the session service could not be reached.
    SignInRequired,
    /// Organization-scoped requirement without an active organization.
    NoActiveOrganization,
    /// Session exists but its role lacks the permission.
    Forbidden {
        organization_id: Option<OrganizationId>,
    },
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Granted(_))
    }
}

/// What a page guard tells the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Render(Authorized),
    Redirect(String),
}

/// Structured result of a form action.
///
/// Serializes to `{"success": false, "message": "..."}` on failure and
/// `{"success": true, "data": ...}` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Attaches a user-facing message to a result.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
