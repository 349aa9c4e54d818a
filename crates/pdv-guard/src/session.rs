//! Session resolution seam.
//!
//! The identity service decides who is calling and which roles apply; the
//! guard only consumes the answer. [`SessionResolver`] is the adapter trait
//! the concrete auth library sits behind.

use std::collections::HashMap;
use std::future::Future;

use pdv_access::{OrganizationRole, PlatformRole};
use pdv_types::{OrganizationId, Scope, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Incoming request as seen by a guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Opaque session token (cookie or bearer), if any.
    pub session_token: Option<String>,
    /// Path being served, for logging.
    pub path: String,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            session_token: None,
            path: path.into(),
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

/// The organization a session is currently acting in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveOrganization {
    pub id: OrganizationId,
    pub role: OrganizationRole,
}

/// A resolved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub platform_role: PlatformRole,
    pub active_organization: Option<ActiveOrganization>,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>, platform_role: PlatformRole) -> Self {
        Self {
            user_id: user_id.into(),
            platform_role,
            active_organization: None,
        }
    }

    /// Sets the active organization and the member's role in it.
    pub fn in_organization(mut self, id: impl Into<OrganizationId>, role: OrganizationRole) -> Self {
        self.active_organization = Some(ActiveOrganization {
            id: id.into(),
            role,
        });
        self
    }

    /// Name of the effective role for a scope.
    ///
    /// `None` for the organization scope when no organization is active.
    pub fn role_name(&self, scope: Scope) -> Option<&'static str> {
        match scope {
            Scope::Platform => Some(self.platform_role.as_str()),
            Scope::Organization => self.active_organization.as_ref().map(|o| o.role.as_str()),
        }
    }

    pub fn organization_id(&self) -> Option<&OrganizationId> {
        self.active_organization.as_ref().map(|o| &o.id)
    }
}

/// Failure talking to the session service.
///
/// Distinct from "no session": a missing session resolves to `Ok(None)`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid session: {0}")]
    Invalid(String),
}

/// Resolves the caller's session for a request.
pub trait SessionResolver: Send + Sync {
    /// Returns `Ok(None)` when the request carries no valid session.
    fn resolve(
        &self,
        request: &RequestContext,
    ) -> impl Future<Output = Result<Option<Session>, SessionError>> + Send;
}

/// Token-keyed in-memory resolver for development and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessions {
    sessions: HashMap<String, Session>,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, token: impl Into<String>, session: Session) -> Self {
        self.sessions.insert(token.into(), session);
        self
    }
}

impl SessionResolver for InMemorySessions {
    async fn resolve(&self, request: &RequestContext) -> Result<Option<Session>, SessionError> {
        Ok(request
            .session_token
            .as_deref()
            .and_then(|token| self.sessions.get(token))
            .cloned())
    }
}
