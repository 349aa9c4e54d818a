//! Permission guards for pages and form actions.
//!
//! Every privileged operation goes through the same sequence before doing
//! any work: resolve the session, pick the effective role for the
//! requirement's scope, ask the access controller, and turn a "no" into a
//! redirect or a failed [`ActionResult`].

use std::future::Future;
use std::sync::Arc;

use pdv_access::AccessModel;
use pdv_config::{MessagesConfig, PdvConfig, RoutesConfig};
use pdv_types::Scope;
use tracing::{error, info, warn};

use crate::outcome::{ActionResult, Authorized, Decision, PageOutcome};
use crate::requirement::Requirement;
use crate::session::{RequestContext, Session, SessionResolver};

/// Routing, messages and audit switch for a [`Guard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSettings {
    pub audit_checks: bool,
    pub routes: RoutesConfig,
    pub messages: MessagesConfig,
}

impl From<&PdvConfig> for GuardSettings {
    fn from(config: &PdvConfig) -> Self {
        Self {
            audit_checks: config.access.audit_checks,
            routes: config.routes.clone(),
            messages: config.messages.clone(),
        }
    }
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self::from(&PdvConfig::default())
    }
}

/// Guard binding the shared access model to a session resolver.
pub struct Guard<R> {
    model: Arc<AccessModel>,
    resolver: R,
    settings: GuardSettings,
}

impl<R: SessionResolver> Guard<R> {
    pub fn new(model: Arc<AccessModel>, resolver: R) -> Self {
        Self {
            model,
            resolver,
            settings: GuardSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GuardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Disables decision logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.settings.audit_checks = false;
        self
    }

    pub fn model(&self) -> &AccessModel {
        &self.model
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Resolves the caller's session and evaluates the requirement.
    ///
    /// Session-service failures are logged and treated like a missing
    /// session; they never reach the caller as errors.
    pub async fn authorize(&self, request: &RequestContext, requirement: &Requirement) -> Decision {
        match self.resolver.resolve(request).await {
            Ok(Some(session)) => self.decide(session, requirement),
            Ok(None) => {
                if self.settings.audit_checks {
                    warn!(
                        path = %request.path,
                        requirement = %requirement,
                        "No session; sign-in required"
                    );
                }
                Decision::SignInRequired
            }
            Err(e) => {
                error!(
                    path = %request.path,
                    requirement = %requirement,
                    error = %e,
                    "Session resolution failed"
                );
                Decision::SignInRequired
            }
        }
    }

    /// Evaluates a requirement for an already resolved session.
    pub fn decide(&self, session: Session, requirement: &Requirement) -> Decision {
        let scope = requirement.scope;

        let Some(role_name) = session.role_name(scope) else {
            if self.settings.audit_checks {
                warn!(
                    user = %session.user_id,
                    requirement = %requirement,
                    "No active organization"
                );
            }
            return Decision::NoActiveOrganization;
        };

        let granted = self
            .model
            .role(scope, role_name)
            .is_some_and(|role| requirement.is_satisfied_by(&self.model, role));

        if self.settings.audit_checks {
            if granted {
                info!(
                    user = %session.user_id,
                    scope = %scope,
                    role = %role_name,
                    resource = %requirement.resource,
                    actions = ?requirement.actions,
                    "Permission granted"
                );
            } else {
                warn!(
                    user = %session.user_id,
                    scope = %scope,
                    role = %role_name,
                    resource = %requirement.resource,
                    actions = ?requirement.actions,
                    "Permission denied"
                );
            }
        }

        if granted {
            Decision::Granted(Authorized {
                session,
                scope,
                role: role_name,
            })
        } else {
            Decision::Forbidden {
                organization_id: match scope {
                    Scope::Organization => session.organization_id().cloned(),
                    Scope::Platform => None,
                },
            }
        }
    }

    /// Page-level guard: render when granted, otherwise redirect.
    pub async fn page(&self, request: &RequestContext, requirement: &Requirement) -> PageOutcome {
        match self.authorize(request, requirement).await {
            Decision::Granted(authorized) => PageOutcome::Render(authorized),
            denied => PageOutcome::Redirect(self.redirect_for(&denied)),
        }
    }

    /// Form-action guard: the authorization, or the failure to return.
    pub async fn action<T>(
        &self,
        request: &RequestContext,
        requirement: &Requirement,
    ) -> Result<Authorized, ActionResult<T>> {
        match self.authorize(request, requirement).await {
            Decision::Granted(authorized) => Ok(authorized),
            denied => Err(ActionResult::failure(self.message_for(&denied))),
        }
    }

    /// Runs `operation` only after the requirement passes.
    ///
    /// On denial the operation is never polled, so nothing privileged
    /// happens before the check.
    pub async fn run_action<T, F, Fut>(
        &self,
        request: &RequestContext,
        requirement: &Requirement,
        operation: F,
    ) -> ActionResult<T>
    where
        F: FnOnce(Authorized) -> Fut,
        Fut: Future<Output = ActionResult<T>>,
    {
        match self.action(request, requirement).await {
            Ok(authorized) => operation(authorized).await,
            Err(denied) => denied,
        }
    }

    /// Redirect target for a denied decision.
    pub fn redirect_for(&self, decision: &Decision) -> String {
        let routes = &self.settings.routes;
        match decision {
            Decision::Granted(_) => "/".to_string(),
            Decision::SignInRequired => routes.sign_in.clone(),
            Decision::NoActiveOrganization => routes.select_organization.clone(),
            Decision::Forbidden {
                organization_id: Some(id),
            } => format!("/{id}{}", routes.forbidden),
            Decision::Forbidden {
                organization_id: None,
            } => routes.forbidden.clone(),
        }
    }

    /// User-facing message for a denied decision.
    pub fn message_for(&self, decision: &Decision) -> &str {
        let messages = &self.settings.messages;
        match decision {
            Decision::SignInRequired => &messages.sign_in_required,
            Decision::NoActiveOrganization => &messages.no_active_organization,
            Decision::Granted(_) | Decision::Forbidden { .. } => &messages.not_authorized,
        }
    }
}
