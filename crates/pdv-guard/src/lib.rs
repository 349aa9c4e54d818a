//! # pdv-guard: Permission guards for PDV call sites
//!
//! Wraps [`pdv_access`] for the places that actually need an answer: page
//! loads and form actions.
//!
//! ```text
//! Request ─► SessionResolver ─► effective role (platform | organization)
//!                                      │
//!                                      ▼
//!                           AccessController::has_*_permission
//!                                      │
//!                 ┌────────────────────┼──────────────────────┐
//!                 ▼                    ▼                      ▼
//!          Render / Ok(..)    Redirect(/sign-in)   ActionResult { success: false }
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pdv_access::{AccessModel, OrganizationRole, PlatformRole};
//! use pdv_guard::{Decision, Guard, InMemorySessions, Requirement, Session};
//!
//! let model = Arc::new(AccessModel::standard()?);
//! let guard = Guard::new(model, InMemorySessions::new()).without_audit();
//!
//! let operator = Session::new("usr_1", PlatformRole::User)
//!     .in_organization("org_1", OrganizationRole::Operator);
//!
//! let decision = guard.decide(operator, &Requirement::organization("order", "cancel"));
//! assert!(matches!(decision, Decision::Forbidden { .. }));
//! assert_eq!(guard.redirect_for(&decision), "/org_1/forbidden");
//! # Ok::<(), pdv_access::AccessError>(())
//! ```

pub mod guard;
pub mod outcome;
pub mod requirement;
pub mod session;

pub use guard::{Guard, GuardSettings};
pub use outcome::{ActionResult, Authorized, Decision, PageOutcome};
pub use requirement::{Match, Requirement};
pub use session::{
    ActiveOrganization, InMemorySessions, RequestContext, Session, SessionError, SessionResolver,
};
