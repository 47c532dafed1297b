//! Domain Router mounting points.
//!
//! The user and domain-API route groups are owned elsewhere. The gateway only
//! mounts them; it does not wrap their responses and they must not repeat
//! any origin handling, which the pipeline already applies around them.

use axum::Router;

/// Mount point of the user route group.
pub const USERS_MOUNT: &str = "/users";
/// Mount point of the domain API route group.
pub const API_MOUNT: &str = "/api";

/// The externally owned route groups.
///
/// Both routers must be fully stateful already (`Router<()>`).
#[derive(Debug, Default)]
pub struct DomainRoutes {
    pub users: Router,
    pub api: Router,
}

impl DomainRoutes {
    pub fn new(users: Router, api: Router) -> Self {
        Self { users, api }
    }
}
