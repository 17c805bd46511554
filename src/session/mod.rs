//! Session state and the mount-time guard

mod store;
mod types;

use log::warn;

pub use store::*;
pub use types::*;

/// Shared session state, injected once at client construction and handed
/// to every sub-client.
#[derive(Clone)]
pub struct SessionContext {
    store: TokenStore,
}

impl SessionContext {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    /// The underlying token store
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Mount-time check for a protected view.
    ///
    /// Anonymous sessions and role mismatches yield the [`Redirect`] the
    /// view should navigate to instead of loading data. This check is
    /// advisory UX only; the backend re-validates the token on every
    /// request, and a 401 there is the real enforcement boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use dojoadmin::session::{MemoryStore, Role, SessionContext, TokenStore};
    /// use std::sync::Arc;
    ///
    /// let session = SessionContext::new(TokenStore::new(Arc::new(MemoryStore::new())));
    /// let redirect = session.guard(Some(Role::Coach)).unwrap_err();
    /// assert_eq!(redirect.route, "/coach/login");
    /// ```
    pub fn guard(&self, required_role: Option<Role>) -> Result<UserProfile, Redirect> {
        match self.store.session() {
            Session::Authenticated { user, .. } => match required_role {
                Some(required) if user.role != required => {
                    Err(Redirect::to(required.login_route()))
                }
                _ => Ok(user),
            },
            Session::Anonymous => {
                let route = required_role
                    .map(|role| role.login_route())
                    .unwrap_or("/login");
                Err(Redirect::to(route))
            }
        }
    }

    /// React to a backend 401: clear the stored session and report where
    /// the user should be sent to log back in.
    pub fn teardown(&self) -> Redirect {
        let route = self
            .store
            .user()
            .map(|user| user.role.login_route())
            .unwrap_or("/login");
        warn!("session rejected by backend, clearing stored credentials");
        self.store.clear();
        Redirect::to(route)
    }
}
