//! Session and user types

use serde::{Deserialize, Serialize};

/// Dashboard role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    BranchManager,
    Coach,
    Student,
}

impl Role {
    /// The login route a view should navigate to when this role's
    /// dashboard is accessed without a valid session.
    pub fn login_route(&self) -> &'static str {
        match self {
            Role::Superadmin => "/superadmin/login",
            Role::BranchManager => "/branch-manager/login",
            Role::Coach => "/coach/login",
            Role::Student => "/student/login",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::BranchManager => "branch_manager",
            Role::Coach => "coach",
            Role::Student => "student",
        }
    }
}

/// Profile of the signed-in user, as returned by the backend at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user ID
    pub id: String,

    /// The dashboard role
    pub role: Role,

    /// The user's full name
    pub full_name: String,

    /// The user's email address
    pub email: String,

    /// The user's phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The branch the user belongs to, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}

/// Session state as read from the token store.
///
/// A session is either fully present or fully absent; a token without a
/// profile (or the reverse) reads as [`Session::Anonymous`].
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated { token: String, user: UserProfile },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The access token, when authenticated
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    /// The user profile, when authenticated
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// A navigation target returned when a view may not be shown.
///
/// The client never navigates by itself; callers route the user to
/// `route` with whatever navigation facility the embedding app uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: String,
}

impl Redirect {
    pub fn to(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }
}
