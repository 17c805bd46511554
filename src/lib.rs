//! DojoAdmin Rust Client Library
//!
//! A Rust client for the DojoAdmin school management backend, covering
//! session handling, the authenticated REST surface (branches, coaches,
//! courses, students, payments, attendance, reports), debounced global
//! search, client-side list filtering and pagination, form validation,
//! and CSV export.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod form;
pub mod list;
pub mod resource;
pub mod search;
pub mod session;

use reqwest::Client;
use std::sync::Arc;

use crate::api::{
    AttendanceRecord, Branch, Coach, Course, EntityClient, Payment, ReportsClient, Student,
};
use crate::auth::AuthClient;
use crate::config::ClientOptions;
use crate::search::{DebouncedSearch, HttpSearchBackend};
use crate::session::{MemoryStore, SessionContext, SessionStore, TokenStore};

/// The main entry point for the DojoAdmin client
pub struct DojoAdmin {
    /// The base URL of the backend
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Session state shared by every sub-client
    session: SessionContext,
    /// Client options
    pub options: ClientOptions,
}

impl DojoAdmin {
    /// Create a new client with an in-memory session store
    ///
    /// # Example
    ///
    /// ```
    /// use dojoadmin::DojoAdmin;
    ///
    /// let client = DojoAdmin::new("https://api.dojoadmin.example");
    /// ```
    pub fn new(url: &str) -> Self {
        Self::new_with_options(url, Arc::new(MemoryStore::new()), ClientOptions::default())
    }

    /// Create a new client with a custom session store and options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dojoadmin::{config::ClientOptions, session::FileStore, DojoAdmin};
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(FileStore::open("session.json"));
    /// let client = DojoAdmin::new_with_options(
    ///     "https://api.dojoadmin.example",
    ///     store,
    ///     ClientOptions::default(),
    /// );
    /// ```
    pub fn new_with_options(
        url: &str,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> Self {
        let http_client = Client::new();
        let session = SessionContext::new(TokenStore::new(store));

        Self {
            url: url.trim_end_matches('/').to_string(),
            http_client,
            session,
            options,
        }
    }

    /// The shared session context: guard checks, token store, teardown
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Client for the login and logout endpoints
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// CRUD client for branches
    pub fn branches(&self) -> EntityClient<Branch> {
        self.entity("branches")
    }

    /// CRUD client for coaches
    pub fn coaches(&self) -> EntityClient<Coach> {
        self.entity("coaches")
    }

    /// CRUD client for courses
    pub fn courses(&self) -> EntityClient<Course> {
        self.entity("courses")
    }

    /// CRUD client for students
    pub fn students(&self) -> EntityClient<Student> {
        self.entity("students")
    }

    /// CRUD client for payments
    pub fn payments(&self) -> EntityClient<Payment> {
        self.entity("payments")
    }

    /// CRUD client for attendance records
    pub fn attendance(&self) -> EntityClient<AttendanceRecord> {
        self.entity("attendance")
    }

    /// Read-only client for the reports endpoints
    pub fn reports(&self) -> ReportsClient {
        ReportsClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// A debounced driver for the header search box, wired to the
    /// backend's aggregate search endpoint
    pub fn search(&self) -> DebouncedSearch {
        let backend = HttpSearchBackend::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            &self.options,
        );
        DebouncedSearch::new(Arc::new(backend), &self.options)
    }

    fn entity<T: serde::Serialize + serde::de::DeserializeOwned>(
        &self,
        resource: &'static str,
    ) -> EntityClient<T> {
        EntityClient::new(
            &self.url,
            resource,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::resource::Resource;
    pub use crate::session::{Redirect, Role, Session};
    pub use crate::DojoAdmin;
}
