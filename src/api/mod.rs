//! REST resource clients
//!
//! Every entity endpoint shares one request path: attach the bearer token
//! when present, classify the response status, and tear the session down
//! on a 401 so the next guard check redirects to login.

mod types;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};
use crate::session::SessionContext;

pub use types::*;

/// Generic CRUD client for one `/api/<resource>` collection
pub struct EntityClient<T> {
    url: String,
    resource: &'static str,
    client: Client,
    session: SessionContext,
    options: ClientOptions,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityClient<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(
        url: &str,
        resource: &'static str,
        client: Client,
        session: SessionContext,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            resource,
            client,
            session,
            options,
            _marker: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.url, self.resource)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/api/{}/{}", self.url, self.resource, id)
    }

    fn authorized<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .bearer(self.session.store().token().as_deref())
            .timeout(self.options.request_timeout)
    }

    /// 401 is the backend telling us the stored token is no longer good;
    /// clear it so the next guard check sends the user to login.
    fn check<R>(&self, result: Result<R, Error>) -> Result<R, Error> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                self.session.teardown();
            }
        }
        result
    }

    /// Fetch the whole collection
    pub async fn list(&self) -> Result<Vec<T>, Error> {
        let url = self.collection_url();
        let result = self.authorized(Fetch::get(&self.client, &url)).execute().await;
        self.check(result)
    }

    /// Fetch one item by id
    pub async fn get(&self, id: &str) -> Result<T, Error> {
        let url = self.item_url(id);
        let result = self.authorized(Fetch::get(&self.client, &url)).execute().await;
        self.check(result)
    }

    /// Create an item
    pub async fn create(&self, value: &T) -> Result<T, Error> {
        let url = self.collection_url();
        let result = self
            .authorized(Fetch::post(&self.client, &url))
            .json(value)?
            .execute()
            .await;
        self.check(result)
    }

    /// Replace an item
    pub async fn update(&self, id: &str, value: &T) -> Result<T, Error> {
        let url = self.item_url(id);
        let result = self
            .authorized(Fetch::put(&self.client, &url))
            .json(value)?
            .execute()
            .await;
        self.check(result)
    }

    /// Delete an item
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let url = self.item_url(id);
        let result = self
            .authorized(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await;
        self.check(result)
    }
}

/// Read-only client for the reports endpoints
pub struct ReportsClient {
    url: String,
    client: Client,
    session: SessionContext,
    options: ClientOptions,
}

impl ReportsClient {
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionContext,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    fn authorized<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .bearer(self.session.store().token().as_deref())
            .timeout(self.options.request_timeout)
    }

    fn check<R>(&self, result: Result<R, Error>) -> Result<R, Error> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                self.session.teardown();
            }
        }
        result
    }

    /// Aggregate dashboard figures
    pub async fn summary(&self) -> Result<ReportSummary, Error> {
        let url = format!("{}/api/reports/summary", self.url);
        let result = self.authorized(Fetch::get(&self.client, &url)).execute().await;
        self.check(result)
    }

    /// Revenue per calendar month
    pub async fn monthly_revenue(&self) -> Result<Vec<RevenuePoint>, Error> {
        let url = format!("{}/api/reports/revenue", self.url);
        let result = self.authorized(Fetch::get(&self.client, &url)).execute().await;
        self.check(result)
    }
}
