//! People service.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenPair;
use crate::client::{ClientInner, Endpoint};
use crate::models::{PersonId, QueryParams};
use crate::Result;

const PEOPLE: Endpoint = Endpoint::get("/people");
const CREATE_PERSON: Endpoint = Endpoint::post("/people");

/// Service for person operations.
///
/// A person holds the identity details (name, address, SIN, ...) attached to
/// a user or to a joint account holder.
pub struct PeopleService {
    inner: Arc<ClientInner>,
}

impl PeopleService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a person.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        person: &B,
    ) -> Result<Value> {
        self.inner
            .send(&CREATE_PERSON, Some(tokens.access_token.as_str()), person)
            .await
    }

    /// List people.
    pub async fn list(&self, tokens: &TokenPair, query: Option<&QueryParams>) -> Result<Value> {
        self.inner
            .fetch(&PEOPLE, Some(tokens.access_token.as_str()), query)
            .await
    }

    /// Get a person by ID.
    ///
    /// The API serves this lookup as `POST /people/{id}` with no body.
    pub async fn get(&self, tokens: &TokenPair, person_id: &PersonId) -> Result<Value> {
        let endpoint = Endpoint::resource(Method::POST, "/people", person_id.as_str())?;
        self.inner
            .fetch(&endpoint, Some(tokens.access_token.as_str()), None)
            .await
    }

    /// Update a person.
    ///
    /// `changes` is sent as-is; only the fields present are modified.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        tokens: &TokenPair,
        person_id: &PersonId,
        changes: &B,
    ) -> Result<Value> {
        let endpoint = Endpoint::resource(Method::PATCH, "/people", person_id.as_str())?;
        self.inner
            .send(&endpoint, Some(tokens.access_token.as_str()), changes)
            .await
    }
}
