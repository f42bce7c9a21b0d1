//! Remote data gateway.
//!
//! Thin typed client over the backend REST API. Every call attaches the
//! session's bearer token - or short-circuits with an authorization error
//! before any network I/O when no token is present - then normalizes the
//! heterogeneous response shapes and maps transport/status failures into
//! the crate error taxonomy. The blocking HTTP agent runs inside
//! `spawn_blocking` so the surface stays async.

/// HTTP failure mapping into the crate error taxonomy
pub mod http;
/// Response-shape normalization
pub mod normalize;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::backend::BackendConfig;
use crate::errors::{Error, Result};
use crate::models::{
    Budget, BudgetRequest, CategoryDetails, Client, DepartmentDetails, Invoice, RecordId,
    Transaction, UserDetails, Viewer,
};

use http::Op;

/// One REST entity surface: its URL path segment, the key its list payload
/// may be nested under, and the labels error messages use.
#[derive(Debug, Clone, Copy)]
pub struct EntityEndpoint {
    /// URL path segment, e.g. `"budget-requests"`
    pub path: &'static str,
    /// JSON key the list may be nested under, e.g. `"requests"`
    pub key: &'static str,
    /// Singular label for mutation error messages
    pub singular: &'static str,
    /// Plural label for fetch/transition error messages
    pub plural: &'static str,
}

/// Budget request endpoints.
pub const BUDGET_REQUESTS: EntityEndpoint = EntityEndpoint {
    path: "budget-requests",
    key: "requests",
    singular: "budget request",
    plural: "budget requests",
};
/// Transaction endpoints.
pub const TRANSACTIONS: EntityEndpoint = EntityEndpoint {
    path: "transactions",
    key: "transactions",
    singular: "transaction",
    plural: "transactions",
};
/// Invoice endpoints.
pub const INVOICES: EntityEndpoint = EntityEndpoint {
    path: "invoices",
    key: "invoices",
    singular: "invoice",
    plural: "invoices",
};
/// Client endpoints.
pub const CLIENTS: EntityEndpoint = EntityEndpoint {
    path: "clients",
    key: "clients",
    singular: "client",
    plural: "clients",
};
/// User endpoints.
pub const USERS: EntityEndpoint = EntityEndpoint {
    path: "users",
    key: "users",
    singular: "user",
    plural: "users",
};
/// Department endpoints.
pub const DEPARTMENTS: EntityEndpoint = EntityEndpoint {
    path: "departments",
    key: "departments",
    singular: "department",
    plural: "departments",
};
/// Category endpoints.
pub const CATEGORIES: EntityEndpoint = EntityEndpoint {
    path: "categories",
    key: "categories",
    singular: "category",
    plural: "categories",
};
/// Budget endpoints.
pub const BUDGETS: EntityEndpoint = EntityEndpoint {
    path: "budgets",
    key: "budgets",
    singular: "budget",
    plural: "budgets",
};

impl EntityEndpoint {
    const fn fetch_op(self) -> Op {
        Op {
            gerund: "fetching",
            base: "fetch",
            entity: self.plural,
        }
    }

    const fn create_op(self) -> Op {
        Op {
            gerund: "creating",
            base: "create",
            entity: self.singular,
        }
    }

    const fn update_op(self) -> Op {
        Op {
            gerund: "updating",
            base: "update",
            entity: self.singular,
        }
    }

    const fn delete_op(self) -> Op {
        Op {
            gerund: "deleting",
            base: "delete",
            entity: self.singular,
        }
    }
}

/// The current session as handed over by the host shell: the bearer token
/// read from the `access_token` cookie, plus the resolved viewer identity.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token; `None` or empty means the session is not authorized
    pub access_token: Option<String>,
    /// The session's viewer identity
    pub viewer: Viewer,
}

impl Session {
    /// Builds a session, normalizing an empty token to "absent".
    #[must_use]
    pub fn new(access_token: Option<String>, viewer: Viewer) -> Self {
        let access_token = access_token.filter(|token| !token.trim().is_empty());
        Self {
            access_token,
            viewer,
        }
    }
}

/// Typed client over the backend REST API.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    agent: ureq::Agent,
    session: Session,
}

impl Gateway {
    /// Builds a gateway from backend configuration and the current session.
    #[must_use]
    pub fn new(config: &BackendConfig, session: Session) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            agent,
            session,
        }
    }

    /// The session this gateway authenticates as.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The token every call attaches, or the local authorization
    /// short-circuit - no network call is attempted without one.
    fn bearer(&self) -> Result<String> {
        self.session
            .access_token
            .clone()
            .ok_or(Error::Authorization)
    }

    /// Fetches all budget requests.
    pub async fn fetch_requests(&self) -> Result<Vec<BudgetRequest>> {
        self.fetch_all(BUDGET_REQUESTS).await
    }

    /// Fetches all transactions.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        self.fetch_all(TRANSACTIONS).await
    }

    /// Fetches all invoices.
    pub async fn fetch_invoices(&self) -> Result<Vec<Invoice>> {
        self.fetch_all(INVOICES).await
    }

    /// Fetches all clients.
    pub async fn fetch_clients(&self) -> Result<Vec<Client>> {
        self.fetch_all(CLIENTS).await
    }

    /// Fetches all users.
    pub async fn fetch_users(&self) -> Result<Vec<UserDetails>> {
        self.fetch_all(USERS).await
    }

    /// Fetches all departments.
    pub async fn fetch_departments(&self) -> Result<Vec<DepartmentDetails>> {
        self.fetch_all(DEPARTMENTS).await
    }

    /// Fetches all categories.
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryDetails>> {
        self.fetch_all(CATEGORIES).await
    }

    /// Fetches all budgets.
    pub async fn fetch_budgets(&self) -> Result<Vec<Budget>> {
        self.fetch_all(BUDGETS).await
    }

    async fn fetch_all<T: DeserializeOwned>(&self, endpoint: EntityEndpoint) -> Result<Vec<T>> {
        let op = endpoint.fetch_op();
        let url = format!("{}/api/{}/all", self.base_url, endpoint.path);
        let body = self.send_expect_json(url, op).await?;
        let values = normalize::normalize_collection(&body, endpoint.key);
        Ok(normalize::decode_records(values, endpoint.key))
    }

    /// Creates one record via `POST /api/{entity}/create`.
    pub async fn create_record(
        &self,
        endpoint: EntityEndpoint,
        payload: &impl Serialize,
    ) -> Result<()> {
        let op = endpoint.create_op();
        let url = format!("{}/api/{}/create", self.base_url, endpoint.path);
        self.send_ignore_body("POST", url, op, Some(serde_json::to_value(payload)?))
            .await
    }

    /// Updates one record via `PUT /api/{entity}/{id}`.
    pub async fn update_record(
        &self,
        endpoint: EntityEndpoint,
        id: &RecordId,
        payload: &impl Serialize,
    ) -> Result<()> {
        let op = endpoint.update_op();
        let url = format!("{}/api/{}/{}", self.base_url, endpoint.path, id);
        self.send_ignore_body("PUT", url, op, Some(serde_json::to_value(payload)?))
            .await
    }

    /// Deletes one record via `DELETE /api/{entity}/{id}`.
    pub async fn delete_record(&self, endpoint: EntityEndpoint, id: &RecordId) -> Result<()> {
        let op = endpoint.delete_op();
        let url = format!("{}/api/{}/{}", self.base_url, endpoint.path, id);
        self.send_ignore_body("DELETE", url, op, None).await
    }

    /// Approves a budget request via `PUT /api/budget-requests/{id}/approve`.
    pub async fn approve_request(&self, id: &RecordId) -> Result<()> {
        let op = Op {
            gerund: "approving",
            base: "approve",
            entity: BUDGET_REQUESTS.plural,
        };
        let url = format!("{}/api/{}/{}/approve", self.base_url, BUDGET_REQUESTS.path, id);
        self.send_ignore_body("PUT", url, op, None).await
    }

    /// Rejects a budget request via `PUT /api/budget-requests/{id}/reject`.
    pub async fn reject_request(&self, id: &RecordId) -> Result<()> {
        let op = Op {
            gerund: "rejecting",
            base: "reject",
            entity: BUDGET_REQUESTS.plural,
        };
        let url = format!("{}/api/{}/{}/reject", self.base_url, BUDGET_REQUESTS.path, id);
        self.send_ignore_body("PUT", url, op, None).await
    }

    /// Runs a request on the blocking agent and parses the JSON body.
    /// A success status with an unparseable body is the generic error -
    /// the caller expected data.
    async fn send_expect_json(&self, url: String, op: Op) -> Result<Value> {
        let token = self.bearer()?;
        let agent = self.agent.clone();
        debug!(%url, "gateway fetch");
        tokio::task::spawn_blocking(move || -> Result<Value> {
            let response = agent
                .get(&url)
                .set("Authorization", &format!("Bearer {token}"))
                .set("Accept", "application/json")
                .call()
                .map_err(|error| http::map_ureq_error(op, error))?;
            response.into_json::<Value>().map_err(|_| Error::Gateway {
                verb: op.gerund,
                entity: op.entity,
            })
        })
        .await
        .map_err(|_| Error::Gateway {
            verb: op.gerund,
            entity: op.entity,
        })?
    }

    /// Runs a mutating request on the blocking agent. The response body is
    /// irrelevant on success; the next full refresh carries the new state.
    async fn send_ignore_body(
        &self,
        method: &'static str,
        url: String,
        op: Op,
        payload: Option<Value>,
    ) -> Result<()> {
        let token = self.bearer()?;
        let agent = self.agent.clone();
        debug!(method, %url, "gateway mutation");
        tokio::task::spawn_blocking(move || -> Result<()> {
            let request = agent
                .request(method, &url)
                .set("Authorization", &format!("Bearer {token}"))
                .set("Accept", "application/json");
            let outcome = match payload {
                Some(json) => request.send_json(json),
                None => request.call(),
            };
            outcome.map_err(|error| http::map_ureq_error(op, error))?;
            Ok(())
        })
        .await
        .map_err(|_| Error::Gateway {
            verb: op.gerund,
            entity: op.entity,
        })?
    }
}
