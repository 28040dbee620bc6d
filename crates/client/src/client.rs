//! HTTP transport for the external reconciliation service.

use std::time::Duration;

use cashrecon_core::entry::NewTransaction;
use cashrecon_core::ledger::{Employee, RawTransaction, TransactionKind};
use cashrecon_shared::config::ApiConfig;
use cashrecon_shared::types::EmployeeId;
use cashrecon_shared::{LoginRequest, LoginResponse, Session, User, VerifyResponse};
use reqwest::{Client, RequestBuilder, Response, StatusCode, header::AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::wire::{
    BulkCollections, BulkDeposits, EmployeeRecord, ErrorBody, NewTransactionRecord, PaymentRecord,
    TransactionRecord,
};

/// Thin typed wrapper over the service's REST endpoints.
///
/// Every authenticated call takes the [`Session`] explicitly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`: exchanges credentials for an unverified session.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let url = self.url("/auth/login");
        let response: LoginResponse = self.send(&url, self.http.post(&url).json(request)).await?;
        Ok(Session::from_token(response.token))
    }

    /// `GET /auth/verify`: returns the user the session belongs to.
    pub async fn verify(&self, session: &Session) -> Result<User, ClientError> {
        let response: VerifyResponse = self.get(session, "/auth/verify").await?;
        Ok(response.user)
    }

    /// `GET /employees`.
    pub async fn employees(&self, session: &Session) -> Result<Vec<Employee>, ClientError> {
        let records: Vec<EmployeeRecord> = self.get(session, "/employees").await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    /// `GET /employees/{id}`.
    pub async fn employee(
        &self,
        session: &Session,
        id: &EmployeeId,
    ) -> Result<Employee, ClientError> {
        let record: EmployeeRecord = self.get(session, &format!("/employees/{id}")).await?;
        Ok(record.into())
    }

    /// `GET /collections`: every collection, in service order.
    pub async fn collections(&self, session: &Session) -> Result<Vec<RawTransaction>, ClientError> {
        self.transactions(session, "/collections", TransactionKind::Collection)
            .await
    }

    /// `GET /deposits`: every deposit, in service order.
    pub async fn deposits(&self, session: &Session) -> Result<Vec<RawTransaction>, ClientError> {
        self.transactions(session, "/deposits", TransactionKind::Deposit)
            .await
    }

    /// `GET /reports/payments/{id}`: one employee's interleaved history.
    pub async fn payment_history(
        &self,
        session: &Session,
        id: &EmployeeId,
    ) -> Result<Vec<PaymentRecord>, ClientError> {
        self.get(session, &format!("/reports/payments/{id}")).await
    }

    /// `POST /collections/bulk`.
    pub async fn submit_collections(
        &self,
        session: &Session,
        records: &[NewTransaction],
    ) -> Result<(), ClientError> {
        let body = BulkCollections {
            collections: records.iter().map(NewTransactionRecord::from).collect(),
        };
        self.post(session, "/collections/bulk", &body).await
    }

    /// `POST /deposits/bulk`.
    pub async fn submit_deposits(
        &self,
        session: &Session,
        records: &[NewTransaction],
    ) -> Result<(), ClientError> {
        let body = BulkDeposits {
            deposits: records.iter().map(NewTransactionRecord::from).collect(),
        };
        self.post(session, "/deposits/bulk", &body).await
    }

    async fn transactions(
        &self,
        session: &Session,
        path: &str,
        kind: TransactionKind,
    ) -> Result<Vec<RawTransaction>, ClientError> {
        let records: Vec<TransactionRecord> = self.get(session, path).await?;
        Ok(records.into_iter().map(|r| r.into_raw(kind)).collect())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, session.authorization());
        self.send(&url, request).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let url = self.url(path);
        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, session.authorization())
            .json(body);
        let response = self.execute(&url, request).await?;
        debug!(url = %url, status = %response.status(), "POST accepted");
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.execute(url, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(url, e))?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn execute(&self, url: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(url, e))?;

        let status = response.status();
        debug!(url = %url, status = %status, "Service responded");
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(url.to_string()),
            _ => ClientError::Status {
                status: status.as_u16(),
                message,
            },
        })
    }
}
