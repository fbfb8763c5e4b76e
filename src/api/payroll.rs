use super::{ApiConfig, Tokens};
use crate::libs::attendance::PunchEvent;
use crate::libs::employee::{
    Allowance, BulkGeneratePayslipsRequest, Deduction, Employee, GeneratePayslipsRequest, Leave, Payslip,
    PayslipStatus, PayslipStatusUpdate,
};
use crate::libs::error::PayrollError;
use crate::libs::formatter::format_local_date;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

const LOGIN_URL: &str = "auth/login/";
const LOGOUT_URL: &str = "auth/logout/";
const VERIFY_URL: &str = "auth/verify/";
const ATTENDANCE_URL: &str = "attendance/";
const EMPLOYEES_URL: &str = "payroll/employees/";
const ALLOWANCES_URL: &str = "payroll/allowances/";
const DEDUCTIONS_URL: &str = "payroll/deductions/";
const LEAVES_URL: &str = "payroll/leaves/";
const PAYSLIPS_URL: &str = "payroll/payslips/";
const GENERATE_PAYSLIPS_URL: &str = "payroll/payslips/generate/";
const BULK_GENERATE_PAYSLIPS_URL: &str = "payroll/payslips/bulk-generate/";

#[derive(Serialize)]
struct LoginCredentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LogoutRequest {
    refresh: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// REST client for the payroll backend.
///
/// Every request carries the provider's access token when there is one.
/// A `401` runs the unauthorized handler, clears the stored credentials and
/// fails with [`PayrollError::Unauthorized`]; requests are never retried.
pub struct PayrollApi {
    client: Client,
    config: ApiConfig,
}

impl PayrollApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.credentials.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn unauthorized(&self) {
        if let Some(handler) = &self.config.on_unauthorized {
            handler();
        }
        if let Err(e) = self.config.credentials.clear() {
            warn!(error = %e, "failed to clear credentials");
        }
    }

    async fn check(&self, res: Response) -> Result<Response> {
        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            self.unauthorized();
            return Err(PayrollError::Unauthorized.into());
        }
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %message, "request failed");
            return Err(PayrollError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }
        Ok(res)
    }

    /// `GET` `path` with `query` and decodes the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(path, "GET");
        let request = self.authorized(self.client.get(self.url(path)).query(query));
        let res = self.check(request.send().await?).await?;
        Ok(res.json::<T>().await?)
    }

    /// `PATCH` `body` as JSON to `path` and decodes the JSON response.
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!(path, "PATCH");
        let request = self.authorized(self.client.patch(self.url(path)).json(body));
        let res = self.check(request.send().await?).await?;
        Ok(res.json::<T>().await?)
    }

    /// `DELETE` `path`; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let request = self.authorized(self.client.delete(self.url(path)));
        self.check(request.send().await?).await?;
        Ok(())
    }

    /// `POST` `body` as JSON to `path` and decodes the JSON response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!(path, "POST");
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let res = self.check(request.send().await?).await?;
        Ok(res.json::<T>().await?)
    }

    /// Exchanges a username and password for tokens and stores them.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse = self.post(LOGIN_URL, &LoginCredentials { username, password }).await?;
        self.config.credentials.store(&Tokens {
            access: response.access.clone(),
            refresh: response.refresh.clone(),
        })?;
        Ok(response)
    }

    /// Revokes the refresh token on the backend when there is one.
    ///
    /// Local credentials are cleared whatever the request's outcome; its
    /// error, if any, is returned afterwards.
    pub async fn logout(&self) -> Result<()> {
        let result = match self.config.credentials.refresh_token() {
            Some(refresh) => self
                .post::<_, serde_json::Value>(LOGOUT_URL, &LogoutRequest { refresh })
                .await
                .map(|_| ()),
            None => Ok(()),
        };
        self.config.credentials.clear()?;
        result
    }

    /// Checks the stored session with the backend.
    ///
    /// Returns `None` without a request when there is no access token. Any
    /// failure clears the stored credentials before it is returned.
    pub async fn verify(&self) -> Result<Option<VerifyResponse>> {
        if self.config.credentials.access_token().is_none() {
            return Ok(None);
        }

        match self.get(VERIFY_URL, &[]).await {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                if let Err(clear_err) = self.config.credentials.clear() {
                    warn!(error = %clear_err, "failed to clear credentials");
                }
                Err(e)
            }
        }
    }

    pub async fn attendance(&self, date: NaiveDate) -> Result<Vec<PunchEvent>> {
        self.get(ATTENDANCE_URL, &[("date", format_local_date(&date))]).await
    }

    pub async fn employees(&self) -> Result<Vec<Employee>> {
        self.get(EMPLOYEES_URL, &[]).await
    }

    pub async fn allowances(&self, employee_id: u64) -> Result<Vec<Allowance>> {
        self.get(ALLOWANCES_URL, &[("employee_id", employee_id.to_string())]).await
    }

    pub async fn deductions(&self, employee_id: u64) -> Result<Vec<Deduction>> {
        self.get(DEDUCTIONS_URL, &[("employee_id", employee_id.to_string())]).await
    }

    pub async fn leaves(&self, employee_id: u64, start: NaiveDate, end: NaiveDate) -> Result<Vec<Leave>> {
        self.get(
            LEAVES_URL,
            &[
                ("employee_id", employee_id.to_string()),
                ("start_date", format_local_date(&start)),
                ("end_date", format_local_date(&end)),
            ],
        )
        .await
    }

    pub async fn payslips(&self) -> Result<Vec<Payslip>> {
        self.get(PAYSLIPS_URL, &[]).await
    }

    pub async fn payslip(&self, id: u64) -> Result<Payslip> {
        self.get(&payslip_path(id), &[]).await
    }

    /// Moves a payslip to `status`; approving also stamps `approved_at`.
    pub async fn update_payslip_status(&self, id: u64, status: PayslipStatus) -> Result<Payslip> {
        self.patch(&payslip_path(id), &PayslipStatusUpdate::new(status, Utc::now())).await
    }

    pub async fn delete_payslip(&self, id: u64) -> Result<()> {
        self.delete(&payslip_path(id)).await
    }

    /// Asks the backend to generate payslips. The response body is returned
    /// undecoded.
    pub async fn generate_payslips(&self, request: &GeneratePayslipsRequest) -> Result<serde_json::Value> {
        self.post(GENERATE_PAYSLIPS_URL, request).await
    }

    /// Generates payslips for the given employees, or for every active
    /// employee when the request names none. The response is returned
    /// undecoded.
    pub async fn bulk_generate_payslips(&self, request: &BulkGeneratePayslipsRequest) -> Result<serde_json::Value> {
        self.post(BULK_GENERATE_PAYSLIPS_URL, request).await
    }
}

fn payslip_path(id: u64) -> String {
    format!("{}{}/", PAYSLIPS_URL, id)
}
