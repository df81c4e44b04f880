use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::services::http::{body_message, NotSuccessResponseInfo, ResponseExt};

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct SignUpRequest {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "verNumber")]
    pub ver_number: String,
    pub password: String,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("ver_number", &self.ver_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationCodeRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Request failed: {0}")]
    Http(String),
    #[error("Server responded with status {status_code}: {text}")]
    Rejected { status_code: u16, text: String },
}

impl SignupError {
    /// Message sent back by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { text, .. } if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SignupError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

impl From<NotSuccessResponseInfo> for SignupError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Rejected {
            status_code: info.status_code,
            text: body_message(&info.text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignupClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, SignupError> {
        let url = format!("{}/api/{}", self.base_url, endpoint);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    /// Asks the backend to text a verification code to `phone_number`.
    /// Returns the confirmation message of the server.
    pub async fn request_verification_code(
        &self,
        phone_number: &str,
    ) -> Result<String, SignupError> {
        let request = VerificationCodeRequest {
            phone_number: phone_number.to_string(),
        };

        let response = self
            .post_json("sms", &request)
            .await?
            .check_success()
            .await?;

        Ok(body_message(&response.text().await?))
    }

    /// Registers a new user. Returns the confirmation message of the server.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<String, SignupError> {
        let response = self
            .post_json("user/signup", &request)
            .await?
            .check_success()
            .await?;

        Ok(body_message(&response.text().await?))
    }
}
