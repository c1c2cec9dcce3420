//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use url::Url;

use crate::domain::{
    BalanceInfo, DeliveryReport, PhoneListUpload, ReportQuery, SendReceipt, SendSms, SenderId,
    UploadedPhones, ValidationError,
};
use crate::transport::{self, Envelope};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_file<'a>(
        &'a self,
        url: &'a str,
        file_name: String,
        contents: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn finish(response: reqwest::Response) -> Result<HttpResponse, BoxError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            Self::finish(response).await
        })
    }

    fn post_file<'a>(
        &'a self,
        url: &'a str,
        file_name: String,
        contents: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let part = reqwest::multipart::Part::bytes(contents).file_name(file_name);
            let form = reqwest::multipart::Form::new().part(PhoneListUpload::FIELD, part);
            let response = self.client.post(url).multipart(form).send().await?;
            Self::finish(response).await
        })
    }

    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            Self::finish(response).await
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClient`].
///
/// A call fails when the HTTP status is non-2xx **or** the response's
/// `success` flag is false; both map to errors here. Server-supplied error
/// text is preserved verbatim in [`SmsError::Api`].
pub enum SmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-2xx HTTP status without a structured error body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Structured failure reported by the API (`success: false` or a
    /// non-2xx status with an `{"error": ...}` body).
    #[error("API error: {message}")]
    Api {
        message: String,
        http_status: Option<u16>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The configured base URL or a derived endpoint URL is invalid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClient`].
///
/// Use this when you need a request timeout, a user-agent override, or a
/// default sender id applied to sends that do not carry one.
pub struct SmsClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_sender: Option<SenderId>,
}

impl SmsClientBuilder {
    /// Create a builder for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
            default_sender: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sender id applied when a send request has none of its own.
    pub fn default_sender(mut self, sender: SenderId) -> Self {
        self.default_sender = Some(sender);
        self
    }

    /// Build an [`SmsClient`].
    pub fn build(self) -> Result<SmsClient, SmsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsError::Transport(Box::new(err)))?;

        Ok(SmsClient {
            base_url: normalize_base_url(self.base_url),
            default_sender: self.default_sender,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_owned()
}

#[derive(Clone)]
/// Client for the SMS web backend.
///
/// Wraps the four `/api/*` endpoints: send, phone-list upload, delivery
/// reports, and balance. Every call is a single round trip with no retries;
/// callers decide whether to resubmit.
pub struct SmsClient {
    base_url: String,
    default_sender: Option<SenderId>,
    http: Arc<dyn HttpTransport>,
}

impl SmsClient {
    /// Create a client with default HTTP settings.
    ///
    /// For timeouts, user-agent, or a default sender, use
    /// [`SmsClient::builder`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            default_sender: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(base_url: impl Into<String>) -> SmsClientBuilder {
        SmsClientBuilder::new(base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Send a message to one or more recipients (`POST /api/send-sms`).
    ///
    /// A request without a sender picks up the builder's default sender,
    /// when one was configured.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendReceipt, SmsError> {
        let request = request.or_sender(self.default_sender.as_ref());
        let body =
            transport::encode_send_body(&request).map_err(|err| SmsError::Parse(Box::new(err)))?;

        debug!(
            "sending sms to {} recipient(s)",
            request.recipients().len()
        );
        let response = self
            .http
            .post_json(&self.endpoint("send-sms"), body)
            .await
            .map_err(SmsError::Transport)?;
        let body = check_http(response)?;

        let envelope = transport::decode_send_response(&body)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;
        unwrap_envelope(envelope)
    }

    /// Upload a phone-list file and get back the numbers the server
    /// extracted from it (`POST /api/upload-phones`).
    pub async fn upload_phones(
        &self,
        upload: PhoneListUpload,
    ) -> Result<UploadedPhones, SmsError> {
        let (file_name, contents) = upload.into_parts();

        debug!("uploading phone list {file_name} ({} bytes)", contents.len());
        let response = self
            .http
            .post_file(&self.endpoint("upload-phones"), file_name, contents)
            .await
            .map_err(SmsError::Transport)?;
        let body = check_http(response)?;

        let envelope = transport::decode_upload_response(&body)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;
        unwrap_envelope(envelope)
    }

    /// Fetch delivery reports, optionally filtered by bulk id
    /// (`GET /api/reports`).
    pub async fn get_reports(
        &self,
        query: ReportQuery,
    ) -> Result<Vec<DeliveryReport>, SmsError> {
        let params = transport::encode_reports_query(&query);
        let url = Url::parse_with_params(&self.endpoint("reports"), &params)?;

        let response = self
            .http
            .get(url.as_str())
            .await
            .map_err(SmsError::Transport)?;
        let body = check_http(response)?;

        let envelope = transport::decode_reports_response(&body)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;
        unwrap_envelope(envelope)
    }

    /// Fetch account balance details (`GET /api/balance`).
    pub async fn get_balance(&self) -> Result<BalanceInfo, SmsError> {
        let response = self
            .http
            .get(&self.endpoint("balance"))
            .await
            .map_err(SmsError::Transport)?;
        let body = check_http(response)?;

        let envelope = transport::decode_balance_response(&body)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;
        unwrap_envelope(envelope)
    }
}

fn check_http(response: HttpResponse) -> Result<String, SmsError> {
    if (200..=299).contains(&response.status) {
        return Ok(response.body);
    }

    // Error statuses may still carry a structured {"error": ...} body whose
    // message must reach the user verbatim.
    if let Some(message) = transport::probe_error_message(&response.body) {
        warn!("api returned {}: {message}", response.status);
        return Err(SmsError::Api {
            message,
            http_status: Some(response.status),
        });
    }

    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    Err(SmsError::HttpStatus {
        status: response.status,
        body,
    })
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, SmsError> {
    if !envelope.success {
        let message = envelope
            .error
            .unwrap_or_else(|| "request failed without an error message".to_owned());
        warn!("api reported failure: {message}");
        return Err(SmsError::Api {
            message,
            http_status: None,
        });
    }
    envelope
        .data
        .ok_or_else(|| SmsError::Parse("successful response carried no payload".into()))
}
