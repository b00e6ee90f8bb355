//! The single request helper every resource namespace is built on.
//!
//! # Design
//! `ApiClient` holds the base URL and a `Transport`, nothing else. A call is
//! split into three steps: `build_request` (pure), `Transport::execute`
//! (I/O), and `parse_envelope` (pure). Only the middle step touches the
//! network, so the other two are tested without a server.
//!
//! Failures are logged here, once, and then always returned to the caller.
//! There is no retry, backoff or timeout policy; that belongs to the
//! transport.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::envelope::{parse_envelope, Envelope};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::resources::{
    CareersApi, CaseStudiesApi, ContactApi, ProjectsApi, ResumesApi, ServicesApi, TestimonialsApi,
};
use crate::transport::{Transport, UreqTransport};

const CONTENT_TYPE: &str = "content-type";
const JSON: &str = "application/json";

/// Per-call options: method, extra headers and an optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST whose body is `payload` serialized as JSON.
    pub fn post_json<P: Serialize + ?Sized>(payload: &P) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::request_failed(format!("failed to serialize request body: {e}")))?;
        Ok(Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Blocking client for the site API.
#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `endpoint` against the base URL and merge headers.
    ///
    /// `Content-Type: application/json` is always present; a caller-supplied
    /// header with the same name (any case) replaces it.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = Vec::with_capacity(options.headers.len() + 1);
        if !options
            .headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(CONTENT_TYPE))
        {
            headers.push((CONTENT_TYPE.to_string(), JSON.to_string()));
        }
        headers.extend(options.headers);

        HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body,
        }
    }

    /// Issue one request and parse the envelope it answers with.
    pub fn request<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope<D>, ApiError> {
        let request = self.build_request(endpoint, options);
        debug!(method = request.method.as_str(), url = %request.url, "API call");

        let result = self
            .transport
            .execute(&request)
            .and_then(parse_envelope::<D>);

        if let Err(err) = &result {
            error!(
                method = request.method.as_str(),
                url = %request.url,
                status = ?err.status(),
                error = %err,
                "API call error"
            );
        }
        result
    }

    pub fn contact(&self) -> ContactApi<'_, T> {
        ContactApi::new(self)
    }

    pub fn services(&self) -> ServicesApi<'_, T> {
        ServicesApi::new(self)
    }

    pub fn projects(&self) -> ProjectsApi<'_, T> {
        ProjectsApi::new(self)
    }

    pub fn testimonials(&self) -> TestimonialsApi<'_, T> {
        TestimonialsApi::new(self)
    }

    pub fn careers(&self) -> CareersApi<'_, T> {
        CareersApi::new(self)
    }

    pub fn case_studies(&self) -> CaseStudiesApi<'_, T> {
        CaseStudiesApi::new(self)
    }

    pub fn resumes(&self) -> ResumesApi<'_, T> {
        ResumesApi::new(self)
    }
}
