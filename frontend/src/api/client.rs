use std::rc::Rc;

use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    multipart::Form,
    Client, Method, Request, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    utils::storage::{LocalStorageTokenStore, TokenStore},
};

/// Shared request pipeline for every backend call.
///
/// Each request passes through [`ApiClient::send`], which attaches the stored
/// access token as a bearer credential. There is no response-side hook: a 401
/// comes back to the caller like any other error.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: Rc::new(LocalStorageTokenStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            tokens: Rc::new(LocalStorageTokenStore),
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.tokens)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        self.client.request(method, url)
    }

    fn attach_bearer(&self, request: &mut Request) {
        match self.tokens.access_token() {
            Ok(Some(token)) => match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    request.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored access token is not a valid header value"),
            },
            Ok(None) => {}
            Err(err) => log::error!("Failed to read access token: {}", err),
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::unknown(format!("Failed to build request: {}", e)))?;
        self.attach_bearer(&mut request);
        log::debug!("{} {}", request.method(), request.url().path());
        self.execute(request).await
    }

    async fn execute(&self, request: Request) -> Result<ApiResponse, ApiError> {
        if let Some(mocked) = respond_with_mock(&request)? {
            return Ok(mocked);
        }

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await;
        self.send(builder).await?.into_json()
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await.query(query);
        self.send(builder).await?.into_json()
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await.json(body);
        self.send(builder).await?.into_json()
    }

    /// Sends `body` as `multipart/form-data`, one text part per top-level field.
    pub(crate) async fn send_multipart<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let form = multipart_form(body)?;
        let builder = self.request(method, path).await.multipart(form);
        self.send(builder).await?.into_json()
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path).await;
        self.send(builder).await?.into_empty()
    }
}

pub(crate) struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.status.is_success() {
            self.json()
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }

    pub fn into_empty(self) -> Result<(), ApiError> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }
}

#[cfg(not(test))]
fn respond_with_mock(_request: &Request) -> Result<Option<ApiResponse>, ApiError> {
    Ok(None)
}

#[cfg(test)]
fn respond_with_mock(request: &Request) -> Result<Option<ApiResponse>, ApiError> {
    let Some(responder) = mock_registry::mock_for(request.url()) else {
        return Ok(None);
    };
    let mock = responder.respond(request)?;
    let status = StatusCode::from_u16(mock.status)
        .map_err(|_| ApiError::unknown(format!("Invalid mock status {}", mock.status)))?;
    Ok(Some(ApiResponse {
        status,
        body: mock.body,
    }))
}

fn multipart_form<B: Serialize + ?Sized>(body: &B) -> Result<Form, ApiError> {
    let value = serde_json::to_value(body)
        .map_err(|e| ApiError::validation(format!("Failed to encode form: {}", e)))?;
    let Value::Object(fields) = value else {
        return Err(ApiError::validation("Form payload must be an object"));
    };
    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| form_text(value).map(|text| (name, text)))
        .fold(Form::new(), |form, (name, text)| form.text(name, text)))
}

fn form_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
pub use self::mock_registry::{register_mock, MockResponse, TestResponder};
