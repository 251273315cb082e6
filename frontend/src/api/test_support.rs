#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    };
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        reply: Reply,
    }

    #[derive(Clone)]
    enum Reply {
        Respond(MockResponse),
        NetworkError,
    }

    /// One request as the server saw it.
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub authorization: Option<String>,
        pub content_type: Option<String>,
        /// JSON bodies only; multipart bodies are streamed and stay `None`.
        pub body: Option<Value>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let reply = if then.network_error {
                Reply::NetworkError
            } else {
                Reply::Respond(MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ))
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                reply,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }

        pub fn paths(&self) -> Vec<String> {
            self.requests()
                .into_iter()
                .map(|request| request.path)
                .collect()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;

            inner.requests.push(RecordedRequest {
                method: method.clone(),
                path: path.to_string(),
                query: request.url().query().map(str::to_string),
                authorization: header_text(request, AUTHORIZATION),
                content_type: header_text(request, CONTENT_TYPE),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned();

            match route.map(|route| route.reply) {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::NetworkError) => Err(ApiError::request_failed(format!(
                    "Request failed: connection refused ({} {})",
                    method, path
                ))),
                None => Err(ApiError::unknown(format!("No mock for {} {}", method, path))),
            }
        }
    }

    fn header_text(request: &reqwest::Request, name: reqwest::header::HeaderName) -> Option<String> {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        network_error: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn network_error(&mut self) -> &mut Self {
            self.network_error = true;
            self
        }
    }
}

#[cfg(test)]
pub mod fixtures {
    use crate::api::token::encode_test_token;
    use crate::api::UserProfile;
    use serde_json::json;

    pub const NOW: i64 = 1_750_000_000;

    pub fn access_token_expiring_at(exp: i64) -> String {
        encode_test_token(json!({
            "token_type": "access",
            "exp": exp,
            "iat": exp - 86_400,
            "jti": format!("jti-{}", exp),
            "user_id": 1
        }))
    }

    /// Relative to the wall clock, for flows that read the current time.
    pub fn access_token_expiring_in(seconds: i64) -> String {
        access_token_expiring_at(chrono::Utc::now().timestamp() + seconds)
    }

    pub fn expired_access_token() -> String {
        access_token_expiring_at(NOW - 60)
    }

    pub fn live_access_token() -> String {
        access_token_expiring_at(NOW + 3_600)
    }

    pub fn profile_json() -> serde_json::Value {
        json!({
            "id": 1,
            "email": "owner@garage1.np",
            "username": "owner",
            "first_name": "Ram",
            "last_name": "Thapa",
            "garage": "garage1",
            "role": "Admin"
        })
    }

    pub fn profile() -> UserProfile {
        serde_json::from_value(profile_json()).expect("profile fixture")
    }
}
