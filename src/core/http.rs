//! Platform-neutral HTTP plumbing for the shop backend.
//!
//! Requests and responses are plain values so that the auth and catalog
//! logic can run against gloo-net in the browser, reqwest on the server,
//! and a scripted client in tests.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// HTTP method subset used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
}

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: FileUpload },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A request against the backend; `path` is relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: Body::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    /// Attach a multipart form body
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    /// Set the `Authorization: Bearer` credential
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }
}

/// Status and raw body of a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turn a non-success status into the matching [`ApiError`]
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.text()))
        }
    }
}

/// Transport seam. `Err` is reserved for requests that produced no response;
/// every HTTP status, including errors, comes back as `Ok`.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Client for the current build target
#[cfg(feature = "ssr")]
pub type PlatformClient = ReqwestClient;

/// Client for the current build target
#[cfg(not(feature = "ssr"))]
pub type PlatformClient = BrowserClient;

/// Server-side client backed by reqwest
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "ssr")]
impl ReqwestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn multipart_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, ApiError> {
        use reqwest::multipart::{Form, Part};

        let mut form = Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File { name, upload } => {
                    let file = Part::bytes(upload.bytes)
                        .file_name(upload.file_name)
                        .mime_str(&upload.content_type)
                        .map_err(|e| ApiError::Validation(e.to_string()))?;
                    form.part(name, file)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(feature = "ssr")]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let ApiRequest {
            method,
            path,
            bearer,
            body,
        } = request;

        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, join_url(&self.base_url, &path));
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(Self::multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

/// Browser client backed by gloo-net's fetch wrapper
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone)]
pub struct BrowserClient {
    base_url: String,
}

#[cfg(not(feature = "ssr"))]
impl BrowserClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn form_data(parts: Vec<FormPart>) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Validation(format!("{:?}", e));

        let form = web_sys::FormData::new().map_err(js_err)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => {
                    form.append_with_str(&name, &value).map_err(js_err)?;
                }
                FormPart::File { name, upload } => {
                    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
                    let sequence = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&upload.content_type);
                    let blob =
                        web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                            .map_err(js_err)?;
                    form.append_with_blob_and_filename(&name, &blob, &upload.file_name)
                        .map_err(js_err)?;
                }
            }
        }
        Ok(form)
    }
}

#[cfg(not(feature = "ssr"))]
impl HttpClient for BrowserClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let ApiRequest {
            method,
            path,
            bearer,
            body,
        } = request;

        let url = join_url(&self.base_url, &path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.body(Self::form_data(parts)?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(
            join_url("https://api.example.com/", "/api/auth/login/"),
            "https://api.example.com/api/auth/login/"
        );
        assert_eq!(
            join_url("https://api.example.com", "auth/verify/"),
            "https://api.example.com/auth/verify/"
        );
    }

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::delete("/api/tatts/tattoos/5/").bearer("abc");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.bearer.as_deref(), Some("abc"));
        assert_eq!(req.body, Body::Empty);
        assert_eq!(req.method.to_string(), "DELETE");
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Login<'a> {
            username: &'a str,
        }

        let req = ApiRequest::post("/x").json(&Login { username: "admin" }).unwrap();
        assert_eq!(
            req.body,
            Body::Json(serde_json::json!({ "username": "admin" }))
        );
    }

    #[test]
    fn test_response_into_result() {
        assert!(ApiResponse::new(204, Vec::new()).into_result().is_ok());
        assert_eq!(
            ApiResponse::new(404, "missing").into_result(),
            Err(ApiError::NotFound)
        );
        assert_eq!(
            ApiResponse::new(400, "bad price").into_result(),
            Err(ApiError::Validation("bad price".to_string()))
        );
    }

    #[test]
    fn test_response_json_decode_error() {
        let resp = ApiResponse::new(200, "not json");
        let decoded: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(decoded, Err(ApiError::Decode(_))));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let parts = vec![FormPart::File {
            name: "image".into(),
            upload: FileUpload {
                file_name: "a.jpg".into(),
                content_type: "not a mime".into(),
                bytes: vec![1, 2, 3],
            },
        }];
        assert!(ReqwestClient::multipart_form(parts).is_err());
    }
}
