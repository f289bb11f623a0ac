//! Low-level HTTP helpers over `gloo-net`.
//!
//! Client-side (hydrate): real requests against the configured base URL,
//! with the variant's bearer token read fresh from session storage on every
//! call and cookies included (the backend accepts either channel).
//! Server-side (SSR) and host tests: stubs returning a setup error; the
//! auth core is exercised through mock transports instead.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into [`ApiError`] here; callers never see
//! transport-specific error types.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::Variant;
use crate::net::error::ApiError;

/// Credential to attach to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Public endpoint; no bearer header (cookies still ride along).
    None,
    /// Attach the given variant's persisted bearer token, if present.
    Bearer(Variant),
}

#[cfg(feature = "hydrate")]
async fn send<T, B>(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<&B>,
    auth: Auth,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    use gloo_net::http::RequestBuilder;

    use crate::session::{self, BrowserStore};

    let url = crate::config::api_url(path);
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);

    if let Auth::Bearer(variant) = auth {
        // Read the token fresh per request; never cache it across calls.
        if let Some(token) = session::load_token(&BrowserStore, variant) {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }

    let request = match body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Setup(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Setup(e.to_string()))?,
    };

    let response = request.send().await.map_err(|_| ApiError::Network)?;
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(response.status(), &text));
    }

    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`send`], but the response body is ignored. Used for mutations
/// whose result the caller refetches anyway.
#[cfg(feature = "hydrate")]
async fn send_discard<B>(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<&B>,
    auth: Auth,
) -> Result<(), ApiError>
where
    B: Serialize,
{
    use gloo_net::http::RequestBuilder;

    use crate::session::{self, BrowserStore};

    let url = crate::config::api_url(path);
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);

    if let Auth::Bearer(variant) = auth {
        if let Some(token) = session::load_token(&BrowserStore, variant) {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }

    let request = match body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Setup(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Setup(e.to_string()))?,
    };

    let response = request.send().await.map_err(|_| ApiError::Network)?;
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(response.status(), &text));
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Setup("not available on the server".to_owned()))
}

/// `GET` returning a typed body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport, status, or decode failure.
pub async fn get<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send::<T, ()>(gloo_net::http::Method::GET, path, None, auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, auth);
        server_stub()
    }
}

/// `POST` with a JSON body, returning a typed body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport, status, or decode failure.
pub async fn post<T, B>(path: &str, body: &B, auth: Auth) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Method::POST, path, Some(body), auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, auth);
        server_stub()
    }
}

/// `PUT` with a JSON body, returning a typed body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport, status, or decode failure.
pub async fn put<T, B>(path: &str, body: &B, auth: Auth) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Method::PUT, path, Some(body), auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, auth);
        server_stub()
    }
}

/// `POST` with an optional JSON body, ignoring the response body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport or status failure.
pub async fn post_discard<B: Serialize>(
    path: &str,
    body: Option<&B>,
    auth: Auth,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_discard(gloo_net::http::Method::POST, path, body, auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, auth);
        server_stub()
    }
}

/// `PUT` with a JSON body, ignoring the response body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport or status failure.
pub async fn put_discard<B: Serialize>(path: &str, body: &B, auth: Auth) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_discard(gloo_net::http::Method::PUT, path, Some(body), auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, auth);
        server_stub()
    }
}

/// `PATCH` with an optional JSON body, ignoring the response body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport or status failure.
pub async fn patch_discard<B: Serialize>(
    path: &str,
    body: Option<&B>,
    auth: Auth,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_discard(gloo_net::http::Method::PATCH, path, body, auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, auth);
        server_stub()
    }
}

/// `DELETE`, ignoring the response body.
///
/// # Errors
///
/// Normalized [`ApiError`] on any transport or status failure.
pub async fn delete_discard(path: &str, auth: Auth) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_discard::<()>(gloo_net::http::Method::DELETE, path, None, auth).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, auth);
        server_stub()
    }
}
