//! Backend API Client
//!
//! One configured client for the school backend, organized by domain.
//! The client is constructed once in `App` and handed down through
//! context; every request goes to the same base URL and carries the
//! bearer token from the session store when one is present. A missing
//! token still sends the request and lets the backend reject it.
//!
//! No retries, no timeouts, no caching; callers turn the `Err` string
//! into their own user-facing message.

mod auth;
mod students;
mod attendance;
mod fees;
mod results;
mod dashboard;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use leptos::prelude::GetUntracked;

use crate::store::{SessionStore, SessionStoreFields};

// Re-export all public items
pub use auth::*;
pub use students::*;
pub use attendance::*;
pub use fees::*;
pub use results::*;
pub use dashboard::*;

/// Base origin of the backend; the single source of truth for every request
pub const API_BASE_URL: &str = "https://nymph-be.vercel.app/api";

/// Characters escaped when a value is interpolated into a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Configured handle to the backend; cheap to copy into closures
#[derive(Clone, Copy)]
pub struct ApiClient {
    base: &'static str,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            base: API_BASE_URL,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Escape a user-supplied value for use as a path segment
    fn seg(value: &str) -> String {
        utf8_percent_encode(value, PATH_SEGMENT).to_string()
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token().get_untracked() {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
        if !resp.ok() {
            return Err(format!("request failed with status {}", resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }

    fn check(resp: &Response) -> Result<(), String> {
        if !resp.ok() {
            return Err(format!("request failed with status {}", resp.status()));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let resp = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(resp).await
    }

    async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, String> {
        let resp = self
            .authorize(Request::get(&self.url(path)).query(query.iter().copied()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(resp).await
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, String> {
        let resp = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::check(&resp)?;
        resp.binary().await.map_err(|e| e.to_string())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, String>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(resp).await
    }

    /// POST where the response body is ignored
    async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), String> {
        let resp = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::check(&resp)
    }

    /// PUT where the response body is ignored
    async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), String> {
        let resp = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::check(&resp)
    }

    async fn delete_unit(&self, path: &str) -> Result<(), String> {
        let resp = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::check(&resp)
    }
}
