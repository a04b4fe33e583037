//! This module provides a client to connect to the planner's REST backend

use std::error::Error;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use url::Url;

use crate::config;
use crate::pad::Pad;
use crate::session::{NotAuthenticated, Session};
use crate::traits::PadSource;

/// A thin wrapper over the backend's REST routes.
///
/// Every method is a pass-through (URL templating, the auth header, JSON
/// bodies in and out as [`serde_json::Value`]). There are no retries and no
/// backoff; transport and HTTP-status failures surface to the caller
/// unmodified.
pub struct Client {
    url: Url,
    session: Option<Session>,
}

impl Client {
    /// Create a client nobody is logged into (yet). This does not start a connection.
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;

        Ok(Self{
            url,
            session: None,
        })
    }

    /// Create a client with a session record already at hand
    pub fn new_with_session<S: AsRef<str>>(url: S, session: Session) -> Result<Self, Box<dyn Error>> {
        let mut client = Self::new(url)?;
        client.set_session(Some(session));
        Ok(client)
    }

    /// Attach a session record (or detach it with `None`)
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Return the current session record, or fail in case nobody is logged in.
    ///
    /// Every route requires a session, so every request goes through here and
    /// propagates [`NotAuthenticated`] to its caller rather than retrying.
    pub fn session(&self) -> Result<&Session, NotAuthenticated> {
        self.session.as_ref().ok_or(NotAuthenticated)
    }

    /// Build an URL under the base URL from path segments
    fn route(&self, segments: &[&str]) -> Result<Url, Box<dyn Error>> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| "the base URL cannot carry route segments")?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value, Box<dyn Error>> {
        let session = self.session()?;
        log::debug!("{} {}", method, url);

        let mut request = reqwest::Client::new()
            .request(method, url.as_str())
            .header(USER_AGENT, config::APP_NAME.lock().unwrap().clone())
            .bearer_auth(session.token());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?
            .error_for_status()?;
        let text = response.text().await?;
        if text.is_empty() {
            // e.g. a 204 on deletion
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get_spaces(&self) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["spaces"])?;
        self.request(Method::GET, url, None).await
    }

    pub async fn create_space(&self, space: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["spaces"])?;
        self.request(Method::POST, url, Some(space)).await
    }

    pub async fn update_space(&self, id: &str, space: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["spaces", id])?;
        self.request(Method::PUT, url, Some(space)).await
    }

    pub async fn delete_space(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["spaces", id])?;
        self.request(Method::DELETE, url, None).await
    }

    /// List subspaces, either all of them or only those of one space
    pub async fn get_subspaces(&self, space_id: Option<&str>) -> Result<Value, Box<dyn Error>> {
        let mut url = self.route(&["subspaces"])?;
        if let Some(space_id) = space_id {
            url.query_pairs_mut().append_pair("spaceId", space_id);
        }
        self.request(Method::GET, url, None).await
    }

    pub async fn create_subspace(&self, subspace: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["subspaces"])?;
        self.request(Method::POST, url, Some(subspace)).await
    }

    pub async fn update_subspace(&self, id: &str, subspace: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["subspaces", id])?;
        self.request(Method::PUT, url, Some(subspace)).await
    }

    pub async fn delete_subspace(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["subspaces", id])?;
        self.request(Method::DELETE, url, None).await
    }

    /// List todos, either all of them or only those of one subspace
    pub async fn get_todos(&self, subspace_id: Option<&str>) -> Result<Value, Box<dyn Error>> {
        let mut url = self.route(&["todos"])?;
        if let Some(subspace_id) = subspace_id {
            url.query_pairs_mut().append_pair("subspaceId", subspace_id);
        }
        self.request(Method::GET, url, None).await
    }

    pub async fn create_todo(&self, todo: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["todos"])?;
        self.request(Method::POST, url, Some(todo)).await
    }

    pub async fn update_todo(&self, id: &str, todo: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["todos", id])?;
        self.request(Method::PUT, url, Some(todo)).await
    }

    pub async fn delete_todo(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["todos", id])?;
        self.request(Method::DELETE, url, None).await
    }

    /// Fetch the content document attached to a todo
    pub async fn get_todo_content(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["todo-content", id])?;
        self.request(Method::GET, url, None).await
    }

    /// Overwrite the content document attached to a todo
    pub async fn set_todo_content(&self, id: &str, content: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["todo-content", id])?;
        self.request(Method::PUT, url, Some(content)).await
    }

    pub async fn get_wordpads(&self) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpads"])?;
        self.request(Method::GET, url, None).await
    }

    pub async fn create_wordpad(&self, wordpad: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpads"])?;
        self.request(Method::POST, url, Some(wordpad)).await
    }

    pub async fn update_wordpad(&self, id: &str, wordpad: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpads", id])?;
        self.request(Method::PUT, url, Some(wordpad)).await
    }

    pub async fn delete_wordpad(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpads", id])?;
        self.request(Method::DELETE, url, None).await
    }

    /// Fetch the content document attached to a wordpad
    pub async fn get_wordpad_content(&self, id: &str) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpad-content", id])?;
        self.request(Method::GET, url, None).await
    }

    /// Overwrite the content document attached to a wordpad
    pub async fn set_wordpad_content(&self, id: &str, content: &Value) -> Result<Value, Box<dyn Error>> {
        let url = self.route(&["wordpad-content", id])?;
        self.request(Method::PUT, url, Some(content)).await
    }
}

#[async_trait]
impl PadSource for Client {
    async fn get_pads(&self) -> Result<Vec<Pad>, Box<dyn Error>> {
        let pads = self.get_wordpads().await?;
        Ok(serde_json::from_value(pads)?)
    }

    async fn create_pad(&mut self, title: &str) -> Result<Pad, Box<dyn Error>> {
        let pad = self.create_wordpad(&serde_json::json!({ "title": title })).await?;
        Ok(serde_json::from_value(pad)?)
    }

    async fn get_pad_content(&self, id: &str) -> Result<Option<String>, Box<dyn Error>> {
        let value = self.get_wordpad_content(id).await?;
        // A pad that was never written to has no content field (or a null one)
        Ok(value.get("content")
            .and_then(|content| content.as_str())
            .map(|content| content.to_string()))
    }

    async fn set_pad_content(&mut self, id: &str, content: &str) -> Result<(), Box<dyn Error>> {
        self.set_wordpad_content(id, &serde_json::json!({ "content": content })).await?;
        Ok(())
    }
}
