// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Pterodactyl power client.
//!
//! Holds the immutable endpoint configuration (panel address, API token,
//! name-to-identifier mapping) and exposes the two operations of this
//! library: identifier lookup and power signal dispatch.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, redirect};
use tokio::sync::oneshot;

use crate::dispatch::DispatchHandle;
use crate::error::{Error, Result};
use crate::signal::PowerSignal;

/// Client for the power endpoint of a Pterodactyl panel.
///
/// The configuration is fixed at construction and never mutated, so a client
/// can be shared freely across tasks. Each [`dispatch`](Self::dispatch) call
/// is an independent fire-and-forget request with exactly one outcome.
///
/// # Examples
///
/// ```no_run
/// use ptero_power::{PowerClient, PowerSignal};
///
/// # async fn example() -> ptero_power::Result<()> {
/// let client = PowerClient::builder()
///     .base_url("https://panel.example.com")
///     .token("ptlc_secret")
///     .server("lobby", "abc123")
///     .build()?;
///
/// if let Some(id) = client.server_id("lobby") {
///     client.dispatch("lobby", id, PowerSignal::Start).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PowerClient {
    base_url: String,
    token: String,
    servers: HashMap<String, String>,
    http: Client,
}

impl PowerClient {
    /// Creates a new client from a base address, API token and
    /// name-to-identifier mapping.
    ///
    /// A base address without a scheme gets `https://` prepended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the base address is empty,
    /// [`Error::MissingToken`] if the token is empty, or a transport error
    /// if the HTTP client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        servers: HashMap<String, String>,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .token(token)
            .servers(servers)
            .build()
    }

    /// Returns a builder for configuring a client.
    #[must_use]
    pub fn builder() -> PowerClientBuilder {
        PowerClientBuilder::new()
    }

    /// Returns the panel base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up the panel server identifier for a logical server name.
    ///
    /// Returns `None` if the name is not configured. Absence is a valid
    /// outcome, not an error; callers branch on it before dispatching.
    #[must_use]
    pub fn server_id(&self, name: &str) -> Option<&str> {
        self.servers.get(name).map(String::as_str)
    }

    /// Returns the configured logical server names.
    pub fn server_names(&self) -> impl Iterator<Item = &str> {
        self.servers.keys().map(String::as_str)
    }

    /// Sends a power signal to a panel server.
    ///
    /// Returns immediately with a handle to the eventual outcome; the HTTP
    /// exchange runs on a spawned task. `server_name` is only a label for
    /// log messages — the request targets `server_id`, which the caller
    /// typically obtained from [`server_id`](Self::server_id).
    ///
    /// A 2xx response resolves the handle to success. Any other status,
    /// redirects included, resolves it to [`Error::Panel`] carrying the
    /// status and body; a failure before a response arrives resolves it to
    /// [`Error::Transport`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn dispatch(
        &self,
        server_name: &str,
        server_id: &str,
        signal: PowerSignal,
    ) -> DispatchHandle {
        tracing::info!(
            server = %server_name,
            server_id = %server_id,
            signal = %signal,
            "Sending power signal"
        );

        let request = self
            .http
            .post(self.power_url(server_id))
            .bearer_auth(&self.token)
            .form(&[("signal", signal.as_str())]);

        let server_name = server_name.to_owned();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = execute(request).await;
            match &outcome {
                Ok(()) => {
                    tracing::info!(server = %server_name, signal = %signal, "Power signal sent");
                }
                Err(err) => {
                    tracing::warn!(
                        server = %server_name,
                        signal = %signal,
                        error = %err,
                        "Power signal failed"
                    );
                }
            }
            // The caller may have dropped the handle; the outcome is then
            // discarded, which is the documented detach behavior.
            let _ = tx.send(outcome);
        });

        DispatchHandle::new(rx)
    }

    /// Builds the power endpoint URL for a panel server identifier.
    fn power_url(&self, server_id: &str) -> String {
        format!(
            "{}/api/client/servers/{}/power",
            self.base_url,
            urlencoding::encode(server_id)
        )
    }
}

/// Runs one power request to completion and translates the response.
async fn execute(request: RequestBuilder) -> Result<()> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        // Consuming the response releases the connection.
        drop(response);
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Panel { status, body })
}

/// Builder for creating a [`PowerClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ptero_power::PowerClient;
///
/// let client = PowerClient::builder()
///     .base_url("panel.example.com")
///     .token("ptlc_secret")
///     .server("lobby", "abc123")
///     .server("survival", "def456")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url(), "https://panel.example.com");
/// ```
#[derive(Debug, Default)]
pub struct PowerClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    servers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl PowerClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the panel base address.
    ///
    /// Without a scheme, `https://` is assumed; a trailing slash is trimmed.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the client API token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Registers one logical server name with its panel identifier.
    #[must_use]
    pub fn server(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.servers.insert(name.into(), id.into());
        self
    }

    /// Replaces the whole name-to-identifier mapping.
    #[must_use]
    pub fn servers(mut self, servers: HashMap<String, String>) -> Self {
        self.servers = servers;
        self
    }

    /// Sets a request timeout. Without one, the transport defaults apply.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if no base address was set,
    /// [`Error::MissingToken`] if no token was set, or a transport error if
    /// the HTTP client cannot be created.
    pub fn build(self) -> Result<PowerClient> {
        let base_url = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(Error::InvalidAddress("panel address is required".to_string()));
            }
            Some(url) => normalize_base_url(url),
        };

        let token = match self.token {
            None => return Err(Error::MissingToken),
            Some(token) if token.is_empty() => return Err(Error::MissingToken),
            Some(token) => token,
        };

        // Redirects are treated as rejections, so the transport must not
        // follow them.
        let mut builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(PowerClient {
            base_url,
            token,
            servers: self.servers,
            http,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
