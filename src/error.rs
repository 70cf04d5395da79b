// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ptero-power` library.
//!
//! All network-related failures are delivered through the failure branch of
//! a [`DispatchHandle`](crate::DispatchHandle) rather than panicking or
//! escaping the API boundary some other way.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request failed before a response was received (connection
    /// refused, DNS failure, timeout, connection reset).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The panel answered with a non-success status code.
    ///
    /// Redirects count as failures too: the client never follows them, so
    /// a 3xx status surfaces here like any other rejection.
    #[error("panel rejected the request: HTTP {status}: {body}")]
    Panel {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The response body text, for diagnostics.
        body: String,
    },

    /// The dispatch task was lost before it could deliver an outcome.
    #[error("dispatch was abandoned before completing")]
    Abandoned,

    /// The panel base address is missing or malformed.
    #[error("invalid panel address: {0}")]
    InvalidAddress(String),

    /// No API token was configured.
    #[error("panel API token is required")]
    MissingToken,

    /// A string could not be parsed as a power signal.
    #[error("invalid power signal: {0}")]
    InvalidSignal(String),
}

impl Error {
    /// Returns the HTTP status code if this is a panel rejection.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Panel { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
