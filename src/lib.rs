// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ptero-power` - Send power signals to Pterodactyl panel servers.
//!
//! This library lets a process that manages named logical servers request
//! power-state changes (start/stop/restart/kill) on a remote Pterodactyl
//! panel, addressing servers by name rather than by the panel's internal
//! identifier, without blocking the caller.
//!
//! Two operations make up the whole API:
//!
//! - **Identifier lookup**: [`PowerClient::server_id`] translates a logical
//!   server name into the panel's server identifier. Unknown names return
//!   `None`; absence is a valid outcome to branch on, not an error.
//! - **Signal dispatch**: [`PowerClient::dispatch`] fires one authenticated
//!   `POST /api/client/servers/{id}/power` request and returns a
//!   [`DispatchHandle`] immediately. The handle resolves exactly once, to
//!   success on any 2xx response or to an [`Error`] carrying the transport
//!   cause or the panel's status and body.
//!
//! There is no retry, no status polling and no cancellation: each call is
//! one fire-and-forget request with exactly one outcome.
//!
//! # Quick Start
//!
//! ```no_run
//! use ptero_power::{PowerClient, PowerSignal};
//!
//! #[tokio::main]
//! async fn main() -> ptero_power::Result<()> {
//!     let client = PowerClient::builder()
//!         .base_url("https://panel.example.com")
//!         .token("ptlc_secret")
//!         .server("lobby", "abc123")
//!         .build()?;
//!
//!     // Resolve first, dispatch second.
//!     let Some(id) = client.server_id("lobby") else {
//!         eprintln!("unknown server");
//!         return Ok(());
//!     };
//!
//!     // The handle can be awaited later, or dropped to detach the request.
//!     let handle = client.dispatch("lobby", id, PowerSignal::Start);
//!     handle.await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod dispatch;
pub mod error;
mod signal;

pub use client::{PowerClient, PowerClientBuilder};
pub use dispatch::DispatchHandle;
pub use error::{Error, Result};
pub use signal::PowerSignal;
