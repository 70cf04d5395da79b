// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Completion handle for an in-flight power request.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// Handle to the eventual outcome of one power request.
///
/// [`dispatch`](crate::PowerClient::dispatch) returns this immediately; the
/// request itself runs on a spawned task. The handle is a [`Future`] that
/// resolves to the request's outcome exactly once — the outcome is buffered,
/// so awaiting after the request has already finished still observes it.
/// Awaiting consumes the handle, which rules out double consumption at
/// compile time.
///
/// Dropping the handle detaches the request: it still runs to completion,
/// the outcome is simply discarded. There is no cancellation.
#[derive(Debug)]
pub struct DispatchHandle {
    rx: oneshot::Receiver<Result<()>>,
}

impl DispatchHandle {
    pub(crate) fn new(rx: oneshot::Receiver<Result<()>>) -> Self {
        Self { rx }
    }
}

impl Future for DispatchHandle {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(outcome) => outcome,
            Err(_) => Err(Error::Abandoned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_to_delivered_outcome() {
        let (tx, rx) = oneshot::channel();
        let handle = DispatchHandle::new(rx);

        tx.send(Ok(())).unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn resolves_to_delivered_failure() {
        let (tx, rx) = oneshot::channel();
        let handle = DispatchHandle::new(rx);

        tx.send(Err(Error::Abandoned)).unwrap();
        assert!(handle.await.is_err());
    }

    #[tokio::test]
    async fn dropped_producer_yields_abandoned() {
        let (tx, rx) = oneshot::channel::<Result<()>>();
        let handle = DispatchHandle::new(rx);

        drop(tx);
        assert!(matches!(handle.await, Err(Error::Abandoned)));
    }

    #[tokio::test]
    async fn outcome_is_buffered_for_late_await() {
        let (tx, rx) = oneshot::channel();
        let handle = DispatchHandle::new(rx);

        tx.send(Ok(())).unwrap();
        tokio::task::yield_now().await;

        // The producer is long gone; the buffered outcome must survive.
        assert!(handle.await.is_ok());
    }
}
