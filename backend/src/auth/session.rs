//! Handles for auth-state subscriptions and in-flight sign-ins.

use std::future::Future;

use dashboard_common::User;
use futures_util::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

/// Active auth-state subscription. Dropping it unsubscribes.
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub(super) fn spawn<T, F>(receiver: watch::Receiver<T>, on_change: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        let task = tokio::spawn(async move {
            let mut changes = WatchStream::new(receiver);
            while let Some(value) = changes.next().await {
                on_change(value);
            }
        });
        Self { task }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A sign-in running in the background.
pub struct PendingSignIn {
    task: JoinHandle<Option<User>>,
}

impl PendingSignIn {
    pub(super) fn spawn<F>(sign_in: F) -> Self
    where
        F: Future<Output = Option<User>> + Send + 'static,
    {
        Self {
            task: tokio::spawn(sign_in),
        }
    }

    /// Cancel the sign-in. A cancelled sign-in never updates the session.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the outcome; `None` if it failed or was aborted.
    pub async fn wait(self) -> Option<User> {
        match self.task.await {
            Ok(user) => user,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::warn!("Sign-in task failed: {}", e);
                }
                None
            }
        }
    }
}
