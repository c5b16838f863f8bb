//! Outcome reporting from a settings submission back to whoever shows it.

use serde::Serialize;
use tokio::sync::watch;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum CommitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure(String),
}

/// Write side of the status channel. Setting a status never fails; once
/// every receiver is gone the value is simply not observed.
#[derive(Debug)]
pub struct StatusSender {
    tx: watch::Sender<CommitStatus>,
}

pub type StatusReceiver = watch::Receiver<CommitStatus>;

pub fn status_channel() -> (StatusSender, StatusReceiver) {
    let (tx, rx) = watch::channel(CommitStatus::Idle);
    (StatusSender { tx }, rx)
}

impl StatusSender {
    pub fn set(&self, status: CommitStatus) {
        self.tx.send_replace(status);
    }

    pub fn current(&self) -> CommitStatus {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> StatusReceiver {
        self.tx.subscribe()
    }
}
