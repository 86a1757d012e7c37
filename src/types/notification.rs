//! Notification envelope returned by every write endpoint.

use serde::{Deserialize, Serialize};

use super::OrderSnapshot;

/// Payload carried in the notification's info slot.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum NotificationInfo {
    Empty,
    /// Orders affected by the request (submit, update, cancel, cancel-multi).
    Orders(OrderSnapshot),
    /// One nested notification per operation of a multi-op request.
    Notifications(Vec<Notification>),
    /// Anything the decoder does not recognise, kept verbatim.
    Raw(serde_json::Value),
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Notification {
    pub mts: i64,
    /// e.g. `on-req`, `oc-req`, `ou-req`, `oc_multi-req`, `ox_multi-req`
    pub notification_type: String,
    pub message_id: Option<i64>,
    pub notify_info: NotificationInfo,
    pub code: Option<i64>,
    /// `SUCCESS`, `ERROR` or `FAILURE`
    pub status: String,
    pub text: String,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.status == "SUCCESS"
    }

    /// Orders carried by this notification, empty if it carries none.
    pub fn orders(&self) -> &[super::Order] {
        match &self.notify_info {
            NotificationInfo::Orders(snapshot) => &snapshot.snapshot,
            _ => &[],
        }
    }
}
