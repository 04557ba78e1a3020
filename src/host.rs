//! Deterministic in-memory collaborators.
//!
//! The engine never touches a real viewport or display clock; it is driven
//! through the [`crate::backend`] traits. These implementations back the demo
//! binary and the test suites: the host owns the loop, drains due frames from
//! [`ManualScheduler`], and feeds them to the orchestrator with timestamps of
//! its choosing.

use std::collections::BTreeMap;

use crate::backend::{FrameScheduler, TextSurface, VisibilityDetector};
use crate::model::{FrameToken, SubscriptionId, TargetId};

/// Frame scheduler with an explicit pending queue and no clock of its own.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_token: u64,
    pending: BTreeMap<FrameToken, TargetId>,
}

impl ManualScheduler {
    /// Requests that have been made and not yet delivered or cancelled, in
    /// token order.
    pub fn pending(&self) -> Vec<(TargetId, FrameToken)> {
        self.pending.iter().map(|(&t, &id)| (id, t)).collect()
    }

    /// Drains the queue for one refresh cycle. The caller delivers each entry
    /// via the orchestrator's `handle_frame` with its chosen timestamp.
    pub fn take_due(&mut self) -> Vec<(TargetId, FrameToken)> {
        let due = self.pending();
        self.pending.clear();
        due
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, target: TargetId) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending.insert(token, target);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.remove(&token);
    }
}

/// Visibility detector that only keeps the subscription table; transitions
/// are injected by the host via the orchestrator's `handle_visibility`.
#[derive(Debug, Default)]
pub struct ManualVisibility {
    next_subscription: u64,
    subscriptions: BTreeMap<SubscriptionId, (TargetId, String)>,
}

impl ManualVisibility {
    pub fn is_observed(&self, target: TargetId) -> bool {
        self.subscriptions.values().any(|(id, _)| *id == target)
    }

    pub fn observed_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Margin the given target was subscribed with, if it is observed.
    pub fn margin_of(&self, target: TargetId) -> Option<&str> {
        self.subscriptions
            .values()
            .find(|(id, _)| *id == target)
            .map(|(_, margin)| margin.as_str())
    }
}

impl VisibilityDetector for ManualVisibility {
    fn observe(&mut self, target: TargetId, margin: &str) -> SubscriptionId {
        self.next_subscription += 1;
        let sub = SubscriptionId(self.next_subscription);
        self.subscriptions.insert(sub, (target, margin.to_string()));
        sub
    }

    fn unobserve(&mut self, subscription: SubscriptionId) {
        self.subscriptions.remove(&subscription);
    }
}

/// Text surface backed by a plain map.
#[derive(Debug, Default)]
pub struct MemoryText {
    texts: BTreeMap<TargetId, String>,
}

impl MemoryText {
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = (TargetId, S)>,
        S: Into<String>,
    {
        Self {
            texts: texts
                .into_iter()
                .map(|(id, s)| (id, s.into()))
                .collect(),
        }
    }

    pub fn set_text(&mut self, target: TargetId, text: impl Into<String>) {
        self.texts.insert(target, text.into());
    }

    pub fn read_text(&self, target: TargetId) -> Option<String> {
        self.texts.get(&target).cloned()
    }
}

impl TextSurface for MemoryText {
    fn read(&self, target: TargetId) -> Option<String> {
        self.read_text(target)
    }

    fn write(&mut self, target: TargetId, text: &str) {
        self.texts.insert(target, text.to_string());
    }
}
