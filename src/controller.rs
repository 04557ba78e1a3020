use std::collections::BTreeMap;

use crate::backend::{FrameScheduler, TextSurface};
use crate::config::Config;
use crate::ease::Ease;
use crate::format::format_value;
use crate::model::{CounterTarget, FrameToken, TargetId};

/// One running animation. The start timestamp is captured on the first
/// delivered frame rather than at `start` time, so scheduler latency does not
/// eat into the duration budget.
#[derive(Clone, Copy, Debug)]
struct Session {
    token: FrameToken,
    started_at: Option<f64>,
}

/// What a delivered frame did to its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No live session, or the token belongs to a cancelled request.
    Stale,
    /// Rendered an intermediate value; the next frame is already requested.
    Running,
    /// Rendered the exact target value; the session is released.
    Completed,
}

/// Per-target animation state machine: `Idle → Running → {Completed,
/// Cancelled} → Idle`, with at most one live session and one pending frame
/// request per target.
#[derive(Debug, Default)]
pub struct AnimationController {
    sessions: BTreeMap<TargetId, Session>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self, target: TargetId) -> bool {
        self.sessions.contains_key(&target)
    }

    /// Begins a session for `target`, cancelling any session already running
    /// so that exactly one stays live.
    pub fn start<F: FrameScheduler>(&mut self, target: TargetId, scheduler: &mut F) {
        self.cancel(target, scheduler);
        let token = scheduler.request_frame(target);
        tracing::debug!(target_id = target.0, token = token.0, "animation started");
        self.sessions.insert(
            target,
            Session {
                token,
                started_at: None,
            },
        );
    }

    /// Revokes the pending frame request and releases the session. Renders
    /// nothing; a no-op when the target is idle.
    pub fn cancel<F: FrameScheduler>(&mut self, target: TargetId, scheduler: &mut F) {
        if let Some(session) = self.sessions.remove(&target) {
            scheduler.cancel_frame(session.token);
            tracing::debug!(target_id = target.0, "animation cancelled");
        }
    }

    pub fn cancel_all<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        let ids: Vec<TargetId> = self.sessions.keys().copied().collect();
        for id in ids {
            self.cancel(id, scheduler);
        }
    }

    /// Handles one frame delivery. The session and token are checked before
    /// anything is rendered: a frame that was already in flight when its
    /// request got cancelled arrives here as [`FrameOutcome::Stale`].
    #[allow(clippy::too_many_arguments)]
    pub fn on_frame<F: FrameScheduler, T: TextSurface>(
        &mut self,
        token: FrameToken,
        now_ms: f64,
        target: &CounterTarget,
        ease: Ease,
        config: &Config,
        scheduler: &mut F,
        surface: &mut T,
    ) -> FrameOutcome {
        let Some(session) = self.sessions.get_mut(&target.id) else {
            return FrameOutcome::Stale;
        };
        if session.token != token {
            return FrameOutcome::Stale;
        }

        let started_at = *session.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - started_at) / config.duration_ms as f64).clamp(0.0, 1.0);

        if progress < 1.0 {
            let value = ease.apply(progress) * target.value;
            surface.write(
                target.id,
                &format_value(value, target.decimals, target.grouped, config),
            );
            session.token = scheduler.request_frame(target.id);
            FrameOutcome::Running
        } else {
            // Final frame formats the target number itself, so interpolation
            // rounding can never leak into the settled text.
            surface.write(
                target.id,
                &format_value(target.value, target.decimals, target.grouped, config),
            );
            self.sessions.remove(&target.id);
            tracing::debug!(target_id = target.id.0, "animation completed");
            FrameOutcome::Completed
        }
    }
}
