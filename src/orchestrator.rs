use std::collections::BTreeMap;

use crate::backend::{FrameScheduler, TextSurface, VisibilityDetector};
use crate::config::{Config, ConfigPatch};
use crate::controller::{AnimationController, FrameOutcome};
use crate::ease::Ease;
use crate::error::TickupResult;
use crate::format::format_value;
use crate::model::{CounterTarget, FrameToken, SubscriptionId, TargetId, VisibilityState};
use crate::parse::parse_value;

#[derive(Debug)]
struct Entry {
    target: CounterTarget,
    visibility: VisibilityState,
    subscription: Option<SubscriptionId>,
}

/// Owns the registered targets and their visibility/animation state, and
/// turns externally delivered visibility and frame events into renders.
///
/// All work happens on the caller's execution context: the host forwards
/// detector transitions to [`handle_visibility`](Self::handle_visibility) and
/// scheduler deliveries to [`handle_frame`](Self::handle_frame).
pub struct Orchestrator<V, F, T> {
    config: Config,
    ease: Ease,
    selection: Vec<TargetId>,
    targets: BTreeMap<TargetId, Entry>,
    controller: AnimationController,
    visibility: V,
    scheduler: F,
    surface: T,
}

impl<V, F, T> Orchestrator<V, F, T>
where
    V: VisibilityDetector,
    F: FrameScheduler,
    T: TextSurface,
{
    /// Registers every target in `selection`. Targets whose current text does
    /// not parse are skipped with a warning; construction only fails on an
    /// invalid configuration.
    pub fn new(
        selection: Vec<TargetId>,
        config: Config,
        visibility: V,
        scheduler: F,
        surface: T,
    ) -> TickupResult<Self> {
        config.validate()?;
        let mut this = Self {
            ease: Ease::from_name(&config.easing),
            config,
            selection,
            targets: BTreeMap::new(),
            controller: AnimationController::new(),
            visibility,
            scheduler,
            surface,
        };
        this.register_all();
        Ok(this)
    }

    fn register_all(&mut self) {
        for id in self.selection.clone() {
            let raw = self.surface.read(id).unwrap_or_default();
            match parse_value(&raw, &self.config) {
                Ok(parsed) => {
                    let subscription = self.visibility.observe(id, &self.config.offset);
                    self.targets.insert(
                        id,
                        Entry {
                            target: CounterTarget {
                                id,
                                original_text: raw,
                                value: parsed.number,
                                decimals: parsed.decimals,
                                grouped: parsed.grouped,
                            },
                            visibility: VisibilityState::Unseen,
                            subscription: Some(subscription),
                        },
                    );
                }
                Err(err) => {
                    tracing::warn!(target_id = id.0, error = %err, "skipping counter target");
                }
            }
        }
    }

    /// Handles one enter/exit transition from the visibility detector.
    ///
    /// Entering starts an animation (and in once mode drops the
    /// subscription); exiting cancels it and, outside once mode, rewinds the
    /// display to the "0" baseline so re-entry visibly restarts.
    pub fn handle_visibility(&mut self, id: TargetId, visible: bool) {
        let Some(entry) = self.targets.get_mut(&id) else {
            return;
        };
        match (entry.visibility, visible) {
            (VisibilityState::Unseen | VisibilityState::Hidden, true) => {
                entry.visibility = VisibilityState::Visible;
                self.controller.start(id, &mut self.scheduler);
                if self.config.once
                    && let Some(subscription) = entry.subscription.take()
                {
                    self.visibility.unobserve(subscription);
                }
            }
            (VisibilityState::Visible, false) => {
                entry.visibility = VisibilityState::Hidden;
                self.controller.cancel(id, &mut self.scheduler);
                if !self.config.once {
                    let baseline = format_value(0.0, 0, entry.target.grouped, &self.config);
                    self.surface.write(id, &baseline);
                }
            }
            _ => {}
        }
    }

    /// Handles one frame delivery from the scheduler. Deliveries whose token
    /// no longer matches a live session are discarded without rendering.
    pub fn handle_frame(&mut self, id: TargetId, token: FrameToken, now_ms: f64) -> FrameOutcome {
        let Some(entry) = self.targets.get(&id) else {
            return FrameOutcome::Stale;
        };
        self.controller.on_frame(
            token,
            now_ms,
            &entry.target,
            self.ease,
            &self.config,
            &mut self.scheduler,
            &mut self.surface,
        )
    }

    /// Merges a partial options object and restarts, so every target is
    /// re-derived under the new configuration.
    pub fn update_options(&mut self, patch: ConfigPatch) -> TickupResult<()> {
        let merged = self.config.merged(patch);
        merged.validate()?;
        self.ease = Ease::from_name(&merged.easing);
        self.config = merged;
        self.restart();
        Ok(())
    }

    /// Full re-init: cancels every session, restores every target's original
    /// decorated text, drops all subscriptions, and registers the original
    /// selection again.
    #[tracing::instrument(skip(self))]
    pub fn restart(&mut self) {
        self.controller.cancel_all(&mut self.scheduler);
        for (id, entry) in std::mem::take(&mut self.targets) {
            self.surface.write(id, &entry.target.original_text);
            if let Some(subscription) = entry.subscription {
                self.visibility.unobserve(subscription);
            }
        }
        self.register_all();
    }

    /// Forces every target back to the "0" baseline and starts it, whatever
    /// its current visibility. Subscriptions are left untouched.
    pub fn replay(&mut self) {
        let ids: Vec<TargetId> = self.targets.keys().copied().collect();
        for id in ids {
            let Some(entry) = self.targets.get(&id) else {
                continue;
            };
            let baseline = format_value(0.0, 0, entry.target.grouped, &self.config);
            self.surface.write(id, &baseline);
            self.controller.start(id, &mut self.scheduler);
        }
    }

    /// Cancels everything, drops every subscription, and releases the target
    /// mapping. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.controller.cancel_all(&mut self.scheduler);
        for (_, entry) in std::mem::take(&mut self.targets) {
            if let Some(subscription) = entry.subscription {
                self.visibility.unobserve(subscription);
            }
        }
        self.selection.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Targets that survived registration, in id order.
    pub fn registered(&self) -> impl Iterator<Item = &CounterTarget> {
        self.targets.values().map(|entry| &entry.target)
    }

    pub fn visibility_state(&self, id: TargetId) -> Option<VisibilityState> {
        self.targets.get(&id).map(|entry| entry.visibility)
    }

    pub fn is_animating(&self, id: TargetId) -> bool {
        self.controller.is_running(id)
    }

    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut V {
        &mut self.visibility
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut T {
        &mut self.surface
    }
}
