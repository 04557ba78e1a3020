use crate::model::{FrameToken, SubscriptionId, TargetId};

/// Frame-synchronized scheduler contract.
///
/// A request yields exactly one delivery for its token, carrying a timestamp
/// that is monotonically increasing across deliveries. `cancel_frame` revokes
/// a pending request; a delivery already in flight may still arrive and is
/// discarded by the token check on the consumer side.
pub trait FrameScheduler {
    fn request_frame(&mut self, target: TargetId) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Viewport-visibility detector contract.
///
/// One subscription per target; the detector delivers enter/exit transition
/// events for the target until the subscription is dropped.
pub trait VisibilityDetector {
    fn observe(&mut self, target: TargetId, margin: &str) -> SubscriptionId;
    fn unobserve(&mut self, subscription: SubscriptionId);
}

/// Source and sink for a target's decorated text.
pub trait TextSurface {
    /// Current decorated text, or `None` when the target does not exist.
    fn read(&self, target: TargetId) -> Option<String>;
    fn write(&mut self, target: TargetId, text: &str);
}
