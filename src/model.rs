/// Stable handle of a host element carrying animated text.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub u64);

/// Token identifying one pending frame request at the scheduler.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameToken(pub u64);

/// Token identifying one live visibility subscription at the detector.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SubscriptionId(pub u64);

/// A registered element, parsed once at registration and immutable until an
/// explicit reconfiguration re-derives it.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub id: TargetId,
    /// Decorated text as found at registration, restored on `restart`.
    pub original_text: String,
    /// Final number the element displays once animation completes.
    pub value: f64,
    pub decimals: u32,
    /// Whether the source text carried the group separator.
    pub grouped: bool,
}

/// Visibility lifecycle of one target, driven exclusively by detector events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityState {
    #[default]
    Unseen,
    Visible,
    Hidden,
}
