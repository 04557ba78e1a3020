#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutExpo,
}

impl Ease {
    /// Resolves a configured curve name. Unknown names fall back to
    /// [`Ease::OutExpo`] rather than erroring, so resolution happens once at
    /// configuration time and no string lookup survives into the frame path.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Self::Linear,
            "easeInQuad" => Self::InQuad,
            "easeOutQuad" => Self::OutQuad,
            "easeInOutQuad" => Self::InOutQuad,
            "easeInCubic" => Self::InCubic,
            "easeOutCubic" => Self::OutCubic,
            "easeInOutCubic" => Self::InOutCubic,
            "easeOutExpo" => Self::OutExpo,
            _ => Self::OutExpo,
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => (t - 1.0).powi(3) + 1.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0).powi(2) + 1.0
                }
            }
            // 2^(-10t) never reaches zero, so the endpoint is pinned.
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (2.0_f64).powf(-10.0 * t)
                }
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::OutExpo
    }
}
