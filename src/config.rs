use crate::error::{TickupError, TickupResult};

/// Per-orchestrator options. A JSON options object may be partial; every
/// field falls back to its default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Total animation time budget in milliseconds.
    pub duration_ms: u64,
    /// Curve name from the easing library; unknown names fall back to
    /// `easeOutExpo`.
    pub easing: String,
    /// Margin handed to the visibility detector at subscription time.
    pub offset: String,
    /// Animate only on the first visibility entry and keep the final value.
    pub once: bool,
    /// Fixed decimal places, or auto-detected from the source text.
    pub decimals: DecimalMode,
    /// Thousands-grouping string, reinserted only when the source had it.
    pub separator: String,
    /// Literal decoration stripped on parse and re-applied on format.
    pub prefix: String,
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: 2_000,
            easing: "easeOutExpo".to_string(),
            offset: "0px".to_string(),
            once: false,
            decimals: DecimalMode::Auto,
            separator: ",".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> TickupResult<()> {
        if self.duration_ms == 0 {
            return Err(TickupError::config("duration_ms must be > 0"));
        }
        Ok(())
    }

    /// Applies a partial options object, leaving unset fields untouched.
    pub fn merged(&self, patch: ConfigPatch) -> Config {
        Config {
            duration_ms: patch.duration_ms.unwrap_or(self.duration_ms),
            easing: patch.easing.unwrap_or_else(|| self.easing.clone()),
            offset: patch.offset.unwrap_or_else(|| self.offset.clone()),
            once: patch.once.unwrap_or(self.once),
            decimals: patch.decimals.unwrap_or(self.decimals),
            separator: patch.separator.unwrap_or_else(|| self.separator.clone()),
            prefix: patch.prefix.unwrap_or_else(|| self.prefix.clone()),
            suffix: patch.suffix.unwrap_or_else(|| self.suffix.clone()),
        }
    }
}

/// Decimal-place policy: `"auto"` counts fractional digits in the source
/// text, an integer fixes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalMode {
    Auto,
    #[serde(untagged)]
    Fixed(u32),
}

/// All-optional mirror of [`Config`] for `update_options`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub duration_ms: Option<u64>,
    pub easing: Option<String>,
    pub offset: Option<String>,
    pub once: Option<bool>,
    pub decimals: Option<DecimalMode>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}
