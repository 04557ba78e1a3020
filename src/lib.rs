#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod controller;
pub mod ease;
pub mod error;
pub mod format;
pub mod host;
pub mod model;
pub mod orchestrator;
pub mod parse;

pub use backend::{FrameScheduler, TextSurface, VisibilityDetector};
pub use config::{Config, ConfigPatch, DecimalMode};
pub use controller::{AnimationController, FrameOutcome};
pub use ease::Ease;
pub use error::{ParseError, TickupError, TickupResult};
pub use format::format_value;
pub use model::{CounterTarget, FrameToken, SubscriptionId, TargetId, VisibilityState};
pub use orchestrator::Orchestrator;
pub use parse::{ParsedValue, parse_value};
