//! Cupola Dash mission progress engine.
//!
//! Headless and rendering-agnostic: the browser shell owns the 3D scene
//! and forwards interaction/tick events; this crate owns the rules that
//! turn them into score, completion state, and durable progress.

pub mod api;
pub mod core;
pub mod input;
pub mod missions;
pub mod persist;
pub mod registry;

// Re-export key types at crate root for convenience
pub use crate::api::descriptor::{
    ActivationMode, AvatarConfig, CompletionRule, CounterGoal, MissionDescriptor,
    OxygenConfig, ScoreRule, TimeBonus,
};
pub use crate::api::engine::{MissionEngine, MissionState};
pub use crate::api::types::{
    CounterId, EngineError, EntityId, MissionId, ProgressEvent, Severity, WireEvent,
};
pub use crate::core::avatar::AvatarBody;
pub use crate::core::detector::ProximityDetector;
pub use crate::core::progress::ProgressTracker;
pub use crate::core::time::{FixedTimestep, WallClock};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::persist::aggregate::MissionOverview;
pub use crate::persist::file::FileStore;
pub use crate::persist::{MemoryStore, ProgressStore, StoreError, UnavailableStore};
pub use crate::registry::{Entity, EntityRegistry, Placement};
