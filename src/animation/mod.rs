pub mod easing;
pub mod timeline;
pub mod transition;

pub use easing::EasingType;
pub use timeline::{CellTween, Timeline, TimelineEngine, TimelineRole};
pub use transition::{SelectOutcome, TransitionController, TransitionPhase};
