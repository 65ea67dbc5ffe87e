//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pin-Adapter über embedded-hal und Pure Functions.

#![no_std]

pub mod control;
pub mod logic;
pub mod pins;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use control::OccupancyLoop;
pub use logic::{SELF_TEST_SEQUENCE, SelfTest, color_name, parse_millis, pattern_for};
pub use pins::{PullUpSensor, RgbIndicator};
pub use traits::{IndicatorError, IndicatorWriter, OccupancySource};
pub use types::{
    BLUE_ONLY, Channel, ChannelLevels, GREEN_ONLY, OFF, Occupancy, RED_ONLY, StartupMode,
    StepReport, WHITE,
};
