pub mod coalesce;
pub mod config;
pub mod controller;
pub mod drag;
pub mod frame;
pub mod geometry;

pub use coalesce::Coalescer;
pub use config::{parse_position_attr, ConfigError, SliderConfig};
pub use controller::{DividerController, SliderId, SliderSurface};
pub use drag::{DragInput, DragMachine, DragPhase, PointerKind, Transition};
pub use frame::{FrameScheduler, ManualFrameHandle, ManualFrames};
pub use geometry::{compute_position, Bounds, ClipPolygon, Position};
