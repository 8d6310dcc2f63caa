//! Real-time navigation core for a procedurally placed stellar field.
//!
//! The crate implements the non-rendering half of a starfield explorer: a
//! host loop feeds it one [`engine::input::InputState`] snapshot and a delta
//! time per frame, and the core answers with an updated camera pose, a hover
//! target under the pointer, and a read-only telemetry surface a HUD can
//! poll.
//!
//! ## Frame flow
//!
//! ```text
//! host loop
//!   └─> NavEngine::tick(dt, input)
//!       ├─> cruise active?  NavigationController writes the camera pose
//!       └─> otherwise       FreeFlightController writes the camera pose
//!                           Picker resolves the hover target
//!                           click (crosshair mode) -> start a cruise
//! ```
//!
//! Exactly one controller writes the camera pose on any frame; the mode
//! check in [`engine::core::NavEngine::tick`] is the mutual exclusion.
//!
//! ## Components
//!
//! - [`picking::Picker`] — ray tests against the object catalog with a
//!   distance-scaled effective radius, replacing unreliable hit-testing
//!   against instanced geometry.
//! - [`flight::FreeFlightController`] — crosshair/free-look camera with
//!   smoothed velocity, boost, and a boundary-sphere clamp.
//! - [`navigation::NavigationController`] — eased point-to-point cruise
//!   sessions toward a picked object.
//! - [`telemetry::TelemetryFeed`] — per-frame hover and cruise reports with
//!   human-readable distance and size buckets.
//!
//! All tuning constants the original field explorer hard-coded live in
//! [`engine::config::EngineConfig`] and load from JSON.

pub mod engine;
pub mod flight;
pub mod navigation;
pub mod picking;
pub mod telemetry;

pub use engine::core::NavEngine;
