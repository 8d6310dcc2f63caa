//! Shared constant tables for the starfield navigation core.

pub mod class;
pub mod units;
