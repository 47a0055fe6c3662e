//! Device groups and the matcher.
//!
//! A device group is a named bucket of clients ("smartphone", "tablet"...)
//! with a ranking and a test over the probes. Matching evaluates every group
//! in ascending ranking and collects those whose test passes into a
//! [`MatchedSet`].

pub mod defaults;
mod group;
mod registry;

pub use group::{DeviceGroup, DeviceGroupDescriptor, MatchScope, TestFn};
pub use registry::{DeviceGroupRegistry, MatchedSet};
