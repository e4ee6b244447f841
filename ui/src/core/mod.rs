//! Platform plumbing shared by the site: preference persistence, platform
//! signals and timers.

pub mod platform;
pub mod storage;
pub mod timing;
