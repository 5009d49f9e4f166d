#![forbid(unsafe_code)]

//! Core: virtual-clock timer queue and subscriber setup.

pub mod logging;
pub mod scheduler;

pub use scheduler::{TimerId, TimerQueue};
