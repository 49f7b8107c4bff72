//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, timers, the
//! `<html>` theme attribute) and chart geometry from page and component logic
//! so both stay testable without a DOM.

pub mod chart_math;
pub mod clock;
pub mod dark_mode;
pub mod task;
