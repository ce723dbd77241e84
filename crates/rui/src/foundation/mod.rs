//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the UI layer:
//! - Math types (vectors, colors, rectangles)
//! - Logging utilities

pub mod math;
pub mod logging;
