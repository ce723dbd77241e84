//! Widget primitives
//!
//! Each widget draws itself for the current frame and reports the outcome:
//! buttons return whether they were pressed, sliders and toggles return the
//! new value, text inputs return whether the text length changed.

pub mod button;
pub mod label;
pub mod slider;
pub mod toggle;
pub mod text_input;

pub use text_input::TextInput;
