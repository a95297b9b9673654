//! Presentation
//!
//! Formats ship state for the console, keeping printing out of the models.

pub mod presenters;
