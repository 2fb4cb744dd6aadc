//! Game implementations.

pub mod slide;
