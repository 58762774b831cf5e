//! Models used by the command layer.

pub mod output;
