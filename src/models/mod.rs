//! Data structures.

pub mod key_template;
