//! Pipeline stages: decrypt, extract, save.

pub mod decrypt;
pub mod extract;
pub mod pipeline;
pub mod template;
