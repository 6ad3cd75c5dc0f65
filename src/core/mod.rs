//! Core functionality: the embedded page markup and its structure report

pub mod markup;
pub mod report;
