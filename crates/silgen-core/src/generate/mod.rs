//! Text-artifact generators.
//!
//! Both generators are pure renderers; the driver decides where the text
//! lands and whether an existing file may be overwritten.

pub mod cmake;
pub mod stub;
