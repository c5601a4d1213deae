//! The AppleScript protocol layer: wire codec, script generation, date
//! handling, and the osascript gateway.

pub mod builder;
pub mod codec;
pub mod date;
pub mod runner;
