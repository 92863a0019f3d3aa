//! Embedded word list
//!
//! Target pool compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/targets.rs"));
