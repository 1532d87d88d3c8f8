//! Embedded word lists
//!
//! Word lists and the Irish meaning table compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/english.rs"));
include!(concat!(env!("OUT_DIR"), "/irish.rs"));
include!(concat!(env!("OUT_DIR"), "/irish_meanings.rs"));
