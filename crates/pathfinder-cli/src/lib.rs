//! Pathfinder CLI library.
//!
//! Output formatting and the interactive shell used by the `pathfinder`
//! binary. Kept in a library target so both can be unit tested without
//! spawning a process.

pub mod output;
pub mod shell;
