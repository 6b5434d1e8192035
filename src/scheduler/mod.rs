//! Background jobs.
//!
//! - `auto_end` - One-shot jobs ending POAP events once their duration elapsed

pub mod auto_end;
