//! Starting and ending POAP events.

pub mod embed;
pub mod end;
pub mod start;

#[cfg(test)]
mod test;
