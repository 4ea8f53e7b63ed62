//! Reading and writing the managed dotfile.
//!
//! Disabled entries are kept in the file with every physical line prefixed by
//! [`DISABLED_PREFIX`]. That prefix is the only place the enabled/disabled
//! state is stored.

mod parse;
mod serialize;


pub use parse::parse;
pub use serialize::serialize;

/// Marker written in front of each line of a disabled entry.
pub const DISABLED_PREFIX: &str = "# ";
