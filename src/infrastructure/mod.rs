//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories. Everything that
//! touches the filesystem or spawns processes lives here.

pub mod oracle;
pub mod prefix_reader;
