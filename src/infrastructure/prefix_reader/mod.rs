//! Prefix reader implementations

mod local_prefix_reader;

pub use local_prefix_reader::LocalPrefixReader;
