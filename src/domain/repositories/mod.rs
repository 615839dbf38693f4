//! Repository traits (interfaces)
//!
//! Contracts for the collaborators the analysis depends on. Concrete
//! implementations live in the infrastructure layer.

mod prefix_reader;
mod type_oracle;

pub use prefix_reader::{PREFIX_LEN, PrefixReadError, PrefixReader};
pub use type_oracle::{OracleError, TypeOracle};
