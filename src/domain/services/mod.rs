//! Domain services
//!
//! Pure lookup and decision logic; no I/O.

mod signature_registry;
mod verdict_engine;

pub use signature_registry::{BUILTIN_SIGNATURES, SignatureDatabase, SignatureError};
pub use verdict_engine::{CategoryRule, DEFAULT_RULES, VerdictEngine, extension_of};
