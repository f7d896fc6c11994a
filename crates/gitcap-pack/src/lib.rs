//! Pack payload extraction from captured git smart-HTTP request bodies.
//!
//! The request body of a push contains pkt-line ref update commands, a flush
//! packet, and then the pack stream itself. This crate locates the pack
//! stream by its 4-byte signature and isolates it so standard git tooling
//! (`git index-pack`, `git verify-pack`) can consume it.

mod error;
mod extract;
mod scan;

pub use error::PackError;
pub use extract::{extract_pack_file, ExtractReport};
pub use scan::{find_signature, locate_pack, PackHeader, PackPayload, PACK_HEADER_LEN, PACK_SIGNATURE};

/// Result type for pack extraction operations.
pub type Result<T> = std::result::Result<T, PackError>;
