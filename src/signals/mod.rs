//! Secondary signal extraction from request headers and client metadata.
//!
//! Each extractor is a leaf: it reads its inputs, produces a value for every
//! possible input (misses become empty strings or default flags) and touches
//! no shared state.

mod client;
mod headers;
mod timezone;

pub use client::{parse_client_signature, ClientSignature, DeviceCategory};
pub use headers::{lang_country, HeaderExtractor, HeaderSignals};
pub use timezone::TimezoneTable;
