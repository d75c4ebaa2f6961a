//! Inbound HTTP header name constants.
//!
//! This module defines constants for the request headers the enrichment
//! pipeline reads. Secondary location signals are derived from the language
//! and timezone headers; the remaining headers are captured raw for
//! downstream consumers.

// Client address resolution
/// X-Forwarded-For header (first entry wins over the transport peer address)
pub const HEADER_X_FORWARDED_FOR: &str = "X-Forwarded-For";

// Secondary location signals
/// Accept-Language header (region subtag of the primary tag yields `langCountry`)
pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";
/// Client-declared timezone header (mapped to `tzCountry` via the static table)
pub const HEADER_TIMEZONE: &str = "X-Timezone";

// Client identification
/// User-Agent header
pub const HEADER_USER_AGENT: &str = "User-Agent";
/// Sec-CH-UA client-hint header
pub const HEADER_SEC_CH_UA: &str = "Sec-CH-UA";
/// Sec-CH-UA-Mobile client-hint header
pub const HEADER_SEC_CH_UA_MOBILE: &str = "Sec-CH-UA-Mobile";
/// Sec-CH-UA-Platform client-hint header
pub const HEADER_SEC_CH_UA_PLATFORM: &str = "Sec-CH-UA-Platform";

// Raw capture
/// Accept header
pub const HEADER_ACCEPT: &str = "Accept";
/// Accept-Encoding header
pub const HEADER_ACCEPT_ENCODING: &str = "Accept-Encoding";
/// Accept-Charset header
pub const HEADER_ACCEPT_CHARSET: &str = "Accept-Charset";
/// DNT (Do Not Track) header
pub const HEADER_DNT: &str = "DNT";
/// X-Requested-With header
pub const HEADER_X_REQUESTED_WITH: &str = "X-Requested-With";
/// Referer header
pub const HEADER_REFERER: &str = "Referer";
/// Origin header
pub const HEADER_ORIGIN: &str = "Origin";
