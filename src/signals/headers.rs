//! Header signal extraction.
//!
//! Captures the raw request headers the pipeline cares about and derives the
//! two secondary location signals: the country implied by a declared
//! timezone and the region subtag of the primary language tag. All
//! derivations are total; malformed or absent headers become empty strings.

use axum::http::HeaderMap;
use serde::Serialize;

use super::timezone::TimezoneTable;
use crate::config::{
    HEADER_ACCEPT, HEADER_ACCEPT_CHARSET, HEADER_ACCEPT_ENCODING, HEADER_ACCEPT_LANGUAGE,
    HEADER_DNT, HEADER_ORIGIN, HEADER_REFERER, HEADER_SEC_CH_UA, HEADER_SEC_CH_UA_MOBILE,
    HEADER_SEC_CH_UA_PLATFORM, HEADER_TIMEZONE, HEADER_USER_AGENT, HEADER_X_REQUESTED_WITH,
};

/// Raw header values plus the signals derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSignals {
    /// Accept-Language header, verbatim.
    pub accept_language: String,
    /// Client-declared timezone header, verbatim.
    pub timezone_header: String,
    /// User-Agent header, verbatim.
    pub user_agent: String,
    /// Accept header, verbatim.
    pub accept: String,
    /// Accept-Encoding header, verbatim.
    pub accept_encoding: String,
    /// Accept-Charset header, verbatim.
    pub accept_charset: String,
    /// DNT header, verbatim.
    pub dnt: String,
    /// Sec-CH-UA client-hint header, verbatim.
    pub sec_ch_ua: String,
    /// Sec-CH-UA-Mobile client-hint header, verbatim.
    pub sec_ch_ua_mobile: String,
    /// Sec-CH-UA-Platform client-hint header, verbatim.
    pub sec_ch_ua_platform: String,
    /// X-Requested-With header, verbatim.
    pub x_requested_with: String,
    /// Referer header, verbatim.
    pub referer: String,
    /// Origin header, verbatim.
    pub origin: String,
    /// Country implied by the declared timezone, or `""`.
    pub tz_country: String,
    /// Country parsed from the primary language tag, or `""`.
    pub lang_country: String,
}

/// Extracts [`HeaderSignals`] from a request's headers.
///
/// Holds the timezone table as an injected read-only dependency so tests can
/// substitute alternate tables.
#[derive(Debug, Clone, Default)]
pub struct HeaderExtractor {
    timezones: TimezoneTable,
}

impl HeaderExtractor {
    /// Creates an extractor backed by the given timezone table.
    pub fn new(timezones: TimezoneTable) -> Self {
        Self { timezones }
    }

    /// Derives header signals for one request.
    pub fn extract(&self, headers: &HeaderMap) -> HeaderSignals {
        let accept_language = header_value(headers, HEADER_ACCEPT_LANGUAGE);
        let timezone_header = header_value(headers, HEADER_TIMEZONE);

        let tz_country = self.timezones.country_for(&timezone_header);
        let lang_country = lang_country(&accept_language);

        HeaderSignals {
            accept_language,
            timezone_header,
            user_agent: header_value(headers, HEADER_USER_AGENT),
            accept: header_value(headers, HEADER_ACCEPT),
            accept_encoding: header_value(headers, HEADER_ACCEPT_ENCODING),
            accept_charset: header_value(headers, HEADER_ACCEPT_CHARSET),
            dnt: header_value(headers, HEADER_DNT),
            sec_ch_ua: header_value(headers, HEADER_SEC_CH_UA),
            sec_ch_ua_mobile: header_value(headers, HEADER_SEC_CH_UA_MOBILE),
            sec_ch_ua_platform: header_value(headers, HEADER_SEC_CH_UA_PLATFORM),
            x_requested_with: header_value(headers, HEADER_X_REQUESTED_WITH),
            referer: header_value(headers, HEADER_REFERER),
            origin: header_value(headers, HEADER_ORIGIN),
            tz_country,
            lang_country,
        }
    }
}

/// Country code from the primary entry of a language header.
///
/// Splits on commas, takes the first entry, trims it, and returns the
/// substring after the first hyphen (`en-US,en;q=0.9` → `US`). A missing
/// hyphen, an empty header, or a hyphen with nothing after it (`en-`) all
/// yield `""`.
pub fn lang_country(header: &str) -> String {
    if header.is_empty() {
        return String::new();
    }
    let primary = header.split(',').next().unwrap_or("").trim();
    match primary.find('-') {
        Some(idx) if idx + 1 < primary.len() => primary[idx + 1..].to_string(),
        _ => String::new(),
    }
}

/// Reads a header as a string; missing or non-UTF-8 values become `""`.
fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn make_headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_lang_country_examples() {
        assert_eq!(lang_country("en-US,en;q=0.9"), "US");
        assert_eq!(lang_country("en-"), "");
        assert_eq!(lang_country(""), "");
        assert_eq!(lang_country("fr"), "");
    }

    #[test]
    fn test_lang_country_trims_and_takes_first_entry() {
        assert_eq!(lang_country(" pt-BR , pt;q=0.8"), "BR");
        assert_eq!(lang_country("de-DE"), "DE");
        // Only the first hyphen splits; the rest passes through verbatim
        assert_eq!(lang_country("zh-Hant-TW"), "Hant-TW");
    }

    #[test]
    fn test_extract_derives_both_signals() {
        let extractor = HeaderExtractor::default();
        let headers = make_headers(&[
            ("accept-language", "en-GB,en;q=0.9"),
            ("x-timezone", "Europe/London"),
            ("user-agent", "Mozilla/5.0"),
        ]);

        let signals = extractor.extract(&headers);
        assert_eq!(signals.lang_country, "GB");
        assert_eq!(signals.tz_country, "GB");
        assert_eq!(signals.accept_language, "en-GB,en;q=0.9");
        assert_eq!(signals.timezone_header, "Europe/London");
        assert_eq!(signals.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_extract_missing_headers_are_empty() {
        let extractor = HeaderExtractor::default();
        let signals = extractor.extract(&HeaderMap::new());
        assert_eq!(signals, HeaderSignals::default());
    }

    #[test]
    fn test_extract_unknown_timezone_is_empty_country() {
        let extractor = HeaderExtractor::default();
        let headers = make_headers(&[("x-timezone", "Mars/Colony")]);
        let signals = extractor.extract(&headers);
        assert_eq!(signals.timezone_header, "Mars/Colony");
        assert_eq!(signals.tz_country, "");
    }

    #[test]
    fn test_extract_captures_raw_headers() {
        let extractor = HeaderExtractor::default();
        let headers = make_headers(&[
            ("accept", "text/html"),
            ("accept-encoding", "gzip, br"),
            ("dnt", "1"),
            ("sec-ch-ua", "\"Chromium\";v=\"120\""),
            ("sec-ch-ua-mobile", "?0"),
            ("sec-ch-ua-platform", "\"Linux\""),
            ("x-requested-with", "XMLHttpRequest"),
            ("referer", "https://example.com/page"),
            ("origin", "https://example.com"),
        ]);

        let signals = extractor.extract(&headers);
        assert_eq!(signals.accept, "text/html");
        assert_eq!(signals.accept_encoding, "gzip, br");
        assert_eq!(signals.dnt, "1");
        assert_eq!(signals.sec_ch_ua, "\"Chromium\";v=\"120\"");
        assert_eq!(signals.sec_ch_ua_mobile, "?0");
        assert_eq!(signals.sec_ch_ua_platform, "\"Linux\"");
        assert_eq!(signals.x_requested_with, "XMLHttpRequest");
        assert_eq!(signals.referer, "https://example.com/page");
        assert_eq!(signals.origin, "https://example.com");
    }

    #[test]
    fn test_alternate_timezone_table() {
        let extractor = HeaderExtractor::new(TimezoneTable::from_pairs(&[("Test/Zone", "XX")]));
        let headers = make_headers(&[("x-timezone", "Test/Zone")]);
        assert_eq!(extractor.extract(&headers).tz_country, "XX");
    }
}
