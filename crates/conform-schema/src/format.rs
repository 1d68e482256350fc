//! # Format Validators
//!
//! Pure predicates deciding whether a string conforms to a named semantic
//! format. Total over any input: no validator fails or panics.
//!
//! Unknown format names are treated as always-valid. This permissiveness
//! is deliberate — schemas referencing formats this engine does not know
//! must keep working unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use url::Url;
use uuid::{Uuid, Variant};

/// Check a string against a named format.
///
/// Returns `true` for unknown format names.
pub fn validate_format(name: &str, value: &str) -> bool {
    match name {
        "email" => is_email(value),
        "uri" => is_uri(value),
        "uri-reference" => is_uri_reference(value),
        "date" => is_date(value),
        "date-time" => is_date_time(value),
        "time" => is_time(value),
        "hostname" => is_hostname(value),
        "ipv4" => value.parse::<std::net::Ipv4Addr>().is_ok(),
        "ipv6" => value.parse::<std::net::Ipv6Addr>().is_ok(),
        "uuid" => is_uuid(value),
        "color" => is_color(value),
        "regex" => Regex::new(value).is_ok(),
        _ => true,
    }
}

/// Exactly one `@`, with a non-empty local part and domain.
fn is_email(value: &str) -> bool {
    let mut parts = value.splitn(3, '@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// An absolute URI.
fn is_uri(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// An absolute URI or a relative reference.
fn is_uri_reference(value: &str) -> bool {
    if Url::parse(value).is_ok() {
        return true;
    }
    // Resolve against a throwaway base to accept relative references.
    match Url::parse("https://relative-reference.invalid/") {
        Ok(base) => base.join(value).is_ok(),
        Err(_) => false,
    }
}

/// `YYYY-MM-DD`, calendar-valid.
fn is_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Any string parseable as a timestamp: RFC 3339, or a naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.fff]` form without an offset.
fn is_date_time(value: &str) -> bool {
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    NAIVE_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

/// `HH:MM[:SS][.fff]` with an optional `Z` or `±HH:MM` offset suffix.
fn is_time(value: &str) -> bool {
    let clock = match strip_time_offset(value) {
        Some(clock) => clock,
        None => return false,
    };
    const CLOCK_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
    CLOCK_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(clock, fmt).is_ok())
}

/// Remove a trailing `Z` or `±HH:MM` offset, validating the offset digits.
/// Returns `None` when an offset is present but malformed.
fn strip_time_offset(value: &str) -> Option<&str> {
    if !value.is_ascii() {
        return Some(value);
    }
    if let Some(clock) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        return Some(clock);
    }
    // ±HH:MM is exactly six chars; anything shorter has no room for a clock.
    if value.len() > 6 {
        let (clock, suffix) = value.split_at(value.len() - 6);
        let bytes = suffix.as_bytes();
        if bytes[0] == b'+' || bytes[0] == b'-' {
            let well_formed = bytes[3] == b':'
                && suffix[1..3].parse::<u8>().is_ok_and(|h| h < 24)
                && suffix[4..6].parse::<u8>().is_ok_and(|m| m < 60);
            return if well_formed { Some(clock) } else { None };
        }
    }
    Some(value)
}

/// RFC-1123-like hostname: dot-separated labels of alphanumerics and
/// hyphens, 1–63 chars each, not hyphen-edged, 253 chars total.
fn is_hostname(value: &str) -> bool {
    if value.is_empty() || value.len() > 253 {
        return false;
    }
    value.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// RFC-4122 UUID: parseable, version 1–5, RFC variant bits.
fn is_uuid(value: &str) -> bool {
    match Uuid::parse_str(value) {
        Ok(uuid) => {
            matches!(uuid.get_version_num(), 1..=5) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

/// `#RGB`, `#RRGGBB`, or `#RRGGBBAA` hex color.
fn is_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
