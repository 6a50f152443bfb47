//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use super::ParseWarning;
use super::overrides::Overrides;
use crate::options::RatioMode;

/// Parse an options query string into overrides + warnings.
pub(crate) fn parse_query(query: &str) -> (Overrides, Vec<ParseWarning>) {
    let mut overrides = Overrides::new();
    let mut warnings = Vec::new();

    for (key, value) in pairs(query) {
        let key_lower = key.to_ascii_lowercase();
        dispatch_key(&key_lower, &value, &mut overrides, &mut warnings);
    }

    (overrides, warnings)
}

/// Decoded `(key, value)` pairs of a query string, in order.
pub(crate) fn pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    split_query(query).map(|pair| {
        let (raw_key, raw_value) = split_pair(pair);
        (percent_decode(raw_key), percent_decode(raw_value))
    })
}

fn dispatch_key(key: &str, value: &str, o: &mut Overrides, warnings: &mut Vec<ParseWarning>) {
    match key {
        "max" | "maxvisible" | "max_visible" => {
            if let Some(n) = parse_count(value) {
                set_or_warn(&mut o.max_visible, Some(n), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "max",
                    value: String::from(value),
                    reason: "expected a positive integer",
                });
            }
        }
        "gap" => {
            if let Some(px) = parse_px(value) {
                set_or_warn(&mut o.gap, Some(px), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "gap",
                    value: String::from(value),
                    reason: "expected a pixel length",
                });
            }
        }
        "radius" | "cornerradius" | "corner_radius" => {
            if let Some(px) = parse_px(value) {
                set_or_warn(&mut o.corner_radius, Some(px), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "radius",
                    value: String::from(value),
                    reason: "expected a pixel length",
                });
            }
        }
        "hero" | "herowidth" | "hero_width" => {
            if let Some(pct) = parse_percent(value) {
                set_or_warn(&mut o.hero_width_percent, Some(pct), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "hero",
                    value: String::from(value),
                    reason: "expected a percentage between 1 and 99",
                });
            }
        }
        "ratios" | "ratio" => {
            if let Some(mode) = parse_ratio_mode(value) {
                set_or_warn(&mut o.ratio_mode, Some(mode), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "ratios",
                    value: String::from(value),
                    reason: "expected locked|intrinsic",
                });
            }
        }
        "intrinsic" => {
            if let Some(b) = parse_bool(value) {
                let mode = if b {
                    RatioMode::Intrinsic
                } else {
                    RatioMode::Locked
                };
                set_or_warn(&mut o.ratio_mode, Some(mode), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "intrinsic",
                    value: String::from(value),
                    reason: "expected true|false|1|0|yes|no|on|off",
                });
            }
        }
        _ => {
            warnings.push(ParseWarning::KeyNotRecognized {
                key: String::from(key),
                value: String::from(value),
            });
        }
    }
}

/// Store `parsed`; a key given twice keeps the later value and warns.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(v) = parsed else { return };
    if field.replace(v).is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
}

// ---- Value parsers ----

fn parse_count(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&v| v > 0)
}

/// Non-negative pixel length, with an optional `px` suffix.
fn parse_px(s: &str) -> Option<u32> {
    let s = s.trim();
    let s = s
        .strip_suffix("px")
        .or_else(|| s.strip_suffix("PX"))
        .unwrap_or(s);
    s.trim().parse::<u32>().ok()
}

/// `66`, `66%` or `66.4` → 66. Rejects values outside 1–99.
fn parse_percent(s: &str) -> Option<u8> {
    let s = s.trim().trim_end_matches('%');
    let v: f64 = s.trim().parse().ok()?;
    let rounded = v.round();
    (1.0..=99.0).contains(&rounded).then_some(rounded as u8)
}

fn parse_ratio_mode(s: &str) -> Option<RatioMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "locked" | "fixed" => Some(RatioMode::Locked),
        "intrinsic" | "natural" => Some(RatioMode::Intrinsic),
        _ => None,
    }
}

/// Switch values accepted by `intrinsic=`.
fn parse_bool(s: &str) -> Option<bool> {
    const ON: [&str; 4] = ["true", "1", "yes", "on"];
    const OFF: [&str; 4] = ["false", "0", "no", "off"];
    let s = s.trim();
    if ON.iter().any(|v| s.eq_ignore_ascii_case(v)) {
        Some(true)
    } else if OFF.iter().any(|v| s.eq_ignore_ascii_case(v)) {
        Some(false)
    } else {
        None
    }
}

// ---- Query string tokenizer ----

/// Non-empty `&`-separated segments, ignoring one leading `?`.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
/// Invalid UTF-8 after decoding is replaced, not rejected.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub(crate) fn percent_encode(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0xf) as usize] as char);
        }
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    char::from(b).to_digit(16).map(|d| d as u8)
}
