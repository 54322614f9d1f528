//! Pattern-based format predicates

use std::net::IpAddr;
use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use uuid::Uuid;

/// Maximum accepted URL length
const MAX_URL_LEN: usize = 2083;

/// Maximum DNS name length, not counting dots
const MAX_DNS_LEN: usize = 255;

/// Length of the canonical hyphenated UUID form
const UUID_HYPHENATED_LEN: usize = 36;

const URL_PATTERN: &str = concat!(
    r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*://)?",
    r"(?:[^\s:@/]+(?::[^\s@/]*)?@)?",
    r"(?:localhost",
    r"|(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])",
    r"|\[[0-9a-fA-F:.]+\]",
    r"|(?:[a-zA-Z0-9](?:[a-zA-Z0-9_\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}\.?)",
    r"(?::[0-9]{1,5})?",
    r"(?:[/?#]\S*)?$",
);

const DNS_PATTERN: &str =
    r"^(?:[a-zA-Z0-9_][a-zA-Z0-9_\-]{0,62})(?:\.[a-zA-Z0-9_][a-zA-Z0-9_\-]{0,62})*[._]?$";

const HEX_COLOR_PATTERN: &str = r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

const RGB_COLOR_PATTERN: &str = concat!(
    r"^rgb\(\s*(?:0|[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])",
    r"\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])",
    r"\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])\s*\)$",
);

const LATITUDE_PATTERN: &str = r"^[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)$";

const LONGITUDE_PATTERN: &str =
    r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$";

const PHONE_PATTERN: &str = r"^[\t\n\f\r 0-9+\-()]+$";

static URL: OnceLock<Regex> = OnceLock::new();
static DNS: OnceLock<Regex> = OnceLock::new();
static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
static RGB_COLOR: OnceLock<Regex> = OnceLock::new();
static LATITUDE: OnceLock<Regex> = OnceLock::new();
static LONGITUDE: OnceLock<Regex> = OnceLock::new();
static PHONE: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled pattern, compiling it on first use.
pub(super) fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    // Patterns are compile-time constants covered by tests
    cell.get_or_init(|| Regex::new(pattern).expect("format pattern must compile"))
}

/// Checks for a URL with optional scheme, userinfo, port and path.
///
/// Hosts may be `localhost`, an IPv4 address, a bracketed IPv6 address or
/// a dotted ASCII DNS name with an alphabetic top-level label.
pub fn is_url(s: &str) -> bool {
    if s.len() <= 3 || s.len() >= MAX_URL_LEN || s.starts_with('.') {
        return false;
    }
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    compiled(&URL, URL_PATTERN).is_match(s)
}

/// Checks for the canonical hyphenated 8-4-4-4-12 UUID form.
pub fn is_uuid(s: &str) -> bool {
    s.len() == UUID_HYPHENATED_LEN && Uuid::parse_str(s).is_ok()
}

/// Checks for a `#RGB` or `#RRGGBB` color, with the `#` optional.
pub fn is_hex_color(s: &str) -> bool {
    compiled(&HEX_COLOR, HEX_COLOR_PATTERN).is_match(s)
}

/// Checks for `rgb(r, g, b)` with components in 0..=255.
pub fn is_rgb_color(s: &str) -> bool {
    compiled(&RGB_COLOR, RGB_COLOR_PATTERN).is_match(s)
}

/// Checks for a DNS name. IP addresses are not DNS names.
pub fn is_dns_name(s: &str) -> bool {
    if s.is_empty() || s.chars().filter(|c| *c != '.').count() > MAX_DNS_LEN {
        return false;
    }
    if s.parse::<IpAddr>().is_ok() {
        return false;
    }
    compiled(&DNS, DNS_PATTERN).is_match(s)
}

/// Checks for non-empty, canonically padded standard base64.
pub fn is_base64(s: &str) -> bool {
    if s.is_empty() || s.len() % 4 != 0 {
        return false;
    }
    STANDARD.decode(s).is_ok()
}

/// Checks for a decimal latitude in -90..=90.
pub fn is_latitude(s: &str) -> bool {
    compiled(&LATITUDE, LATITUDE_PATTERN).is_match(s)
}

/// Checks for a decimal longitude in -180..=180.
pub fn is_longitude(s: &str) -> bool {
    compiled(&LONGITUDE, LONGITUDE_PATTERN).is_match(s)
}

/// Permissive phone syntax: digits, ASCII whitespace, `+`, `-`, `(` and `)`.
pub fn is_phone(s: &str) -> bool {
    compiled(&PHONE, PHONE_PATTERN).is_match(s)
}
