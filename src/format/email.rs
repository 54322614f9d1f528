//! Email address validation and normalization

use std::sync::OnceLock;

use regex::Regex;

use super::patterns::compiled;

/// Maximum length of the local part
const MAX_LOCAL_LEN: usize = 64;

/// Maximum length of a whole address
const MAX_EMAIL_LEN: usize = 254;

const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-]+)*",
    r"@(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}",
    r"|\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\])$",
);

/// Mail domains whose local parts ignore dots and `+tag` suffixes
const GMAIL_DOMAINS: [&str; 2] = ["gmail.com", "googlemail.com"];

static EMAIL: OnceLock<Regex> = OnceLock::new();

/// Checks for a dot-atom address at a dotted domain or bracketed IPv4.
pub fn is_email(s: &str) -> bool {
    if s.len() > MAX_EMAIL_LEN {
        return false;
    }
    match s.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_LEN => {}
        _ => return false,
    }
    compiled(&EMAIL, EMAIL_PATTERN).is_match(s)
}

/// Canonicalizes an email address.
///
/// Surrounding whitespace is trimmed and the address is lower-cased. For
/// Gmail addresses dots and any `+tag` are removed from the local part and
/// `googlemail.com` becomes `gmail.com`. A local part that starts with `+`
/// keeps its `+` so the result is still an address. Input that does not have exactly
/// one `@` is only trimmed and lower-cased.
pub fn normalize_email(s: &str) -> String {
    let lowered = s.trim().to_lowercase();

    let mut parts = lowered.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return lowered,
    };

    if GMAIL_DOMAINS.contains(&domain) {
        // A leading `+` is part of the name, not a tag
        let base = match local.split_once('+') {
            Some((base, _)) if !base.is_empty() => base,
            _ => local,
        };
        let local: String = base.chars().filter(|c| *c != '.').collect();
        return format!("{}@gmail.com", local);
    }

    format!("{}@{}", local, domain)
}
