//! Syntactic email address check
//!
//! Known-permissive: accepts `local@domain.tld` where each part is a run of
//! characters other than whitespace and `@`. Multiple dots, odd TLDs and
//! many strings the full address grammar rejects still pass. No DNS or
//! deliverability check is made.

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// True when `text` has the `local@domain.tld` shape
pub fn validate_email_address(text: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(text))
}
