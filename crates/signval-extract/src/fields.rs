//! Contact-field extraction from the full OCR text.

use std::sync::LazyLock;

use regex::Regex;

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Way|Court|Ct)",
    )
    .expect("valid address regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
        .expect("valid phone regex")
});

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?[a-zA-Z0-9][a-zA-Z0-9-]{1,61}[a-zA-Z0-9]\.[a-zA-Z]{2,}",
    )
    .expect("valid website regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

fn all_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[must_use]
pub fn extract_addresses(text: &str) -> Vec<String> {
    all_matches(&ADDRESS_RE, text)
}

#[must_use]
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    all_matches(&PHONE_RE, text)
}

#[must_use]
pub fn extract_websites(text: &str) -> Vec<String> {
    all_matches(&WEBSITE_RE, text)
}

#[must_use]
pub fn extract_emails(text: &str) -> Vec<String> {
    all_matches(&EMAIL_RE, text)
}

/// Trimmed non-empty lines that carry none of the extracted contact strings.
#[must_use]
pub fn other_text(text: &str, phones: &[String], websites: &[String], emails: &[String]) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            !phones
                .iter()
                .chain(websites)
                .chain(emails)
                .any(|needle| line.contains(needle.as_str()))
        })
        .map(str::to_owned)
        .collect()
}
