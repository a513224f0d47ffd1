use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose `local@domain.tld` shape check. Not RFC validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.id"));
    }

    #[test]
    fn test_rejects_missing_at_or_dot() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a.b.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a.b@co"));
    }

    #[test]
    fn test_rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }
}
