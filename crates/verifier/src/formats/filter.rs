//! Format filters: email, URL and IP address acceptance.
//!
//! ```
//! use nebula_verifier::Filter;
//!
//! assert!(Filter::Email.accepts("user@example.com"));
//! assert!(Filter::Url.accepts("https://example.com/path"));
//! assert!(Filter::Ipv6.accepts("::1"));
//! assert_eq!("ipv4".parse::<Filter>().unwrap(), Filter::Ipv4);
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;
use crate::value::Value;

static EMAIL_REGEX: LazyLock<Option<regex::Regex>> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .ok()
});

/// Longest accepted local part, in bytes.
const MAX_LOCAL_PART: usize = 64;

/// Longest accepted domain, in bytes.
const MAX_DOMAIN: usize = 253;

/// URL schemes that do not need a host.
const HOSTLESS_SCHEMES: [&str; 3] = ["mailto", "news", "file"];

// ============================================================================
// FILTER
// ============================================================================

/// A well-known text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// `local@domain.tld`, with a dotted domain.
    Email,
    /// Absolute URL; a host is required except for `mailto:`, `news:` and
    /// `file:`.
    Url,
    /// IPv4 or IPv6 address.
    Ip,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// IPv6 address.
    Ipv6,
}

impl Filter {
    /// Every filter.
    pub const ALL: [Self; 5] = [Self::Email, Self::Url, Self::Ip, Self::Ipv4, Self::Ipv6];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Ip => "ip",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }

    /// Whether `input` matches the format.
    #[must_use]
    pub fn accepts(self, input: &str) -> bool {
        match self {
            Self::Email => is_email(input),
            Self::Url => is_url(input),
            Self::Ip => input.parse::<IpAddr>().is_ok(),
            Self::Ipv4 => input.parse::<Ipv4Addr>().is_ok(),
            Self::Ipv6 => input.parse::<Ipv6Addr>().is_ok(),
        }
    }

    /// Whether a value matches the format. Scalars and `Null` are tested
    /// through their text form; lists, objects and resources never match.
    #[must_use]
    pub fn accepts_value(self, value: &Value) -> bool {
        match value {
            Value::List(_) | Value::Object(_) | Value::Resource(_) => false,
            Value::String(s) => self.accepts(s),
            scalar => self.accepts(&scalar.to_text()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UsageError::UnknownFilter {
                name: name.to_owned(),
            })
    }
}

// ============================================================================
// ACCEPTORS
// ============================================================================

fn is_email(input: &str) -> bool {
    let Some((local, domain)) = input.rsplit_once('@') else {
        return false;
    };
    if local.len() > MAX_LOCAL_PART || domain.len() > MAX_DOMAIN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(input))
}

fn is_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Ok(url) = url::Url::parse(input) else {
        return false;
    };
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    has_host || HOSTLESS_SCHEMES.contains(&url.scheme())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@localhost", false)]
    #[case(".user@example.com", false)]
    #[case("us..er@example.com", false)]
    #[case("user@exa mple.com", false)]
    fn email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(Filter::Email.accepts(input), expected, "{input}");
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path?q=1#frag", true)]
    #[case("ftp://example.com", true)]
    #[case("mailto:user@example.com", true)]
    #[case("file:///etc/hosts", true)]
    #[case("urn:isbn:0451450523", false)]
    #[case("example.com", false)]
    #[case("http://", false)]
    #[case(" http://example.com", false)]
    #[case("invalid", false)]
    fn url(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(Filter::Url.accepts(input), expected, "{input}");
    }

    #[rstest]
    #[case(Filter::Ip, "127.0.0.1", true)]
    #[case(Filter::Ip, "2001:db8::1", true)]
    #[case(Filter::Ip, "256.0.0.1", false)]
    #[case(Filter::Ipv4, "192.168.1.10", true)]
    #[case(Filter::Ipv4, "01.2.3.4", false)]
    #[case(Filter::Ipv4, "::1", false)]
    #[case(Filter::Ipv6, "::1", true)]
    #[case(Filter::Ipv6, "127.0.0.1", false)]
    fn ip(#[case] filter: Filter, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(filter.accepts(input), expected, "{filter}: {input}");
    }

    #[test]
    fn values_use_their_text_form() {
        assert!(!Filter::Email.accepts_value(&Value::Null));
        assert!(!Filter::Ip.accepts_value(&Value::from(127)));
        assert!(!Filter::Url.accepts_value(&Value::from(vec!["http://example.com"])));
        assert!(Filter::Ipv4.accepts_value(&Value::from("10.0.0.1")));
    }

    #[test]
    fn parses_names() {
        assert_eq!("EMAIL".parse::<Filter>().unwrap(), Filter::Email);
        assert_eq!(" ip ".parse::<Filter>().unwrap(), Filter::Ip);
        let err = "isbn".parse::<Filter>().unwrap_err();
        assert!(matches!(err, UsageError::UnknownFilter { ref name } if name == "isbn"));
    }
}
