#[derive(Debug, Clone)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Accepts `local@domain.tld`-shaped addresses: no whitespace, a single
    /// `@`, and a dotted domain with non-empty labels around the dot.
    pub fn parse(s: String) -> Result<Self, String> {
        if !is_valid_email(&s) {
            return Err(format!("{} is not a valid waitlist email.", s));
        };
        Ok(Self(s))
    }
}

fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The dot must be interior to the domain.
    let mut interior = domain.chars();
    interior.next();
    interior.next_back();
    interior.as_str().contains('.')
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for WaitlistEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        WaitlistEmail::parse(value)
    }
}
