use lazy_static::lazy_static;
use regex::Regex;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

enum Rule {
    Required,
    Email,
}

/// One declarative field check. Routes declare an ordered list of these
/// against the request body; every violation is collected before responding.
pub struct FieldCheck<'a> {
    field: &'static str,
    value: Option<&'a str>,
    rule: Rule,
}

impl<'a> FieldCheck<'a> {
    pub fn required(field: &'static str, value: Option<&'a str>) -> Self {
        Self {
            field,
            value,
            rule: Rule::Required,
        }
    }

    pub fn email(field: &'static str, value: Option<&'a str>) -> Self {
        Self {
            field,
            value,
            rule: Rule::Email,
        }
    }

    fn violation(&self) -> Option<String> {
        match self.rule {
            Rule::Required => match self.value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(format!(r#"Please provide a value for "{}""#, self.field)),
            },
            // Absent values are the required rule's problem; this one only
            // judges a value that is actually there.
            Rule::Email => match self.value {
                Some(v) if !v.trim().is_empty() && !is_valid_email(v) => Some(format!(
                    r#"Please provide a valid email address for "{}""#,
                    self.field
                )),
                _ => None,
            },
        }
    }
}

/// Runs every check and aggregates all violations in declaration order.
pub fn validate(checks: &[FieldCheck<'_>]) -> Result<(), Vec<String>> {
    let violations: Vec<String> = checks.iter().filter_map(|c| c.violation()).collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
