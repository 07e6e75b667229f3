//! Validation gate: structural minimums checked before export or publish.
//!
//! Validation is advisory to the editor: it blocks export and publish, but
//! never blocks autosave of draft content.

use crate::content::{ContentMap, SectionContent};
use crate::section::SectionKind;
use crate::template::Template;

/// A single human-readable validation failure, tied to a section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationFailure {
    pub section: SectionKind,
    pub message: String,
}

/// Outcome of validating a content map against a template.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check a content map against the structural minimums of a template.
///
/// Only sections present in the template layout are checked; content for
/// other sections is dead data and ignored.
pub fn validate_content(content: &ContentMap, template: &Template) -> ValidationReport {
    let mut failures = Vec::new();

    for kind in &template.layout {
        match kind {
            SectionKind::Header => {
                let has_identity = match content.get(SectionKind::Header) {
                    Some(SectionContent::Header(h)) => {
                        non_empty(h.title.as_deref()) || non_empty(h.logo.as_deref())
                    }
                    _ => false,
                };
                if !has_identity {
                    failures.push(ValidationFailure {
                        section: SectionKind::Header,
                        message: "Header title or logo is required".to_string(),
                    });
                }
            }
            SectionKind::Hero => {
                let has_title = match content.get(SectionKind::Hero) {
                    Some(SectionContent::Hero(h)) => non_empty(h.title.as_deref()),
                    _ => false,
                };
                if !has_title {
                    failures.push(ValidationFailure {
                        section: SectionKind::Hero,
                        message: "Hero title is required".to_string(),
                    });
                }
            }
            SectionKind::Contact => {
                let has_channel = match content.get(SectionKind::Contact) {
                    Some(SectionContent::Contact(c)) => {
                        non_empty(c.email.as_deref()) || non_empty(c.phone.as_deref())
                    }
                    _ => false,
                };
                if !has_channel {
                    failures.push(ValidationFailure {
                        section: SectionKind::Contact,
                        message: "At least one contact method (email or phone) is required"
                            .to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    ValidationReport { failures }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Field-level checks used by the editor for inline feedback.
pub mod field {
    /// Result of a single field check.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FieldCheck {
        pub is_valid: bool,
        pub message: &'static str,
    }

    const OK: FieldCheck = FieldCheck { is_valid: true, message: "" };

    fn fail(message: &'static str) -> FieldCheck {
        FieldCheck { is_valid: false, message }
    }

    pub fn email(value: &str) -> FieldCheck {
        // local@domain.tld, no whitespace or extra @
        let mut parts = value.split('@');
        let valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None)
                if !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !value.chars().any(char::is_whitespace)
        );
        if valid {
            OK
        } else {
            fail("Please enter a valid email address")
        }
    }

    pub fn url(value: &str) -> FieldCheck {
        let valid = (value.strip_prefix("http://").or_else(|| value.strip_prefix("https://")))
            .is_some_and(|rest| !rest.is_empty());
        if valid {
            OK
        } else {
            fail("Please enter a valid URL starting with http:// or https://")
        }
    }

    pub fn phone(value: &str) -> FieldCheck {
        let digits: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        let mut chars = digits.chars();
        let first = chars.next();
        let valid = match first {
            Some('+') => {
                let rest: Vec<char> = chars.collect();
                !rest.is_empty()
                    && rest[0] != '0'
                    && rest.len() <= 16
                    && rest.iter().all(char::is_ascii_digit)
            }
            Some(c) => {
                c.is_ascii_digit()
                    && c != '0'
                    && digits.len() <= 16
                    && digits.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        };
        if valid {
            OK
        } else {
            fail("Please enter a valid phone number")
        }
    }

    pub fn text(value: &str) -> FieldCheck {
        if value.chars().count() > 200 {
            fail("Text must be less than 200 characters")
        } else {
            OK
        }
    }

    pub fn textarea(value: &str) -> FieldCheck {
        if value.chars().count() > 1000 {
            fail("Content must be less than 1000 characters")
        } else {
            OK
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{ContactContent, HeaderContent, HeroContent};
    use crate::template::TemplateCatalog;

    fn portfolio_content(contact: ContactContent) -> ContentMap {
        [
            SectionContent::Header(HeaderContent {
                title: Some("Jane".to_string()),
                ..Default::default()
            }),
            SectionContent::Hero(HeroContent {
                title: Some("Hi".to_string()),
                ..Default::default()
            }),
            SectionContent::Contact(contact),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn contact_without_channel_fails_naming_contact() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("portfolio").unwrap();

        let report = validate_content(&portfolio_content(ContactContent::default()), template);

        assert!(!report.ok());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].section, SectionKind::Contact);
        assert!(report.failures[0].message.contains("contact method"));
    }

    #[test]
    fn contact_with_email_or_phone_passes() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("portfolio").unwrap();

        for contact in [
            ContactContent { email: Some("jane@x.com".to_string()), ..Default::default() },
            ContactContent { phone: Some("+15551234".to_string()), ..Default::default() },
        ] {
            let report = validate_content(&portfolio_content(contact), template);
            assert!(report.ok(), "unexpected failures: {:?}", report.failures);
        }
    }

    #[test]
    fn empty_content_reports_each_required_section() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("portfolio").unwrap();

        let report = validate_content(&ContentMap::new(), template);
        let sections: Vec<SectionKind> = report.failures.iter().map(|f| f.section).collect();

        assert_eq!(
            sections,
            vec![SectionKind::Header, SectionKind::Hero, SectionKind::Contact]
        );
    }

    #[test]
    fn whitespace_title_does_not_satisfy_header() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("portfolio").unwrap();

        let mut content = portfolio_content(ContactContent {
            email: Some("a@b.co".to_string()),
            ..Default::default()
        });
        content.insert(SectionContent::Header(HeaderContent {
            title: Some("   ".to_string()),
            ..Default::default()
        }));

        let report = validate_content(&content, template);
        assert_eq!(report.failures[0].section, SectionKind::Header);
    }

    #[test]
    fn field_checks() {
        assert!(field::email("jane@x.com").is_valid);
        assert!(!field::email("jane@@x.com").is_valid);
        assert!(!field::email("jane@x").is_valid);

        assert!(field::url("https://example.com").is_valid);
        assert!(!field::url("example.com").is_valid);

        assert!(field::phone("+1 (555) 123-4567").is_valid);
        assert!(!field::phone("not a phone").is_valid);

        assert!(field::text(&"x".repeat(200)).is_valid);
        assert!(!field::text(&"x".repeat(201)).is_valid);
    }
}
