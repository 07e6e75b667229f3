//! Section kinds: the closed set of renderable page units.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One renderable unit of a page.
///
/// The set is closed: templates and stored components may only reference
/// these kinds. Persistence interop uses the kebab-case string form, so a
/// stored component whose `type` string no longer parses surfaces as an
/// unknown-kind placeholder at render time rather than a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Header,
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Features,
    Testimonials,
    Cta,
    Footer,
    Services,
    Team,
    FeaturedPosts,
    RecentPosts,
    Sidebar,
    Gallery,
    Experience,
    Education,
}

impl SectionKind {
    /// All kinds, in declaration order.
    pub const ALL: [SectionKind; 18] = [
        SectionKind::Header,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Contact,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::Cta,
        SectionKind::Footer,
        SectionKind::Services,
        SectionKind::Team,
        SectionKind::FeaturedPosts,
        SectionKind::RecentPosts,
        SectionKind::Sidebar,
        SectionKind::Gallery,
        SectionKind::Experience,
        SectionKind::Education,
    ];

    /// The kebab-case identifier used in template layouts and stored data.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Contact => "contact",
            SectionKind::Features => "features",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
            SectionKind::Services => "services",
            SectionKind::Team => "team",
            SectionKind::FeaturedPosts => "featured-posts",
            SectionKind::RecentPosts => "recent-posts",
            SectionKind::Sidebar => "sidebar",
            SectionKind::Gallery => "gallery",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
        }
    }

    /// Parse a kind from its kebab-case identifier.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<SectionKind> {
        SectionKind::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SectionKind::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown section kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_identifiers() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(SectionKind::parse("carousel"), None);
        assert_eq!(SectionKind::parse(""), None);
        // Identifiers are case-sensitive kebab-case
        assert_eq!(SectionKind::parse("Header"), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&SectionKind::FeaturedPosts).unwrap();
        assert_eq!(json, "\"featured-posts\"");

        let kind: SectionKind = serde_json::from_str("\"recent-posts\"").unwrap();
        assert_eq!(kind, SectionKind::RecentPosts);
    }
}
