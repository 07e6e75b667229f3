//! Per-section content records.
//!
//! Every field is optional: the renderer resolves missing values to
//! documented fallbacks, so a content record can never fail a render.
//! Records serialize with the camelCase field names used by the stored
//! site documents.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::section::SectionKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    /// Portrait image URL; the editor's shape overrides apply to it.
    pub profile_image: Option<String>,
    pub nav_links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub skills: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsContent {
    pub title: Option<String>,
    pub skills: Vec<SkillMeter>,
}

/// A named skill with a 0-100 proficiency level for the meter animation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillMeter {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectsContent {
    pub title: Option<String>,
    // Stored documents use either key depending on which editor wrote them.
    #[serde(alias = "projects")]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub hours: Option<String>,
    pub social_links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesContent {
    pub title: Option<String>,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesContent {
    pub title: Option<String>,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub title: Option<String>,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub links: BTreeMap<String, String>,
    pub social_links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamContent {
    pub title: Option<String>,
    pub items: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Shared by featured-posts and recent-posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostsContent {
    pub title: Option<String>,
    pub items: Vec<Post>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarContent {
    pub about: Option<SidebarAbout>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarAbout {
    pub title: Option<String>,
    pub content: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    pub title: Option<String>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceContent {
    pub title: Option<String>,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    pub role: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationContent {
    pub title: Option<String>,
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
}

/// Content for one section, tagged by kind.
///
/// Serializes as the bare inner record (the kind is carried by the
/// containing map key or the placed component's `type`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Header(HeaderContent),
    Hero(HeroContent),
    About(AboutContent),
    Skills(SkillsContent),
    Projects(ProjectsContent),
    Contact(ContactContent),
    Features(FeaturesContent),
    Testimonials(TestimonialsContent),
    Cta(CtaContent),
    Footer(FooterContent),
    Services(ServicesContent),
    Team(TeamContent),
    FeaturedPosts(PostsContent),
    RecentPosts(PostsContent),
    Sidebar(SidebarContent),
    Gallery(GalleryContent),
    Experience(ExperienceContent),
    Education(EducationContent),
}

impl SectionContent {
    /// The kind this record belongs to.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Header(_) => SectionKind::Header,
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::About(_) => SectionKind::About,
            SectionContent::Skills(_) => SectionKind::Skills,
            SectionContent::Projects(_) => SectionKind::Projects,
            SectionContent::Contact(_) => SectionKind::Contact,
            SectionContent::Features(_) => SectionKind::Features,
            SectionContent::Testimonials(_) => SectionKind::Testimonials,
            SectionContent::Cta(_) => SectionKind::Cta,
            SectionContent::Footer(_) => SectionKind::Footer,
            SectionContent::Services(_) => SectionKind::Services,
            SectionContent::Team(_) => SectionKind::Team,
            SectionContent::FeaturedPosts(_) => SectionKind::FeaturedPosts,
            SectionContent::RecentPosts(_) => SectionKind::RecentPosts,
            SectionContent::Sidebar(_) => SectionKind::Sidebar,
            SectionContent::Gallery(_) => SectionKind::Gallery,
            SectionContent::Experience(_) => SectionKind::Experience,
            SectionContent::Education(_) => SectionKind::Education,
        }
    }

    /// The empty record for a kind. Renders as all-fallback output.
    pub fn default_for(kind: SectionKind) -> SectionContent {
        Self::from_value(kind, &Value::Null)
    }

    /// Decode a record for `kind` from raw JSON.
    ///
    /// Total: missing fields take defaults, unknown fields are ignored, and
    /// a value that does not decode at all yields the kind's empty record.
    pub fn from_value(kind: SectionKind, value: &Value) -> SectionContent {
        fn decode<T: Default + for<'de> Deserialize<'de>>(value: &Value) -> T {
            serde_json::from_value(value.clone()).unwrap_or_default()
        }

        match kind {
            SectionKind::Header => SectionContent::Header(decode(value)),
            SectionKind::Hero => SectionContent::Hero(decode(value)),
            SectionKind::About => SectionContent::About(decode(value)),
            SectionKind::Skills => SectionContent::Skills(decode(value)),
            SectionKind::Projects => SectionContent::Projects(decode(value)),
            SectionKind::Contact => SectionContent::Contact(decode(value)),
            SectionKind::Features => SectionContent::Features(decode(value)),
            SectionKind::Testimonials => SectionContent::Testimonials(decode(value)),
            SectionKind::Cta => SectionContent::Cta(decode(value)),
            SectionKind::Footer => SectionContent::Footer(decode(value)),
            SectionKind::Services => SectionContent::Services(decode(value)),
            SectionKind::Team => SectionContent::Team(decode(value)),
            SectionKind::FeaturedPosts => SectionContent::FeaturedPosts(decode(value)),
            SectionKind::RecentPosts => SectionContent::RecentPosts(decode(value)),
            SectionKind::Sidebar => SectionContent::Sidebar(decode(value)),
            SectionKind::Gallery => SectionContent::Gallery(decode(value)),
            SectionKind::Experience => SectionContent::Experience(decode(value)),
            SectionKind::Education => SectionContent::Education(decode(value)),
        }
    }
}

/// Per-section content keyed by kind.
///
/// Entries for kinds absent from the active template layout are dead data,
/// not an error. Iteration order is the kind declaration order, which keeps
/// serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentMap(pub BTreeMap<SectionKind, SectionContent>);

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: SectionKind) -> Option<&SectionContent> {
        self.0.get(&kind)
    }

    pub fn insert(&mut self, content: SectionContent) -> Option<SectionContent> {
        self.0.insert(content.kind(), content)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SectionContent> for ContentMap {
    fn from_iter<I: IntoIterator<Item = SectionContent>>(iter: I) -> Self {
        let mut map = ContentMap::new();
        for content in iter {
            map.insert(content);
        }
        map
    }
}

impl<'de> Deserialize<'de> for ContentMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut map = ContentMap::new();
        for (key, value) in raw {
            // Stored documents written by the legacy editors key the posts
            // sections by camelCase rather than the layout identifier.
            let kind = match key.as_str() {
                "featuredPosts" => Some(SectionKind::FeaturedPosts),
                "recentPosts" => Some(SectionKind::RecentPosts),
                other => SectionKind::parse(other),
            };
            // Unrecognized keys are dead data and dropped silently.
            if let Some(kind) = kind {
                map.insert(SectionContent::from_value(kind, &value));
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_partial_header() {
        let content = SectionContent::from_value(
            SectionKind::Header,
            &json!({ "title": "Jane Doe", "navLinks": ["Home", "About"] }),
        );

        let SectionContent::Header(header) = content else {
            panic!("expected header content");
        };
        assert_eq!(header.title.as_deref(), Some("Jane Doe"));
        assert_eq!(header.nav_links, vec!["Home", "About"]);
        assert_eq!(header.logo, None);
    }

    #[test]
    fn malformed_value_falls_back_to_empty_record() {
        let content = SectionContent::from_value(SectionKind::Hero, &json!("not an object"));
        assert_eq!(content, SectionContent::Hero(HeroContent::default()));
    }

    #[test]
    fn projects_accepts_legacy_projects_key() {
        let content = SectionContent::from_value(
            SectionKind::Projects,
            &json!({ "projects": [{ "title": "App" }] }),
        );

        let SectionContent::Projects(projects) = content else {
            panic!("expected projects content");
        };
        assert_eq!(projects.items.len(), 1);
        assert_eq!(projects.items[0].title.as_deref(), Some("App"));
    }

    #[test]
    fn content_map_ignores_unknown_sections() {
        let map: ContentMap = serde_json::from_value(json!({
            "header": { "title": "Hi" },
            "carousel": { "title": "dead data" },
            "featuredPosts": { "title": "Posts" },
        }))
        .unwrap();

        assert!(map.get(SectionKind::Header).is_some());
        assert!(map.get(SectionKind::FeaturedPosts).is_some());
        assert_eq!(map.0.len(), 2);
    }
}
