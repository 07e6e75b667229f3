//! Template catalog: the fixed set of site structures with seed content.
//!
//! Templates are read-only reference data loaded at process start and never
//! mutated at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::{
    AboutContent, Category, ContactContent, ContentMap, CtaContent, FeatureItem, FeaturesContent,
    FooterContent, HeaderContent, HeroContent, Post, PostsContent, Project, ProjectsContent,
    SectionContent, ServicesContent, SidebarAbout, SidebarContent, Stat, TeamContent, TeamMember,
    Testimonial, TestimonialsContent,
};
use crate::section::SectionKind;

/// An immutable site structure definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ordered section kinds making up the page.
    pub layout: Vec<SectionKind>,
    /// Seed content used when the live content map has no entry for a kind.
    pub default_content: ContentMap,
}

/// Read-only catalog of the built-in templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
}

impl TemplateCatalog {
    /// Catalog with the four built-in templates.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        for template in [portfolio(), landing(), business(), blog()] {
            templates.insert(template.id.clone(), template);
        }
        Self { templates }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// All templates, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }
}

fn s(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

fn links(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn portfolio() -> Template {
    let content = [
        SectionContent::Header(HeaderContent {
            title: s("John Doe"),
            subtitle: s("Web Developer & Designer"),
            nav_links: list(&["Home", "About", "Projects", "Contact"]),
            ..Default::default()
        }),
        SectionContent::Hero(HeroContent {
            title: s("Hi, I'm John Doe"),
            subtitle: s("I create beautiful and functional websites"),
            cta_text: s("View My Work"),
            cta_link: s("#projects"),
            ..Default::default()
        }),
        SectionContent::About(AboutContent {
            title: s("About Me"),
            content: s(
                "I'm a passionate web developer with 5+ years of experience creating modern, \
                 responsive websites. I specialize in React, Node.js, and modern web technologies.",
            ),
            skills: list(&["React", "Node.js", "TypeScript", "Tailwind CSS", "MongoDB"]),
            ..Default::default()
        }),
        SectionContent::Projects(ProjectsContent {
            title: s("My Projects"),
            items: vec![
                project(
                    "E-commerce Platform",
                    "A full-stack e-commerce solution built with React and Node.js",
                ),
                project(
                    "Portfolio Website",
                    "A responsive portfolio website built with modern technologies",
                ),
                project(
                    "Task Management App",
                    "A collaborative task management application",
                ),
            ],
        }),
        SectionContent::Contact(ContactContent {
            title: s("Get In Touch"),
            email: s("john@example.com"),
            phone: s("+1 (555) 123-4567"),
            social_links: links(&[
                ("github", "https://github.com/johndoe"),
                ("linkedin", "https://linkedin.com/in/johndoe"),
                ("twitter", "https://twitter.com/johndoe"),
            ]),
            ..Default::default()
        }),
    ];

    Template {
        id: "portfolio".to_string(),
        name: "Portfolio".to_string(),
        description: "Showcase your work and skills with a professional portfolio template"
            .to_string(),
        layout: vec![
            SectionKind::Header,
            SectionKind::Hero,
            SectionKind::About,
            SectionKind::Projects,
            SectionKind::Contact,
        ],
        default_content: content.into_iter().collect(),
    }
}

fn project(title: &str, description: &str) -> Project {
    Project {
        title: s(title),
        description: s(description),
        image: s("https://via.placeholder.com/300x200"),
        link: s("#"),
        technologies: Vec::new(),
    }
}

fn landing() -> Template {
    let content = [
        SectionContent::Header(HeaderContent {
            logo: s("Your Brand"),
            nav_links: list(&["Home", "Features", "Pricing", "Contact"]),
            ..Default::default()
        }),
        SectionContent::Hero(HeroContent {
            title: s("Transform Your Business"),
            subtitle: s("The ultimate solution for modern businesses looking to scale and grow"),
            cta_text: s("Get Started"),
            cta_link: s("#pricing"),
            secondary_cta_text: s("Learn More"),
            secondary_cta_link: s("#features"),
        }),
        SectionContent::Features(FeaturesContent {
            title: s("Why Choose Us"),
            items: vec![
                feature(
                    "Easy to Use",
                    "Intuitive interface that anyone can master in minutes",
                    "rocket.svg",
                ),
                feature(
                    "Fast Performance",
                    "Lightning-fast loading times and smooth interactions",
                    "lightning.svg",
                ),
                feature(
                    "24/7 Support",
                    "Round-the-clock customer support when you need it",
                    "shield.svg",
                ),
            ],
        }),
        SectionContent::Testimonials(TestimonialsContent {
            title: s("What Our Customers Say"),
            items: vec![
                Testimonial {
                    name: s("Sarah Johnson"),
                    role: s("CEO, TechStart"),
                    content: s("This platform transformed our business. Highly recommended!"),
                    avatar: s("https://via.placeholder.com/60x60"),
                },
                Testimonial {
                    name: s("Mike Chen"),
                    role: s("Founder, DesignCo"),
                    content: s("The best solution we've found for our needs."),
                    avatar: s("https://via.placeholder.com/60x60"),
                },
            ],
        }),
        SectionContent::Cta(CtaContent {
            title: s("Ready to Get Started?"),
            subtitle: s("Join thousands of satisfied customers today"),
            cta_text: s("Start Free Trial"),
            cta_link: s("#pricing"),
        }),
        SectionContent::Footer(FooterContent {
            company: s("Your Company"),
            description: s("Making the world a better place through innovative solutions."),
            links: links(&[
                ("About Us", "#"),
                ("Privacy Policy", "#"),
                ("Terms of Service", "#"),
                ("Contact", "#"),
            ]),
            ..Default::default()
        }),
    ];

    Template {
        id: "landing".to_string(),
        name: "Landing Page".to_string(),
        description: "Convert visitors into customers with a compelling landing page".to_string(),
        layout: vec![
            SectionKind::Header,
            SectionKind::Hero,
            SectionKind::Features,
            SectionKind::Testimonials,
            SectionKind::Cta,
            SectionKind::Footer,
        ],
        default_content: content.into_iter().collect(),
    }
}

fn feature(title: &str, description: &str, icon: &str) -> FeatureItem {
    FeatureItem {
        title: s(title),
        description: s(description),
        icon: s(icon),
    }
}

fn business() -> Template {
    let content = [
        SectionContent::Header(HeaderContent {
            logo: s("Business Name"),
            nav_links: list(&["Home", "About", "Services", "Team", "Contact"]),
            ..Default::default()
        }),
        SectionContent::Hero(HeroContent {
            title: s("Welcome to Business Name"),
            subtitle: s("Your trusted partner for professional services and solutions"),
            cta_text: s("Our Services"),
            cta_link: s("#services"),
            ..Default::default()
        }),
        SectionContent::About(AboutContent {
            title: s("About Our Company"),
            content: s(
                "We are a leading provider of professional services, dedicated to helping \
                 businesses grow and succeed. With years of experience and a passionate team, \
                 we deliver exceptional results for our clients.",
            ),
            stats: vec![
                Stat { number: "500+".to_string(), label: "Happy Clients".to_string() },
                Stat { number: "50+".to_string(), label: "Team Members".to_string() },
                Stat { number: "10+".to_string(), label: "Years Experience".to_string() },
            ],
            ..Default::default()
        }),
        SectionContent::Services(ServicesContent {
            title: s("Our Services"),
            items: vec![
                feature(
                    "Web Development",
                    "Custom websites and web applications built with modern technologies",
                    "laptop.svg",
                ),
                feature(
                    "Digital Marketing",
                    "Comprehensive digital marketing strategies to grow your business",
                    "chart.svg",
                ),
                feature(
                    "Consulting",
                    "Expert business consulting to help you make informed decisions",
                    "target.svg",
                ),
            ],
        }),
        SectionContent::Team(TeamContent {
            title: s("Our Team"),
            items: vec![
                member("Jane Smith", "CEO & Founder", "10+ years of experience in business development"),
                member("David Wilson", "CTO", "Expert in technology and innovation"),
                member("Lisa Brown", "Marketing Director", "Specialist in digital marketing strategies"),
            ],
        }),
        SectionContent::Contact(ContactContent {
            title: s("Contact Us"),
            address: s("123 Business St, City, State 12345"),
            phone: s("+1 (555) 123-4567"),
            email: s("info@businessname.com"),
            hours: s("Monday - Friday: 9:00 AM - 6:00 PM"),
            ..Default::default()
        }),
    ];

    Template {
        id: "business".to_string(),
        name: "Business Website".to_string(),
        description: "Professional business website with services and company information"
            .to_string(),
        layout: vec![
            SectionKind::Header,
            SectionKind::Hero,
            SectionKind::About,
            SectionKind::Services,
            SectionKind::Team,
            SectionKind::Contact,
        ],
        default_content: content.into_iter().collect(),
    }
}

fn member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: s(name),
        role: s(role),
        bio: s(bio),
        avatar: s("https://via.placeholder.com/150x150"),
    }
}

fn blog() -> Template {
    let content = [
        SectionContent::Header(HeaderContent {
            title: s("My Blog"),
            subtitle: s("Thoughts, ideas, and insights"),
            nav_links: list(&["Home", "Blog", "About", "Contact"]),
            ..Default::default()
        }),
        SectionContent::Hero(HeroContent {
            title: s("Welcome to My Blog"),
            subtitle: s("Sharing thoughts on technology, design, and life"),
            cta_text: s("Read Latest Posts"),
            cta_link: s("#posts"),
            ..Default::default()
        }),
        SectionContent::FeaturedPosts(PostsContent {
            title: s("Featured Posts"),
            items: vec![
                Post {
                    title: s("Getting Started with React"),
                    excerpt: s(
                        "Learn the basics of React and start building modern web applications...",
                    ),
                    author: s("John Doe"),
                    date: s("2024-01-15"),
                    image: s("https://via.placeholder.com/400x250"),
                    category: s("Technology"),
                },
                Post {
                    title: s("Design Principles for Web"),
                    excerpt: s(
                        "Essential design principles that every web developer should know...",
                    ),
                    author: s("Jane Smith"),
                    date: s("2024-01-10"),
                    image: s("https://via.placeholder.com/400x250"),
                    category: s("Design"),
                },
            ],
        }),
        SectionContent::RecentPosts(PostsContent {
            title: s("Recent Posts"),
            items: vec![
                Post {
                    title: s("The Future of Web Development"),
                    excerpt: s("Exploring upcoming trends and technologies..."),
                    author: s("John Doe"),
                    date: s("2024-01-05"),
                    category: s("Technology"),
                    ..Default::default()
                },
                Post {
                    title: s("Building Responsive Websites"),
                    excerpt: s("Best practices for creating mobile-friendly websites..."),
                    author: s("Jane Smith"),
                    date: s("2024-01-01"),
                    category: s("Development"),
                    ..Default::default()
                },
            ],
        }),
        SectionContent::Sidebar(SidebarContent {
            about: Some(SidebarAbout {
                title: s("About the Author"),
                content: s(
                    "I'm a passionate developer and writer, sharing insights about web \
                     development and design.",
                ),
                avatar: s("https://via.placeholder.com/100x100"),
            }),
            categories: vec![
                Category { name: "Technology".to_string(), count: 15 },
                Category { name: "Design".to_string(), count: 8 },
                Category { name: "Development".to_string(), count: 12 },
                Category { name: "Tutorials".to_string(), count: 20 },
            ],
        }),
        SectionContent::Footer(FooterContent {
            title: s("My Blog"),
            description: s("Sharing knowledge and insights about web development and design."),
            social_links: links(&[
                ("twitter", "https://twitter.com/johndoe"),
                ("github", "https://github.com/johndoe"),
                ("linkedin", "https://linkedin.com/in/johndoe"),
            ]),
            ..Default::default()
        }),
    ];

    Template {
        id: "blog".to_string(),
        name: "Blog".to_string(),
        description: "Share your thoughts and ideas with a beautiful blog template".to_string(),
        layout: vec![
            SectionKind::Header,
            SectionKind::Hero,
            SectionKind::FeaturedPosts,
            SectionKind::RecentPosts,
            SectionKind::Sidebar,
            SectionKind::Footer,
        ],
        default_content: content.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_has_four_templates() {
        let catalog = TemplateCatalog::builtin();
        let ids: Vec<&str> = catalog.all().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["blog", "business", "landing", "portfolio"]);
    }

    #[test]
    fn every_layout_kind_has_default_content() {
        let catalog = TemplateCatalog::builtin();

        for template in catalog.all() {
            for kind in &template.layout {
                assert!(
                    template.default_content.get(*kind).is_some(),
                    "{} is missing default content for {kind}",
                    template.id
                );
            }
        }
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(TemplateCatalog::builtin().get("brochure").is_none());
    }

    #[test]
    fn default_content_kinds_match_map_keys() {
        let catalog = TemplateCatalog::builtin();
        for template in catalog.all() {
            for (kind, content) in &template.default_content.0 {
                assert_eq!(*kind, content.kind());
            }
        }
    }
}
