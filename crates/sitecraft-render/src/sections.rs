//! Built-in fragment renderers, one per section kind.
//!
//! Markup and class names follow the generated-site stylesheet (see the
//! style composer). Each renderer is total: missing fields resolve to the
//! fallback noted on the renderer, list fields render zero elements when
//! empty, and every interpolation is escaped for its output context.

use std::collections::BTreeMap;

use sitecraft_model::content::*;
use sitecraft_model::slugify;

use crate::escape;
use crate::registry::RenderCtx;

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}

/// Coerce the context's content to the expected record; a mismatched shape
/// is a content defect and renders as the kind's defaults.
macro_rules! expect_content {
    ($ctx:expr, $variant:ident, $ty:ty) => {{
        static EMPTY: std::sync::OnceLock<$ty> = std::sync::OnceLock::new();
        match $ctx.content {
            SectionContent::$variant(inner) => inner,
            _ => EMPTY.get_or_init(<$ty>::default),
        }
    }};
}

/// Fallback: "Your Name" for the identity, `#<link>` anchors per nav entry.
pub fn header(ctx: &RenderCtx<'_>) -> String {
    let h = expect_content!(ctx, Header, HeaderContent);

    let identity = h.title.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
        h.logo.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or("Your Name")
    });

    let nav_links: String = h
        .nav_links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"#{}\" aria-label=\"Navigate to {} section\">{}</a></li>",
                escape::attr(&slugify(link)),
                escape::attr(link),
                escape::text(link)
            )
        })
        .collect();

    let subtitle = match or(&h.subtitle, "") {
        "" => String::new(),
        subtitle => format!("\n      <p class=\"tagline\">{}</p>", escape::text(subtitle)),
    };

    let portrait = match or(&h.profile_image, "") {
        "" => String::new(),
        src => format!(
            "\n      <img class=\"profile-image\" src=\"{src}\" alt=\"Profile photo of {alt}\"{image_style} />",
            src = escape::url(src),
            alt = escape::attr(identity),
            image_style = ctx.image_style_attr,
        ),
    };

    format!(
        "<header class=\"header\" id=\"header\" role=\"banner\"{style}>\n  <div class=\"container\">\n    <nav class=\"nav\" role=\"navigation\" aria-label=\"Main navigation\">\n      <div class=\"logo\"><h2>{identity}</h2></div>\n      <ul class=\"nav-links\">{nav_links}</ul>\n    </nav>{portrait}{subtitle}\n  </div>\n</header>\n",
        style = ctx.style_attr,
        identity = escape::text(identity),
    )
}

/// Fallbacks: "Welcome" / "Your amazing website"; CTA buttons only render
/// when their label is set.
pub fn hero(ctx: &RenderCtx<'_>) -> String {
    let h = expect_content!(ctx, Hero, HeroContent);

    let mut ctas = String::new();
    for (text, link, class) in [
        (&h.cta_text, &h.cta_link, "btn btn-primary"),
        (&h.secondary_cta_text, &h.secondary_cta_link, "btn btn-secondary"),
    ] {
        if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
            ctas.push_str(&format!(
                "\n      <a href=\"{}\" class=\"{class}\" aria-label=\"{}\">{}</a>",
                escape::url(or(link, "#")),
                escape::attr(text),
                escape::text(text)
            ));
        }
    }

    format!(
        "<section class=\"hero\" id=\"hero\" aria-labelledby=\"hero-title\"{style}>\n  <div class=\"container\">\n    <div class=\"hero-content\">\n      <h1 id=\"hero-title\">{title}</h1>\n      <p>{subtitle}</p>{ctas}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&h.title, "Welcome")),
        subtitle = escape::text(or(&h.subtitle, "Your amazing website")),
    )
}

/// Fallback title "About"; skill chips and stat tiles render only when
/// present.
pub fn about(ctx: &RenderCtx<'_>) -> String {
    let a = expect_content!(ctx, About, AboutContent);

    let mut extras = String::new();
    if !a.skills.is_empty() {
        let chips: String = a
            .skills
            .iter()
            .map(|skill| format!("<span class=\"skill-chip\" role=\"listitem\">{}</span>", escape::text(skill)))
            .collect();
        extras.push_str(&format!(
            "\n      <div class=\"skills\">\n        <h3>Skills</h3>\n        <div class=\"skill-chips\" role=\"list\" aria-label=\"Skills list\">{chips}</div>\n      </div>"
        ));
    }
    if !a.stats.is_empty() {
        let tiles: String = a
            .stats
            .iter()
            .map(|stat| {
                format!(
                    "\n        <div class=\"stat-item\" role=\"listitem\"><div class=\"stat-number\">{}</div><div>{}</div></div>",
                    escape::text(&stat.number),
                    escape::text(&stat.label)
                )
            })
            .collect();
        extras.push_str(&format!(
            "\n      <div class=\"stats-grid\" role=\"list\" aria-label=\"Statistics\">{tiles}\n      </div>"
        ));
    }

    format!(
        "<section class=\"section about\" id=\"about\" aria-labelledby=\"about-title\"{style}>\n  <div class=\"container\">\n    <div class=\"text-center\">\n      <h2 id=\"about-title\">{title}</h2>\n      <p>{content}</p>{extras}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&a.title, "About")),
        content = escape::text(or(&a.content, "")),
    )
}

/// Fallback title "Skills & Expertise". Meters start at zero width; the
/// behavior script animates them to `data-level` on intersection.
pub fn skills(ctx: &RenderCtx<'_>) -> String {
    let s = expect_content!(ctx, Skills, SkillsContent);

    let meters: String = s
        .skills
        .iter()
        .map(|skill| {
            format!(
                "\n      <div class=\"skill-item\">\n        <div class=\"skill-name\">{}</div>\n        <div class=\"skill-level\"><div class=\"skill-progress\" data-level=\"{}\" style=\"width: 0%\"></div></div>\n      </div>",
                escape::text(&skill.name),
                skill.level.min(100)
            )
        })
        .collect();

    format!(
        "<section class=\"section skills-component\" id=\"skills\" aria-labelledby=\"skills-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"skills-title\" class=\"text-center\">{title}</h2>\n    <div class=\"skills-grid\">{meters}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&s.title, "Skills & Expertise")),
    )
}

/// Fallback title "Projects". Cards carry image, description, tech tags and
/// a view link when set.
pub fn projects(ctx: &RenderCtx<'_>) -> String {
    let p = expect_content!(ctx, Projects, ProjectsContent);

    let cards: String = p
        .items
        .iter()
        .map(|project| {
            let title = or(&project.title, "Untitled Project");
            let image = match &project.image {
                Some(src) if !src.trim().is_empty() => format!(
                    "\n        <img src=\"{}\" alt=\"{}\" class=\"project-image\">",
                    escape::url(src),
                    escape::attr(title)
                ),
                _ => String::new(),
            };
            let tags: String = project
                .technologies
                .iter()
                .map(|tech| format!("<span class=\"tech-tag\">{}</span>", escape::text(tech)))
                .collect();
            let tech = if tags.is_empty() {
                String::new()
            } else {
                format!("\n          <div class=\"project-tech\">{tags}</div>")
            };

            format!(
                "\n      <article class=\"project-card\" role=\"listitem\">{image}\n        <div class=\"project-content\">\n          <h3>{title_text}</h3>\n          <p>{description}</p>{tech}\n          <a href=\"{link}\" class=\"btn btn-primary\" aria-label=\"View {title_attr} project\">View Project</a>\n        </div>\n      </article>",
                title_text = escape::text(title),
                title_attr = escape::attr(title),
                description = escape::text(or(&project.description, "")),
                link = escape::url(or(&project.link, "#")),
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"projects\" aria-labelledby=\"projects-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"projects-title\" class=\"text-center\">{title}</h2>\n    <div class=\"projects-grid\" role=\"list\" aria-label=\"Projects list\">{cards}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&p.title, "Projects")),
    )
}

/// Fallback title "Contact". Each channel renders only when present; email
/// and phone become `mailto:`/`tel:` links.
pub fn contact(ctx: &RenderCtx<'_>) -> String {
    let c = expect_content!(ctx, Contact, ContactContent);

    let mut items = String::new();
    if let Some(email) = c.email.as_deref().filter(|v| !v.trim().is_empty()) {
        items.push_str(&format!(
            "\n      <p class=\"contact-item\"><strong>Email:</strong> <a href=\"mailto:{}\" aria-label=\"Send email to {}\">{}</a></p>",
            escape::url(email),
            escape::attr(email),
            escape::text(email)
        ));
    }
    if let Some(phone) = c.phone.as_deref().filter(|v| !v.trim().is_empty()) {
        items.push_str(&format!(
            "\n      <p class=\"contact-item\"><strong>Phone:</strong> <a href=\"tel:{}\" aria-label=\"Call {}\">{}</a></p>",
            escape::url(phone),
            escape::attr(phone),
            escape::text(phone)
        ));
    }
    for (label, value) in [
        ("Address", &c.address),
        ("Location", &c.location),
        ("Hours", &c.hours),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            items.push_str(&format!(
                "\n      <p class=\"contact-item\"><strong>{label}:</strong> {}</p>",
                escape::text(value)
            ));
        }
    }
    items.push_str(&social_links_block(&c.social_links, "Follow Me"));

    format!(
        "<section class=\"section\" id=\"contact\" aria-labelledby=\"contact-title\"{style}>\n  <div class=\"container\">\n    <div class=\"text-center contact-info\">\n      <h2 id=\"contact-title\">{title}</h2>{items}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&c.title, "Contact")),
    )
}

fn social_links_block(links: &BTreeMap<String, String>, heading: &str) -> String {
    if links.is_empty() {
        return String::new();
    }

    let anchors: String = links
        .iter()
        .map(|(platform, url)| {
            format!(
                "<a href=\"{}\" class=\"social-link\" aria-label=\"Visit {} profile\">{}</a>",
                escape::url(url),
                escape::attr(platform),
                escape::text(platform)
            )
        })
        .collect();

    format!(
        "\n      <div class=\"social-links\">\n        <h3>{}</h3>\n        <div role=\"list\" aria-label=\"Social media links\">{anchors}</div>\n      </div>",
        escape::text(heading)
    )
}

fn icon_grid(title: &str, id: &str, grid_class: &str, card_class: &str, items: &[FeatureItem], style_attr: &str) -> String {
    let cards: String = items
        .iter()
        .map(|item| {
            let icon = match &item.icon {
                Some(icon) if !icon.trim().is_empty() => format!(
                    "\n        <div class=\"card-icon\" aria-hidden=\"true\"><img src=\"assets/icons/{}\" alt=\"\" width=\"32\" height=\"32\" loading=\"lazy\"></div>",
                    escape::url(icon)
                ),
                _ => String::new(),
            };
            format!(
                "\n      <div class=\"{card_class}\" role=\"listitem\">{icon}\n        <h3>{}</h3>\n        <p>{}</p>\n      </div>",
                escape::text(or(&item.title, "")),
                escape::text(or(&item.description, "")),
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"{id}\" aria-labelledby=\"{id}-title\"{style_attr}>\n  <div class=\"container\">\n    <h2 id=\"{id}-title\" class=\"text-center\">{}</h2>\n    <div class=\"{grid_class}\" role=\"list\">{cards}\n    </div>\n  </div>\n</section>\n",
        escape::text(title),
    )
}

/// Fallback title "Features".
pub fn features(ctx: &RenderCtx<'_>) -> String {
    let f = expect_content!(ctx, Features, FeaturesContent);
    icon_grid(
        or(&f.title, "Features"),
        "features",
        "features-grid",
        "feature-card",
        &f.items,
        ctx.style_attr,
    )
}

/// Fallback title "Services".
pub fn services(ctx: &RenderCtx<'_>) -> String {
    let s = expect_content!(ctx, Services, ServicesContent);
    icon_grid(
        or(&s.title, "Services"),
        "services",
        "services-grid",
        "service-card",
        &s.items,
        ctx.style_attr,
    )
}

/// Fallback title "Testimonials".
pub fn testimonials(ctx: &RenderCtx<'_>) -> String {
    let t = expect_content!(ctx, Testimonials, TestimonialsContent);

    let quotes: String = t
        .items
        .iter()
        .map(|item| {
            let name = or(&item.name, "");
            let avatar = match &item.avatar {
                Some(src) if !src.trim().is_empty() => format!(
                    "\n        <img src=\"{}\" alt=\"{}\" class=\"testimonial-avatar\">",
                    escape::url(src),
                    escape::attr(name)
                ),
                _ => String::new(),
            };
            format!(
                "\n      <blockquote class=\"testimonial-card\" role=\"listitem\">{avatar}\n        <p>\u{201c}{}\u{201d}</p>\n        <footer><cite><strong>{}</strong></cite><div class=\"testimonial-role\">{}</div></footer>\n      </blockquote>",
                escape::text(or(&item.content, "")),
                escape::text(name),
                escape::text(or(&item.role, "")),
            )
        })
        .collect();

    format!(
        "<section class=\"section testimonials\" id=\"testimonials\" aria-labelledby=\"testimonials-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"testimonials-title\" class=\"text-center\">{title}</h2>\n    <div class=\"grid grid-cols-2\" role=\"list\" aria-label=\"Testimonials list\">{quotes}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&t.title, "Testimonials")),
    )
}

/// Fallbacks: "Get Started" for both title and button label.
pub fn cta(ctx: &RenderCtx<'_>) -> String {
    let c = expect_content!(ctx, Cta, CtaContent);
    let label = or(&c.cta_text, "Get Started");

    format!(
        "<section class=\"section cta\" id=\"cta\" aria-labelledby=\"cta-title\"{style}>\n  <div class=\"container\">\n    <div class=\"text-center\">\n      <h2 id=\"cta-title\">{title}</h2>\n      <p>{subtitle}</p>\n      <a href=\"{link}\" class=\"btn btn-inverse\" aria-label=\"{label_attr}\">{label}</a>\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&c.title, "Get Started")),
        subtitle = escape::text(or(&c.subtitle, "")),
        link = escape::url(or(&c.cta_link, "#")),
        label_attr = escape::attr(label),
        label = escape::text(label),
    )
}

/// Fallback identity "My Website" (company, then title).
pub fn footer(ctx: &RenderCtx<'_>) -> String {
    let f = expect_content!(ctx, Footer, FooterContent);

    let identity = f.company.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
        f.title.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or("My Website")
    });

    let mut extras = String::new();
    if !f.links.is_empty() {
        let anchors: String = f
            .links
            .iter()
            .map(|(text, url)| {
                format!(
                    "<a href=\"{}\" class=\"footer-link\">{}</a>",
                    escape::url(url),
                    escape::text(text)
                )
            })
            .collect();
        extras.push_str(&format!(
            "\n      <nav class=\"footer-nav\" aria-label=\"Footer navigation\">{anchors}</nav>"
        ));
    }
    extras.push_str(&social_links_block(&f.social_links, "Follow"));

    format!(
        "<footer class=\"section footer\" role=\"contentinfo\"{style}>\n  <div class=\"container\">\n    <div class=\"text-center\">\n      <h3>{identity}</h3>\n      <p>{description}</p>{extras}\n    </div>\n  </div>\n</footer>\n",
        style = ctx.style_attr,
        identity = escape::text(identity),
        description = escape::text(or(&f.description, "")),
    )
}

/// Fallback title "Our Team".
pub fn team(ctx: &RenderCtx<'_>) -> String {
    let t = expect_content!(ctx, Team, TeamContent);

    let cards: String = t
        .items
        .iter()
        .map(|member| {
            let name = or(&member.name, "");
            let avatar = match &member.avatar {
                Some(src) if !src.trim().is_empty() => format!(
                    "\n        <img src=\"{}\" alt=\"{}\" class=\"team-avatar\">",
                    escape::url(src),
                    escape::attr(name)
                ),
                _ => String::new(),
            };
            format!(
                "\n      <div class=\"team-card\" role=\"listitem\">{avatar}\n        <h3>{}</h3>\n        <p class=\"team-role\">{}</p>\n        <p>{}</p>\n      </div>",
                escape::text(name),
                escape::text(or(&member.role, "")),
                escape::text(or(&member.bio, "")),
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"team\" aria-labelledby=\"team-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"team-title\" class=\"text-center\">{title}</h2>\n    <div class=\"team-grid\" role=\"list\" aria-label=\"Team members list\">{cards}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&t.title, "Our Team")),
    )
}

fn post_meta(post: &Post) -> String {
    let parts: Vec<String> = [&post.author, &post.date, &post.category]
        .iter()
        .filter_map(|field| field.as_deref())
        .filter(|v| !v.trim().is_empty())
        .map(escape::text)
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("\n          <div class=\"post-meta\">By {}</div>", parts.join(" \u{2022} "))
    }
}

/// Fallback title "Featured Posts".
pub fn featured_posts(ctx: &RenderCtx<'_>) -> String {
    let p = expect_content!(ctx, FeaturedPosts, PostsContent);

    let cards: String = p
        .items
        .iter()
        .map(|post| {
            let title = or(&post.title, "");
            let image = match &post.image {
                Some(src) if !src.trim().is_empty() => format!(
                    "\n        <img src=\"{}\" alt=\"{}\" class=\"post-image\">",
                    escape::url(src),
                    escape::attr(title)
                ),
                _ => String::new(),
            };
            format!(
                "\n      <article class=\"post-card\">{image}\n        <div class=\"post-content\">\n          <h3>{}</h3>\n          <p>{}</p>{}\n        </div>\n      </article>",
                escape::text(title),
                escape::text(or(&post.excerpt, "")),
                post_meta(post),
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"posts\" aria-labelledby=\"posts-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"posts-title\">{title}</h2>{cards}\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&p.title, "Featured Posts")),
    )
}

/// Fallback title "Recent Posts".
pub fn recent_posts(ctx: &RenderCtx<'_>) -> String {
    let p = expect_content!(ctx, RecentPosts, PostsContent);

    let rows: String = p
        .items
        .iter()
        .map(|post| {
            format!(
                "\n    <article class=\"post-row\">\n      <h3>{}</h3>\n      <p>{}</p>{}\n    </article>",
                escape::text(or(&post.title, "")),
                escape::text(or(&post.excerpt, "")),
                post_meta(post).replace("\n          ", "\n      "),
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"recent-posts\" aria-labelledby=\"recent-posts-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"recent-posts-title\">{title}</h2>{rows}\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&p.title, "Recent Posts")),
    )
}

/// Author box and category list, each rendered only when present.
pub fn sidebar(ctx: &RenderCtx<'_>) -> String {
    let s = expect_content!(ctx, Sidebar, SidebarContent);

    let mut blocks = String::new();
    if let Some(about) = &s.about {
        let avatar = match &about.avatar {
            Some(src) if !src.trim().is_empty() => format!(
                "\n    <img src=\"{}\" alt=\"Author\" class=\"sidebar-avatar\">",
                escape::url(src)
            ),
            _ => String::new(),
        };
        blocks.push_str(&format!(
            "\n  <div class=\"sidebar-about text-center\">{avatar}\n    <h3>{}</h3>\n    <p>{}</p>\n  </div>",
            escape::text(or(&about.title, "About the Author")),
            escape::text(or(&about.content, "")),
        ));
    }
    if !s.categories.is_empty() {
        let items: String = s
            .categories
            .iter()
            .map(|category| {
                format!(
                    "<li role=\"listitem\">{} ({})</li>",
                    escape::text(&category.name),
                    category.count
                )
            })
            .collect();
        blocks.push_str(&format!(
            "\n  <div class=\"sidebar-categories\">\n    <h3>Categories</h3>\n    <ul class=\"category-list\" role=\"list\" aria-label=\"Categories\">{items}</ul>\n  </div>"
        ));
    }

    format!(
        "<aside class=\"sidebar\" role=\"complementary\"{style}>{blocks}\n</aside>\n",
        style = ctx.style_attr,
    )
}

/// Fallback title "Gallery"; images render as captioned figures.
pub fn gallery(ctx: &RenderCtx<'_>) -> String {
    let g = expect_content!(ctx, Gallery, GalleryContent);

    let figures: String = g
        .images
        .iter()
        .filter_map(|image| {
            let src = image.src.as_deref().filter(|v| !v.trim().is_empty())?;
            let caption = match or(&image.caption, "") {
                "" => String::new(),
                caption => format!("\n        <figcaption>{}</figcaption>", escape::text(caption)),
            };
            Some(format!(
                "\n      <figure class=\"gallery-item\" role=\"listitem\">\n        <img src=\"{}\" alt=\"{}\" loading=\"lazy\">{caption}\n      </figure>",
                escape::url(src),
                escape::attr(or(&image.alt, "")),
            ))
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"gallery\" aria-labelledby=\"gallery-title\"{style}>\n  <div class=\"container\">\n    <h2 id=\"gallery-title\" class=\"text-center\">{title}</h2>\n    <div class=\"gallery-grid\" role=\"list\" aria-label=\"Gallery\">{figures}\n    </div>\n  </div>\n</section>\n",
        style = ctx.style_attr,
        title = escape::text(or(&g.title, "Gallery")),
    )
}

fn timeline(title: &str, id: &str, entries: Vec<(String, String, String, String)>, style_attr: &str) -> String {
    let items: String = entries
        .into_iter()
        .map(|(heading, subheading, period, description)| {
            let period = if period.is_empty() {
                String::new()
            } else {
                format!("<span class=\"timeline-period\">{period}</span>")
            };
            format!(
                "\n      <div class=\"timeline-item\" role=\"listitem\">\n        <h3>{heading}</h3>\n        <p class=\"timeline-sub\">{subheading}{period}</p>\n        <p>{description}</p>\n      </div>"
            )
        })
        .collect();

    format!(
        "<section class=\"section\" id=\"{id}\" aria-labelledby=\"{id}-title\"{style_attr}>\n  <div class=\"container\">\n    <h2 id=\"{id}-title\" class=\"text-center\">{title}</h2>\n    <div class=\"timeline\" role=\"list\">{items}\n    </div>\n  </div>\n</section>\n",
        title = escape::text(title),
    )
}

/// Fallback title "Experience"; entries render role / company / period.
pub fn experience(ctx: &RenderCtx<'_>) -> String {
    let e = expect_content!(ctx, Experience, ExperienceContent);

    let entries = e
        .items
        .iter()
        .map(|item| {
            (
                escape::text(or(&item.role, "")),
                escape::text(or(&item.company, "")),
                escape::text(or(&item.period, "")),
                escape::text(or(&item.description, "")),
            )
        })
        .collect();

    timeline(or(&e.title, "Experience"), "experience", entries, ctx.style_attr)
}

/// Fallback title "Education"; entries render degree / school / period.
pub fn education(ctx: &RenderCtx<'_>) -> String {
    let e = expect_content!(ctx, Education, EducationContent);

    let entries = e
        .items
        .iter()
        .map(|item| {
            (
                escape::text(or(&item.degree, "")),
                escape::text(or(&item.school, "")),
                escape::text(or(&item.period, "")),
                escape::text(or(&item.description, "")),
            )
        })
        .collect();

    timeline(or(&e.title, "Education"), "education", entries, ctx.style_attr)
}
