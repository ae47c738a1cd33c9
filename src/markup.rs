//! HTML components for both generated pages and runtime re-renders.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! Every fragment the interaction engine re-renders at runtime (project
//! grid, notifications, particle text) comes from the same functions the
//! generator uses for the initial static render, so the two surfaces
//! cannot drift apart. The element ids referenced here are the
//! [`crate::page::ids`] constants the managers address.

use crate::catalog::{AboutPage, Manifest, Profile, Project, Skill};
use crate::page::ids;
use crate::ui::form::FieldId;
use crate::ui::notify::Kind;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Renders the base HTML document structure.
pub fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css.to_string())) }
            }
            body id=(ids::BODY) class=[body_class] {
                (content)
            }
        }
    }
}

// ============================================================================
// Portfolio page components
// ============================================================================

/// Top navigation bar with brand, hamburger toggle, and section links.
pub fn navbar(profile: &Profile, sections: &[crate::catalog::Section]) -> Markup {
    html! {
        nav id=(ids::NAVBAR) class="navbar" {
            div class="nav-brand" { (profile.name) }
            button id=(ids::HAMBURGER) class="hamburger" aria-label="Menu" aria-expanded="false" {
                span class="hamburger-line" {}
                span class="hamburger-line" {}
                span class="hamburger-line" {}
            }
            ul id=(ids::NAV_MENU) class="nav-menu" {
                @for section in sections {
                    li {
                        a id=(ids::nav_link(&section.id)) class="nav-link"
                            href={ "#" (section.id) } data-section=(section.id) {
                            (section.label)
                        }
                    }
                }
            }
        }
    }
}

/// Hero section with the portfolio particle layer and the CV control.
pub fn hero(profile: &Profile) -> Markup {
    html! {
        section id="home" class="hero" {
            div id=(ids::PARTICLES) class="particles" aria-hidden="true" {}
            div class="hero-content" {
                h1 { (profile.name) }
                p class="hero-headline" { (profile.headline) }
                @if let Some(tagline) = &profile.tagline {
                    p class="hero-tagline" { (tagline) }
                }
                div class="hero-actions" {
                    a class="btn btn-primary" href="#projects" { "View my work" }
                    @if profile.cv_file.is_some() {
                        button id=(ids::CV_DOWNLOAD_BTN) class="btn btn-outline" {
                            i class="fas fa-download" aria-hidden="true" {}
                            " Download CV"
                        }
                    }
                }
            }
        }
    }
}

/// Convert the about page's markdown body to HTML.
pub fn about_html(about: &AboutPage) -> Markup {
    let parser = Parser::new(&about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

pub fn about_section(about: &AboutPage) -> Markup {
    html! {
        section id="about" class="about scroll-animate" {
            h2 { (about.title) }
            article class="about-content" {
                (about_html(about))
            }
        }
    }
}

/// Skills grid. Cards are stagger items; bars carry their target width in
/// `data-width`, which the reveal manager reads back when filling them.
pub fn skills_section(skills: &[Skill]) -> Markup {
    html! {
        section id="skills" class="skills scroll-animate" {
            h2 { "Skills" }
            div id=(ids::SKILLS_GRID) class="skills-grid" {
                @for (index, skill) in skills.iter().enumerate() {
                    div id=(ids::skill_card(index)) class="skill-card stagger-item" {
                        div class="skill-info" {
                            span class="skill-name" { (skill.name) }
                            span class="skill-level" { (skill.level) "%" }
                        }
                        div class="skill-bar" {
                            div id=(ids::skill_bar(index)) class="skill-progress"
                                data-width=(skill.level) {}
                        }
                    }
                }
            }
        }
    }
}

/// One project card. The reveal delay is a pure function of render order.
pub fn project_card(project: &Project, index: usize, stagger_step_ms: u64) -> Markup {
    let delay = index as u64 * stagger_step_ms;
    html! {
        div class={ "project-card project-" (project.category) }
            style=(format!("--project-index: {index}; --reveal-delay: {delay}ms")) {
            div class="project-header" {
                div class="project-icon" {
                    i class=(project.icon) aria-hidden="true" {}
                }
                @if project.has_demo {
                    div class="demo-badge" { "Live demo" }
                }
            }
            h3 { (project.title) }
            p class="project-description" { (project.description) }
            div class="project-tech" {
                @for tech in &project.technologies {
                    span class="tech-tag" { (tech) }
                }
            }
            div class="project-links" {
                @if project.has_demo {
                    a class="project-link demo-link" href=(project.links.demo)
                        target="_blank" rel="noopener"
                        aria-label={ "View the demo of " (project.title) } {
                        i class="fas fa-external-link-alt" aria-hidden="true" {}
                        " View demo"
                    }
                }
                a class="project-link github-link" href=(project.links.github)
                    target="_blank" rel="noopener"
                    aria-label={ "View the source code of " (project.title) } {
                    i class="fab fa-github" aria-hidden="true" {}
                    " Source code"
                }
            }
        }
    }
}

/// The card set for a filtered view, in catalog order. An empty slice is
/// a valid (empty) grid, not an error.
pub fn project_grid<'a, I>(projects: I, stagger_step_ms: u64) -> Markup
where
    I: IntoIterator<Item = &'a Project>,
{
    html! {
        @for (index, project) in projects.into_iter().enumerate() {
            (project_card(project, index, stagger_step_ms))
        }
    }
}

/// Filter controls. Exactly one button is active; the generator marks
/// `all`, the projects manager moves the marker afterwards.
pub fn filter_buttons(categories: &[&str], active: &str) -> Markup {
    html! {
        div class="project-filters" role="group" aria-label="Project filters" {
            (filter_button("all", "All", active == "all"))
            @for &category in categories {
                (filter_button(category, category, active == category))
            }
        }
    }
}

fn filter_button(category: &str, label: &str, active: bool) -> Markup {
    let class = if active {
        "filter-btn active"
    } else {
        "filter-btn"
    };
    html! {
        button id=(ids::filter_button(category)) class=(class)
            data-filter=(category)
            aria-pressed=(if active { "true" } else { "false" }) {
            (label)
        }
    }
}

/// Projects section: filter controls plus the grid container the engine
/// re-renders into.
pub fn projects_section(manifest: &Manifest) -> Markup {
    let categories = manifest.categories();
    html! {
        section id="projects" class="projects scroll-animate" {
            h2 { "Projects" }
            (filter_buttons(&categories, "all"))
            div id=(ids::PROJECTS_GRID) class="projects-grid" {
                (project_grid(&manifest.projects, manifest.config.timings.stagger_step_ms))
            }
        }
    }
}

// ============================================================================
// Contact form
// ============================================================================

fn form_group(field: FieldId, control: Markup) -> Markup {
    html! {
        div class="form-group" {
            label for=(field.as_str()) { (field.label()) " *" }
            (control)
            span id=(ids::field_error(field)) class="form-error" aria-live="polite" {}
        }
    }
}

/// Contact section with one error slot per field, addressed by the form
/// manager at runtime.
pub fn contact_section(profile: &Profile) -> Markup {
    html! {
        section id="contact" class="contact scroll-animate" {
            h2 { "Get in touch" }
            form id=(ids::CONTACT_FORM) class="contact-form" novalidate {
                (form_group(FieldId::Name, html! {
                    input id=(FieldId::Name.as_str()) class="form-input" type="text"
                        name="name" placeholder="Your name";
                }))
                (form_group(FieldId::Email, html! {
                    input id=(FieldId::Email.as_str()) class="form-input" type="email"
                        name="email" placeholder="you@example.com";
                }))
                (form_group(FieldId::Subject, html! {
                    select id=(FieldId::Subject.as_str()) class="form-input" name="subject" {
                        option value="" selected { "Choose a subject" }
                        @for subject in &profile.subjects {
                            option value=(subject) { (subject) }
                        }
                    }
                }))
                (form_group(FieldId::Message, html! {
                    textarea id=(FieldId::Message.as_str()) class="form-input" name="message"
                        rows="6" placeholder="What can I do for you?" {}
                }))
                div class="form-group form-consent" {
                    input id=(FieldId::Privacy.as_str()) class="form-input" type="checkbox"
                        name="privacy";
                    label for=(FieldId::Privacy.as_str()) { "I accept the privacy policy *" }
                    span id=(ids::field_error(FieldId::Privacy)) class="form-error"
                        aria-live="polite" {}
                }
                button id=(ids::SUBMIT_BTN) class="btn btn-primary" type="submit" {
                    span id=(ids::SUBMIT_LABEL) class="btn-text" { "Send message" }
                    span id=(ids::SUBMIT_SPINNER) class="btn-loading" style="display: none" {
                        "Sending…"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Notifications and accessibility affordances
// ============================================================================

/// Transient notification. One lives on the page at a time; the notifier
/// replaces any predecessor before mounting this.
pub fn notification(kind: Kind, message: &str) -> Markup {
    let icon = match kind {
        Kind::Success => "fas fa-check-circle",
        Kind::Error => "fas fa-exclamation-circle",
    };
    html! {
        div id=(ids::NOTIFICATION) class={ "notification notification-" (kind) } role="status" {
            div class="notification-content" {
                i class=(icon) aria-hidden="true" {}
                span { (message) }
                button id=(ids::NOTIFICATION_CLOSE) class="notification-close"
                    aria-label="Close notification" {
                    i class="fas fa-times" aria-hidden="true" {}
                }
            }
        }
    }
}

/// Skip link, mounted as the first body child by the accessibility manager.
pub fn skip_link(target_section: &str) -> Markup {
    html! {
        a id=(ids::SKIP_LINK) class="skip-link" href={ "#" (target_section) } {
            "Skip to main content"
        }
    }
}

// ============================================================================
// Page assemblies
// ============================================================================

/// The full portfolio page as generated to `portfolio.html`.
pub fn portfolio_document(manifest: &Manifest, css: &str) -> Markup {
    let title = format!("{} — Portfolio", manifest.profile.name);
    let content = html! {
        (navbar(&manifest.profile, &manifest.sections))
        main id="main" {
            (hero(&manifest.profile))
            @if let Some(about) = &manifest.about {
                (about_section(about))
            }
            (skills_section(&manifest.skills))
            (projects_section(manifest))
            (contact_section(&manifest.profile))
        }
        footer class="site-footer" {
            p { "© " (manifest.profile.name) }
        }
    };
    base_document(&title, css, None, content)
}

/// The entrance page as generated to `index.html`. The first message is
/// pre-typed so the static page reads sensibly before (or without) the
/// engine taking over the typing loop.
pub fn entrance_document(manifest: &Manifest, css: &str) -> Markup {
    let title = format!("{} — Welcome", manifest.profile.name);
    let first_message = manifest
        .profile
        .entrance_messages
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let content = html! {
        div id=(ids::ENTRANCE_CONTAINER) class="entrance-container" {
            div id=(ids::PARTICLES_CONTAINER) class="particles-container" aria-hidden="true" {}
            div class="light-effect" aria-hidden="true" {}
            div class="entrance-content" {
                h1 class="entrance-title" { (manifest.profile.name) }
                p class="entrance-subtitle" { (manifest.profile.headline) }
                div id=(ids::TYPING_TEXT) class="typing-text" {
                    (typed_message(first_message))
                }
                button id=(ids::ENTRANCE_BTN) class="entrance-btn" { "Enter" }
            }
        }
        div id=(ids::TRANSITION_OVERLAY) class="transition-overlay" aria-hidden="true" {}
    };
    base_document(&title, css, Some("entrance"), content)
}

/// A partially-typed message with its trailing cursor, as the typing loop
/// renders it on every tick.
pub fn typed_message(prefix: &str) -> Markup {
    html! {
        (prefix)
        span class="cursor" { "|" }
    }
}
