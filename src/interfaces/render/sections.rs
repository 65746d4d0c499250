//! Section markup for the profile page. Every interpolated content field
//! goes through [`html::escape`]; absent optional fields are skipped.

use crate::entities::{education::EducationEntry, profile::Profile, timeline::TimelineEntry};
use crate::render::derive::{initials, is_current_period, split_description, strip_detail_marker, DescriptionBody};
use crate::render::html;
use crate::utils::markdown::safe_markdown_to_html;
use crate::view::reveal::{BlockId, RevealController, RevealState};

/// Wraps one content block in its reveal container. Server-side rendering
/// has no visibility primitive, so the controller's fail-open path decides
/// the initial presentation flag.
fn reveal_block(id: &str, inner: &str) -> String {
    let mut reveal = RevealController::fail_open(BlockId::new(id));
    reveal.attach();

    let (class, flag) = match reveal.state() {
        RevealState::Revealed => ("scroll-reveal in-view", "revealed"),
        RevealState::Pending => ("scroll-reveal", "pending"),
    };

    format!(
        "<div id=\"{id}\" class=\"{class}\" data-reveal=\"{flag}\">{inner}</div>",
        id = html::escape(id),
    )
}

fn tech_tags(technologies: &[String]) -> String {
    let tags: String = technologies
        .iter()
        .map(|tech| format!("<span class=\"tag\">{}</span>", html::escape(tech)))
        .collect();
    format!("<div class=\"tech-tags\">{tags}</div>")
}

pub fn header(profile: &Profile) -> String {
    format!(
        concat!(
            "<header class=\"site-header\">",
            "<div class=\"header-inner\">",
            "<div class=\"identity\">",
            "<div class=\"avatar-badge\">{initials}</div>",
            "<div>",
            "<div class=\"identity-name\">{name}</div>",
            "<div class=\"identity-role\">{role}</div>",
            "</div>",
            "</div>",
            "<nav class=\"site-nav\">",
            "<a href=\"#timeline\">Timeline</a>",
            "<a href=\"#education\">Education</a>",
            "<a href=\"#contact\">Contact</a>",
            "</nav>",
            "</div>",
            "</header>"
        ),
        initials = html::escape(&initials(&profile.name)),
        name = html::escape(&profile.name),
        role = html::escape(&profile.role),
    )
}

pub fn profile_card(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("<aside class=\"profile-card\">");

    let photo = profile.profile_image.as_deref().unwrap_or("/assets/profile.jpeg");
    out.push_str(&format!(
        "<img class=\"profile-photo\" src=\"{}\" alt=\"{}\">",
        html::escape(photo),
        html::escape(&profile.name),
    ));

    out.push_str(&format!("<h1>{}</h1>", html::escape(&profile.name)));
    out.push_str(&format!("<p class=\"role\">{}</p>", html::escape(&profile.role)));
    if let Some(location) = &profile.location {
        out.push_str(&format!("<p class=\"location\">{}</p>", html::escape(location)));
    }

    out.push_str("<section class=\"about\"><h3>About</h3>");
    out.push_str(&safe_markdown_to_html(&profile.summary));
    out.push_str("</section>");

    if !profile.socials.is_empty() {
        out.push_str("<section class=\"connect\"><h3>Connect</h3><div class=\"social-links\">");
        for social in &profile.socials {
            out.push_str(&format!(
                "<a class=\"social-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                html::escape(&social.href),
                html::escape(&social.label),
            ));
        }
        out.push_str("</div></section>");
    }

    out.push_str("</aside>");
    out
}

fn timeline_card(entry: &TimelineEntry) -> String {
    let current = is_current_period(&entry.period);
    let mut out = String::new();

    out.push_str(if current {
        "<article class=\"timeline-card current\">"
    } else {
        "<article class=\"timeline-card\">"
    });

    out.push_str("<div class=\"timeline-head\">");
    out.push_str(&format!("<h3>{}", html::escape(&entry.title)));
    if current {
        out.push_str("<span class=\"badge-current\">Current</span>");
    }
    out.push_str("</h3>");
    out.push_str(&format!(
        "<span class=\"period-pill\">{}</span>",
        html::escape(&entry.period)
    ));
    out.push_str("</div>");

    if let Some(description) = &entry.description {
        match split_description(description) {
            DescriptionBody::Bullets(clauses) => {
                out.push_str("<ul class=\"description\">");
                for clause in clauses {
                    out.push_str(&format!("<li>{}</li>", html::escape(clause)));
                }
                out.push_str("</ul>");
            }
            DescriptionBody::Paragraph(text) => {
                out.push_str(&format!("<p class=\"description\">{}</p>", html::escape(text)));
            }
        }
    }

    if let Some(technologies) = &entry.technologies {
        out.push_str(&tech_tags(technologies));
    }

    out.push_str("</article>");
    out
}

pub fn timeline_section(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("<section id=\"timeline\" class=\"section\"><h2>Experience Timeline</h2>");
    out.push_str("<div class=\"timeline\">");

    if let Some(entries) = &profile.timeline {
        for (idx, entry) in entries.iter().enumerate() {
            let card = timeline_card(entry);
            out.push_str(&reveal_block(&format!("timeline-{idx}"), &card));
        }
    }

    out.push_str("</div></section>");
    out
}

fn education_card(entry: &EducationEntry) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"education-card\">");

    out.push_str("<div class=\"education-head\">");
    out.push_str(&format!(
        "<h3>{} — {}</h3>",
        html::escape(&entry.degree),
        html::escape(&entry.school),
    ));
    out.push_str(&format!(
        "<span class=\"period-pill\">{} · {}</span>",
        html::escape(&entry.start),
        html::escape(&entry.end),
    ));
    out.push_str("</div>");

    if let Some(location) = &entry.location {
        out.push_str(&format!("<p class=\"location\">{}</p>", html::escape(location)));
    }

    if let Some(details) = &entry.details {
        if !details.is_empty() {
            out.push_str("<ul class=\"details\">");
            for line in details {
                out.push_str(&format!("<li>{}</li>", html::escape(strip_detail_marker(line))));
            }
            out.push_str("</ul>");
        }
    }

    if let Some(thesis_link) = &entry.thesis_link {
        out.push_str(&format!(
            "<a class=\"thesis-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Thesis</a>",
            html::escape(thesis_link),
        ));
    }

    if let Some(images) = &entry.images {
        if !images.is_empty() {
            out.push_str("<div class=\"doc-images\"><h4>Thesis Documentation</h4>");
            out.push_str("<div class=\"image-grid\">");
            for (idx, image) in images.iter().enumerate() {
                let alt = format!("Thesis documentation {}", idx + 1);
                out.push_str(&format!(
                    concat!(
                        "<button type=\"button\" class=\"doc-image\" ",
                        "data-modal-src=\"{src}\" data-modal-alt=\"{alt}\">",
                        "<img src=\"{src}\" alt=\"{alt}\">",
                        "</button>"
                    ),
                    src = html::escape(image),
                    alt = html::escape(&alt),
                ));
            }
            out.push_str("</div></div>");
        }
    }

    out.push_str("</article>");
    out
}

pub fn education_section(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("<section id=\"education\" class=\"section\"><h2>Education</h2>");

    if profile.education.is_empty() {
        out.push_str("<p class=\"empty-hint\">No education entries yet.</p>");
    }
    for (idx, entry) in profile.education.iter().enumerate() {
        let card = education_card(entry);
        out.push_str(&reveal_block(&format!("education-{idx}"), &card));
    }

    out.push_str("</section>");
    out
}

pub fn contact_section(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("<section id=\"contact\" class=\"section\"><h2>Contact</h2>");
    out.push_str("<div class=\"contact-card\"><p>Feel free to reach out.</p>");
    out.push_str("<div class=\"contact-links\">");

    if let Some(email) = &profile.email {
        if !email.is_empty() {
            out.push_str(&format!(
                "<a href=\"mailto:{}\">{}</a>",
                html::escape(email),
                html::escape(email),
            ));
        }
    }
    for social in &profile.socials {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            html::escape(&social.href),
            html::escape(&social.label),
        ));
    }

    out.push_str("</div></div></section>");
    out
}

/// The single shared overlay surface, emitted once per document and hidden
/// until an image tile activates it.
pub fn modal_overlay() -> String {
    concat!(
        "<div id=\"image-modal\" class=\"modal-overlay\" hidden aria-hidden=\"true\" data-modal-state=\"closed\">",
        "<div class=\"modal-content\">",
        "<button type=\"button\" class=\"modal-close\" aria-label=\"Close\">&times;</button>",
        "<img class=\"modal-image\" src=\"\" alt=\"\">",
        "</div>",
        "</div>"
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;

    #[test]
    fn reveal_blocks_render_fail_open() {
        let block = reveal_block("timeline-0", "<p>card</p>");
        assert!(block.contains("data-reveal=\"revealed\""));
        assert!(block.contains("in-view"));
    }

    #[test]
    fn current_timeline_entry_gets_the_badge() {
        let section = timeline_section(&PROFILE);
        assert!(section.contains("badge-current"));
        assert!(section.contains("timeline-card current"));
        // the two past roles must not be emphasized
        assert_eq!(section.matches("badge-current").count(), 1);
    }

    #[test]
    fn descriptions_become_bullets_with_trailing_periods_stripped() {
        let section = timeline_section(&PROFILE);
        assert!(section.contains("<li>Co-created an engine for generating dynamic forms</li>"));
        assert!(!section.contains("dynamic forms.</li>"));
    }

    #[test]
    fn education_detail_markers_are_stripped() {
        let section = education_section(&PROFILE);
        assert!(section.contains("<li>Job Listings:"));
        assert!(!section.contains("<li>•"));
    }

    #[test]
    fn education_images_are_wired_to_the_modal() {
        let section = education_section(&PROFILE);
        assert!(section.contains("data-modal-src=\"/assets/thesis-images/ios-app-prototypes.png\""));
        assert!(section.contains("data-modal-alt=\"Thesis documentation 2\""));
    }

    #[test]
    fn empty_education_renders_a_hint() {
        let mut profile = PROFILE.clone();
        profile.education.clear();
        let section = education_section(&profile);
        assert!(section.contains("empty-hint"));
    }

    #[test]
    fn header_carries_the_three_anchors_and_initials() {
        let markup = header(&PROFILE);
        for anchor in ["#timeline", "#education", "#contact"] {
            assert!(markup.contains(&format!("href=\"{anchor}\"")));
        }
        assert!(markup.contains("<div class=\"avatar-badge\">MS</div>"));
    }
}
