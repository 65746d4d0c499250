use crate::entities::profile::Profile;
use crate::render::{html, sections};

/// Composes the full single-page document from the content record. Runs
/// once at startup; the result is immutable afterwards.
pub fn render_page(profile: &Profile) -> String {
    let title = format!("{} — {}", profile.name, profile.role);

    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head>");
    out.push_str("<meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&format!("<title>{}</title>", html::escape(&title)));
    out.push_str("<link rel=\"stylesheet\" href=\"/assets/styles.css\">");
    out.push_str("</head><body>");

    out.push_str(&sections::header(profile));

    out.push_str("<main><div class=\"layout\">");
    out.push_str(&sections::profile_card(profile));
    out.push_str("<div class=\"sections\">");
    out.push_str(&sections::timeline_section(profile));
    out.push_str(&sections::education_section(profile));
    out.push_str(&sections::contact_section(profile));
    out.push_str("</div></div></main>");

    out.push_str(&sections::modal_overlay());
    out.push_str("</body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;

    #[test]
    fn document_contains_every_section_anchor() {
        let page = render_page(&PROFILE);
        for anchor in ["id=\"timeline\"", "id=\"education\"", "id=\"contact\""] {
            assert_eq!(page.matches(anchor).count(), 1, "missing or duplicated {anchor}");
        }
    }

    #[test]
    fn exactly_one_modal_overlay_is_emitted() {
        let page = render_page(&PROFILE);
        assert_eq!(page.matches("id=\"image-modal\"").count(), 1);
    }

    #[test]
    fn summary_prose_renders_inside_the_about_block() {
        let page = render_page(&PROFILE);
        assert!(page.contains("<h3>About</h3>"));
        assert!(page.contains("mentoring engineers."));
    }
}
