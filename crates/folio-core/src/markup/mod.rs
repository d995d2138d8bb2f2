//! Injected markup
//!
//! Fragments are built as plain data first ([`MobileDetailFragment`]) and
//! rendered to HTML separately, so their content can be checked without a
//! document.

mod icons;

use std::borrow::Cow;

use crate::catalog::{ProjectId, ProjectRecord};
use crate::nav::NavDestination;
use crate::viewport::ViewportMode;

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// Which outbound link an icon points at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Info,
    Web,
}

impl LinkKind {
    /// All link kinds in display order
    pub const ALL: [LinkKind; 3] = [LinkKind::Github, LinkKind::Info, LinkKind::Web];

    /// Hover title shown on the icon
    pub fn hover_title(self) -> &'static str {
        match self {
            LinkKind::Github => "View code on Github",
            LinkKind::Info => "More Information",
            LinkKind::Web => "Go to website",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            LinkKind::Github => icons::GITHUB_ICON,
            LinkKind::Info => icons::INFO_ICON,
            LinkKind::Web => icons::WEB_ICON,
        }
    }

    fn href(self, record: &ProjectRecord) -> &str {
        match self {
            LinkKind::Github => &record.links.github,
            LinkKind::Info => &record.links.info,
            LinkKind::Web => &record.links.web,
        }
    }
}

/// An icon link in a mobile detail block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconLink {
    pub kind: LinkKind,
    pub href: String,
}

/// Detail block injected after a card in the narrow layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileDetailFragment {
    pub id: ProjectId,
    /// Description, truncated to the mobile character budget
    pub text: String,
    pub links: Vec<IconLink>,
}

impl MobileDetailFragment {
    /// Build the fragment for a project
    pub fn new(id: &ProjectId, record: &ProjectRecord, max_chars: usize) -> Self {
        Self {
            id: id.clone(),
            text: truncate_mobile_text(&record.description, max_chars).into_owned(),
            links: LinkKind::ALL
                .iter()
                .map(|&kind| IconLink {
                    kind,
                    href: kind.href(record).to_string(),
                })
                .collect(),
        }
    }

    /// Element id of the injected block
    pub fn element_id(&self) -> String {
        format!("info{}", self.id)
    }

    /// Render to HTML; the block starts hidden and collapsed
    pub fn render(&self) -> String {
        let id = escape_html(self.id.as_str());
        let mut html = format!(
            "<div id=\"info{id}\" class=\"mobile-project-info flex-column flex-center\" data-infoid=\"{id}\" \
             style=\"display: none; height: 0px; overflow: hidden;\">\
             <p>{}</p><div class=\"full-width flex-row flex-end icon-wrapper\">",
            escape_html(&self.text)
        );
        for link in &self.links {
            html.push_str(&format!(
                "<a title=\"{}\" href=\"{}\">{}</a>",
                link.kind.hover_title(),
                escape_html(&link.href),
                link.kind.icon()
            ));
        }
        html.push_str("</div></div>");
        html
    }
}

/// Truncate a description to the mobile budget
///
/// Strings whose character count reaches `max_chars` keep their first
/// `max_chars` characters followed by [`ELLIPSIS`]; shorter strings pass
/// through untouched.
pub fn truncate_mobile_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None if text.chars().count() == max_chars => Cow::Owned(format!("{text}{ELLIPSIS}")),
        None => Cow::Borrowed(text),
    }
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Navigation markup for the given layout
///
/// Wide: a static horizontal bar. Narrow: a drawer with a close control,
/// hidden and zero-width until opened.
pub fn nav_markup(mode: ViewportMode) -> String {
    let items: String = NavDestination::ALL
        .iter()
        .map(|dest| format!("<li id=\"{}\" class=\"nav-list-item\">{}</li>", dest.button_id(), dest.label()))
        .collect();
    match mode {
        ViewportMode::Wide => format!("<nav class=\"flex-child nav-large\"><ul class=\"nav-list\">{items}</ul></nav>"),
        ViewportMode::Narrow => format!(
            "<nav class=\"nav-small\" style=\"display: none; width: 0%;\"><ul class=\"nav-list\">\
             <li id=\"closeNav\">&#x2715;</li>{items}</ul></nav>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectLinks;

    fn record(description: &str) -> ProjectRecord {
        ProjectRecord {
            title: "Proj A".to_string(),
            description: description.to_string(),
            links: ProjectLinks {
                github: "g".to_string(),
                info: "i".to_string(),
                web: "w".to_string(),
            },
        }
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let text = "x".repeat(199);
        let out = truncate_mobile_text(&text, 200);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn test_truncate_at_exact_budget() {
        let text = "x".repeat(200);
        let out = truncate_mobile_text(&text, 200);
        assert_eq!(out, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "x".repeat(250);
        let out = truncate_mobile_text(&text, 200);
        assert_eq!(out.chars().count(), 203);
        assert!(out.ends_with("..."));
        assert!(out.starts_with(&"x".repeat(200)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(201);
        let out = truncate_mobile_text(&text, 200);
        assert_eq!(out, format!("{}...", "é".repeat(200)));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"The "Voltorb Flip" <game> & more"#),
            "The &quot;Voltorb Flip&quot; &lt;game&gt; &amp; more"
        );
    }

    #[test]
    fn test_mobile_fragment_content() {
        let fragment = MobileDetailFragment::new(&ProjectId::from("A"), &record(&"x".repeat(250)), 200);

        assert_eq!(fragment.element_id(), "infoA");
        assert_eq!(fragment.text, format!("{}...", "x".repeat(200)));
        let hrefs: Vec<&str> = fragment.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["g", "i", "w"]);
    }

    #[test]
    fn test_mobile_fragment_render() {
        let fragment = MobileDetailFragment::new(&ProjectId::from("A"), &record("Short & sweet"), 200);
        let html = fragment.render();

        assert!(html.starts_with("<div id=\"infoA\""));
        assert!(html.contains("style=\"display: none;"));
        assert!(html.contains("<p>Short &amp; sweet</p>"));
        assert!(html.contains("title=\"View code on Github\" href=\"g\""));
        assert!(html.contains("title=\"More Information\" href=\"i\""));
        assert!(html.contains("title=\"Go to website\" href=\"w\""));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_nav_markup() {
        let wide = nav_markup(ViewportMode::Wide);
        assert!(wide.contains("nav-large"));
        assert!(!wide.contains("closeNav"));
        assert!(wide.contains("<li id=\"aboutBtn\" class=\"nav-list-item\">About</li>"));

        let narrow = nav_markup(ViewportMode::Narrow);
        assert!(narrow.contains("nav-small"));
        assert!(narrow.contains("id=\"closeNav\""));
        assert!(narrow.contains("display: none"));
        for id in ["aboutBtn", "servicesBtn", "projectsBtn", "contactBtn"] {
            assert!(narrow.contains(id));
        }
    }
}
