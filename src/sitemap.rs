//! XML sitemap for the pre-rendered pages.

use std::fmt::Write;

const CHANGE_FREQUENCY: &str = "monthly";
const PRIORITY: &str = "0.7";

/// Build the sitemap listing `/`, `/about`, one page per language and one
/// page per country slug.
pub fn build_sitemap<L, C>(origin: &str, language_names: &[L], country_slugs: &[C]) -> String
where
    L: AsRef<str>,
    C: AsRef<str>,
{
    let origin = origin.trim_end_matches('/');

    let mut paths = vec!["/".to_string(), "/about".to_string()];
    paths.extend(
        language_names
            .iter()
            .map(|name| format!("/{}", encode_path_segment(name.as_ref()))),
    );
    paths.extend(
        country_slugs
            .iter()
            .map(|slug| format!("/country/{}", encode_path_segment(slug.as_ref()))),
    );

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for path in paths {
        // Writing into a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(origin),
            escape_xml(&path),
            CHANGE_FREQUENCY,
            PRIORITY
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn encode_path_segment(segment: &str) -> String {
    segment.replace('%', "%25").replace(' ', "%20").replace('/', "%2F")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
