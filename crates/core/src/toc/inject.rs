use super::tree::TocRenderer;
use docweave_types::TocEntry;

/// The paragraph the TOC replaces.
pub const TOC_PLACEHOLDER: &str = "<p>[toc]</p>";

/// Byte offset of the first ASCII-case-insensitive placeholder in `html`.
pub fn find_placeholder(html: &str) -> Option<usize> {
    let needle = TOC_PLACEHOLDER.as_bytes();
    html.as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Replaces the first placeholder with an already rendered TOC.
pub fn inject_rendered_toc(html: &str, toc_html: &str) -> String {
    let Some(start) = find_placeholder(html) else {
        return html.to_string();
    };
    let end = start + TOC_PLACEHOLDER.len();
    let mut out = String::with_capacity(html.len() - TOC_PLACEHOLDER.len() + toc_html.len());
    out.push_str(&html[..start]);
    out.push_str(toc_html);
    out.push_str(&html[end..]);
    out
}

/// Replaces the first placeholder with the default-depth TOC for `entries`.
///
/// Input without a placeholder comes back unchanged.
pub fn inject_toc(html: &str, entries: &[TocEntry]) -> String {
    inject_toc_with(&TocRenderer::default(), html, entries)
}

pub fn inject_toc_with(renderer: &TocRenderer, html: &str, entries: &[TocEntry]) -> String {
    if find_placeholder(html).is_none() {
        if !entries.is_empty() {
            log::warn!(
                "Document has {} headings but no {} placeholder",
                entries.len(),
                TOC_PLACEHOLDER
            );
        }
        return html.to_string();
    }
    inject_rendered_toc(html, &renderer.render(entries))
}
