use crate::flat::FlatIndex;
use crate::slug::section_id;
use docweave_types::{Document, TokenKind};

/// Attaches a `section_…` id to every heading-open token.
///
/// The id is derived from the first token after the heading, in document
/// order, that has non-empty content; normally the heading's own inline
/// container. Returns the number of headings tagged.
pub fn assign_heading_ids(doc: &mut Document) -> usize {
    let index = FlatIndex::build(doc);
    let next = index.next_with_content(doc);

    let assignments: Vec<(usize, String)> = index
        .positions(doc, |t| matches!(t.kind, TokenKind::HeadingOpen { .. }))
        .map(|position| {
            let content = next[position]
                .and_then(|p| index.path(p))
                .and_then(|path| doc.get(path))
                .map(|t| t.content.as_str())
                .unwrap_or("");
            (position, section_id(content).as_str().to_string())
        })
        .collect();

    for (position, id) in &assignments {
        let Some(heading) = index.path(*position).and_then(|path| doc.get_mut(path)) else {
            continue;
        };
        log::trace!("Heading at {:?} -> #{}", index.path(*position), id);
        heading.set_attr("id", id.as_str());
    }

    log::debug!("Assigned ids to {} headings", assignments.len());
    assignments.len()
}
