use crate::error::{EnrichError, Result};
use crate::flat::FlatIndex;
use crate::mime::{data_uri, mime_for_path};
use crate::slug::figure_id;
use docweave_traits::ResourceProvider;
use docweave_types::{Document, Token, TokenKind};

pub const CAPTION_OPEN: &str = "<figcaption>";
pub const CAPTION_CLOSE: &str = "</figcaption>";

/// An inline container whose only child is an image.
fn is_figure(token: &Token) -> bool {
    token.kind == TokenKind::Inline
        && token.children.len() == 1
        && token.children[0].kind == TokenKind::Image
}

/// Inlines every stand-alone image as a data URI and gives it a caption.
///
/// Containers holding anything besides a single image are left alone. The
/// caption is the `alt` attribute when set, otherwise the image's alt text
/// content. Returns the number of figures embedded.
pub fn embed_figures(doc: &mut Document, resources: &dyn ResourceProvider) -> Result<usize> {
    let index = FlatIndex::build(doc);
    let figures: Vec<usize> = index.positions(doc, is_figure).collect();

    // Appending after the single image keeps every indexed path valid.
    for &position in &figures {
        let Some(container) = index.path(position).and_then(|path| doc.get_mut(path)) else {
            continue;
        };
        let image = &mut container.children[0];

        let src = image
            .attr("src")
            .map(str::to_string)
            .ok_or_else(|| EnrichError::MissingSource {
                alt: image.content.clone(),
            })?;
        let bytes = resources.load(&src)?;
        let mime = mime_for_path(&src)?;
        log::trace!("Embedding '{}' ({}, {} bytes)", src, mime, bytes.len());
        image.set_attr("src", data_uri(mime, &bytes));

        let caption = match image.attr("alt") {
            Some(alt) if !alt.is_empty() => alt.to_string(),
            _ => image.content.clone(),
        };
        image.set_attr("id", figure_id(&caption).as_str());

        container.children.extend([
            Token::inline_html(CAPTION_OPEN),
            Token::text(caption),
            Token::inline_html(CAPTION_CLOSE),
        ]);
    }

    log::debug!(
        "Embedded {} figures via {}",
        figures.len(),
        resources.name()
    );
    Ok(figures.len())
}
