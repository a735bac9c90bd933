use crate::escape::escape_html;
use crate::slug::section_id;
use docweave_types::TocEntry;

pub const DEFAULT_MAX_LEVEL: u8 = 3;

const LIST_OPEN: &str = "<ul class=\"toc-tree\">";
const LIST_CLOSE: &str = "</ul>";

/// Renders heading entries as nested `<ul>` lists.
///
/// Entries deeper than `max_level` are dropped, as are entries at level 0. A jump of several levels opens
/// or closes one list per level, so the output is always balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocRenderer {
    pub max_level: u8,
}

impl Default for TocRenderer {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl TocRenderer {
    pub fn new(max_level: u8) -> Self {
        Self { max_level }
    }

    pub fn render(&self, entries: &[TocEntry]) -> String {
        let mut html = String::new();
        let mut cursor: u8 = 0;
        let mut open_lists: usize = 0;
        let mut skipped = 0;

        for entry in entries {
            if entry.level == 0 {
                log::warn!("Dropping TOC entry {:?} with level 0", entry.label);
                continue;
            }
            if entry.level > self.max_level {
                skipped += 1;
                continue;
            }
            while entry.level > cursor {
                html.push_str(LIST_OPEN);
                cursor += 1;
                open_lists += 1;
            }
            while entry.level < cursor {
                html.push_str(LIST_CLOSE);
                cursor -= 1;
                open_lists -= 1;
            }
            push_item(&mut html, entry);
        }

        for _ in 0..open_lists {
            html.push_str(LIST_CLOSE);
        }

        if skipped > 0 {
            log::warn!(
                "Left {} TOC entries deeper than level {} out of the tree",
                skipped,
                self.max_level
            );
        }
        html
    }
}

fn push_item(html: &mut String, entry: &TocEntry) {
    let label = escape_html(&entry.label);
    let target = section_id(&entry.label);
    html.push_str(&format!(
        "<li class=\"toc-level{level}-content\"><a class=\"toc-hyper-link\" href=\"{href}\" title=\"{label}\">{label}</a></li>",
        level = entry.level,
        href = target.href(),
    ));
}

/// Renders with the default depth limit.
pub fn render_toc(entries: &[TocEntry]) -> String {
    TocRenderer::default().render(entries)
}
