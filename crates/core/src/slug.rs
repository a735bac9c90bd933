//! Anchor identifiers for headings, figures and TOC links.
//!
//! Heading ids and TOC link targets must agree exactly, so both go through
//! [`section_id`]. Figure ids share the same normalisation with a different
//! prefix and a different way of picking the numeral.
//!
//! The "dotted numeral" is one or more ASCII digits followed by any number of
//! `.digits` groups: `10`, `2.1`, `3.4.15`. A trailing dot is not part of it.

use docweave_types::AnchorId;

pub const SECTION_PREFIX: &str = "section_";
pub const FIGURE_PREFIX: &str = "figure_";

/// Characters replaced by `_` in every slug.
const REPLACED: [char; 9] = ['<', '>', '&', '"', '\'', ' ', '-', ':', '.'];

/// Byte offset just past the dotted numeral that starts at `start`.
///
/// `bytes[start]` must be an ASCII digit.
fn numeral_end(bytes: &[u8], start: usize) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(start);
    while end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end = digits_from(end + 1);
    }
    end
}

/// The first dotted numeral in `text`, if any.
pub fn dotted_numeral(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    Some(&text[start..numeral_end(bytes, start)])
}

/// The numeral following the first `figure` (any case, optional spaces) that
/// is followed by one.
fn figure_numeral(caption: &str) -> Option<&str> {
    const WORD: &[u8] = b"figure";
    let bytes = caption.as_bytes();
    let mut from = 0;

    while from + WORD.len() <= bytes.len() {
        let found = bytes[from..]
            .windows(WORD.len())
            .position(|w| w.eq_ignore_ascii_case(WORD))?;
        let mut cursor = from + found + WORD.len();
        while cursor < bytes.len() && bytes[cursor] == b' ' {
            cursor += 1;
        }
        if cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            return Some(&caption[cursor..numeral_end(bytes, cursor)]);
        }
        from += found + 1;
    }
    None
}

/// Lower-cases `text` and maps every character in [`REPLACED`] to `_`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect()
}

/// The anchor for a heading whose first following content is `content`.
///
/// # Examples
///
/// ```
/// use docweave_core::slug::section_id;
///
/// assert_eq!(section_id("2.1 Overview").as_str(), "section_2_1");
/// assert_eq!(section_id("Getting Started").as_str(), "section_getting_started");
/// ```
pub fn section_id(content: &str) -> AnchorId {
    let chosen = dotted_numeral(content).unwrap_or(content);
    AnchorId::from(format!("{SECTION_PREFIX}{}", normalize(chosen)))
}

/// The anchor for a figure with the given caption.
pub fn figure_id(caption: &str) -> AnchorId {
    let chosen = figure_numeral(caption).unwrap_or(caption);
    AnchorId::from(format!("{FIGURE_PREFIX}{}", normalize(chosen)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_numeral_forms() {
        assert_eq!(dotted_numeral("2.1 Overview"), Some("2.1"));
        assert_eq!(dotted_numeral("Chapter 10"), Some("10"));
        assert_eq!(dotted_numeral("v3.4.15-beta"), Some("3.4.15"));
        assert_eq!(dotted_numeral("2. Intro"), Some("2"));
        assert_eq!(dotted_numeral("1..2"), Some("1"));
        assert_eq!(dotted_numeral("no digits"), None);
        assert_eq!(dotted_numeral(""), None);
    }

    #[test]
    fn test_dotted_numeral_takes_first_run() {
        assert_eq!(dotted_numeral("Step 4 of 7"), Some("4"));
        assert_eq!(dotted_numeral("1.2 and 3.4"), Some("1.2"));
    }

    #[test]
    fn test_dotted_numeral_after_multibyte_text() {
        assert_eq!(dotted_numeral("第 3.2 节"), Some("3.2"));
    }

    #[test]
    fn test_section_id_uses_numeral() {
        assert_eq!(section_id("2.1 Overview"), "section_2_1");
        assert_eq!(section_id("10 Appendix"), "section_10");
    }

    #[test]
    fn test_section_id_uses_whole_text() {
        assert_eq!(section_id("Hello World"), "section_hello_world");
        assert_eq!(
            section_id("A<b>&\"c\"'d' e-f:g.h"),
            "section_a_b___c__d__e_f_g_h"
        );
    }

    #[test]
    fn test_section_id_keeps_other_characters() {
        assert_eq!(section_id("C++ / Rust?"), "section_c++_/_rust?");
        assert_eq!(section_id("快速开始"), "section_快速开始");
    }

    #[test]
    fn test_section_id_empty() {
        assert_eq!(section_id(""), "section_");
    }

    #[test]
    fn test_section_id_is_deterministic() {
        let once = section_id("3.2 Formatting Rules");
        let twice = section_id("3.2 Formatting Rules");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_figure_id_with_number() {
        assert_eq!(figure_id("Figure 3.2 Layout of the buffer"), "figure_3_2");
        assert_eq!(figure_id("figure12: chart"), "figure_12");
        assert_eq!(figure_id("See FIGURE   7"), "figure_7");
    }

    #[test]
    fn test_figure_id_skips_unnumbered_mentions() {
        assert_eq!(figure_id("Figure shows figure 4"), "figure_4");
    }

    #[test]
    fn test_figure_id_falls_back_to_caption() {
        assert_eq!(figure_id("Architecture overview"), "figure_architecture_overview");
        assert_eq!(figure_id("Figure: Flow"), "figure_figure__flow");
        assert_eq!(figure_id(""), "figure_");
    }

    #[test]
    fn test_figure_id_ignores_numbers_without_keyword() {
        assert_eq!(figure_id("Step 2"), "figure_step_2");
    }
}
