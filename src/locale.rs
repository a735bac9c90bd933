//! Picking the page body for a reader's language.
//!
//! Chinese and English bodies ship with the site. Japanese is served through
//! machine translation of the English body, which is flagged with a hint.

use crate::pipeline::PageContent;
use docweave_core::toc::inject_toc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKey {
    Zh,
    En,
    Jp,
}

/// Languages with a hand-written body.
pub const BUILTIN_LANGUAGES: [LanguageKey; 2] = [LanguageKey::Zh, LanguageKey::En];
/// Languages served by translating the English body.
pub const API_LANGUAGES: [LanguageKey; 1] = [LanguageKey::Jp];

impl LanguageKey {
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageKey::Zh => "简体中文",
            LanguageKey::En => "English",
            LanguageKey::Jp => "日本語",
        }
    }

    pub fn is_builtin(self) -> bool {
        BUILTIN_LANGUAGES.contains(&self)
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Page bodies keyed by built-in language.
pub type BuiltinContent = BTreeMap<LanguageKey, PageContent>;

/// Built-in languages present in `builtin`, then the API languages.
pub fn support_languages(builtin: &BuiltinContent) -> Vec<LanguageKey> {
    builtin
        .keys()
        .copied()
        .filter(|key| key.is_builtin())
        .chain(API_LANGUAGES)
        .collect()
}

fn translate_hint(language: LanguageKey) -> String {
    format!(
        "<div class=\"translate-hint\">Language \"{}\" is not provided. It was translated by machine</div>",
        language.display_name()
    )
}

/// The body for `language`: its own if shipped, otherwise the English body
/// behind a translation hint. `None` when English is missing too.
pub fn content_for(language: LanguageKey, builtin: &BuiltinContent) -> Option<PageContent> {
    if let Some(content) = builtin.get(&language) {
        return Some(content.clone());
    }
    let english = builtin.get(&LanguageKey::En)?;
    log::debug!("No {} body, falling back to English", language);
    Some(PageContent {
        html: translate_hint(language) + &english.html,
        toc: english.toc.clone(),
    })
}

/// The selected body with its table of contents injected.
pub fn content_html(language: LanguageKey, builtin: &BuiltinContent) -> Option<String> {
    content_for(language, builtin).map(|content| inject_toc(&content.html, &content.toc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docweave_core::TocEntry;

    fn site() -> BuiltinContent {
        BuiltinContent::from([
            (
                LanguageKey::En,
                PageContent::new("<p>[toc]</p><h1>Intro</h1>", vec![TocEntry::new(1, "Intro")]),
            ),
            (
                LanguageKey::Zh,
                PageContent::new("<p>[toc]</p><h1>简介</h1>", vec![TocEntry::new(1, "简介")]),
            ),
        ])
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LanguageKey::Zh.display_name(), "简体中文");
        assert_eq!(LanguageKey::En.to_string(), "English");
        assert_eq!(LanguageKey::Jp.display_name(), "日本語");
    }

    #[test]
    fn test_support_languages_order() {
        assert_eq!(
            support_languages(&site()),
            vec![LanguageKey::Zh, LanguageKey::En, LanguageKey::Jp]
        );
        let only_en = BuiltinContent::from([(LanguageKey::En, PageContent::default())]);
        assert_eq!(
            support_languages(&only_en),
            vec![LanguageKey::En, LanguageKey::Jp]
        );
    }

    #[test]
    fn test_builtin_language_served_as_is() {
        let content = content_for(LanguageKey::Zh, &site()).unwrap();
        assert_eq!(content.html, "<p>[toc]</p><h1>简介</h1>");
    }

    #[test]
    fn test_fallback_adds_hint() {
        let content = content_for(LanguageKey::Jp, &site()).unwrap();
        assert_eq!(
            content.html,
            "<div class=\"translate-hint\">Language \"日本語\" is not provided. It was translated by machine</div><p>[toc]</p><h1>Intro</h1>"
        );
        assert_eq!(content.toc, vec![TocEntry::new(1, "Intro")]);
    }

    #[test]
    fn test_missing_english_gives_none() {
        let zh_only = BuiltinContent::from([(LanguageKey::Zh, PageContent::default())]);
        assert!(content_for(LanguageKey::Jp, &zh_only).is_none());
        assert!(content_html(LanguageKey::En, &zh_only).is_none());
    }

    #[test]
    fn test_content_html_injects_toc() {
        let html = content_html(LanguageKey::En, &site()).unwrap();
        assert!(html.starts_with("<ul class=\"toc-tree\">"));
        assert!(html.contains("href=\"#section_intro\""));
        assert!(!html.contains("[toc]"));
    }

    #[test]
    fn test_serde_keys() {
        assert_eq!(serde_json::to_string(&LanguageKey::Jp).unwrap(), "\"jp\"");
        let key: LanguageKey = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(key, LanguageKey::Zh);
    }
}
