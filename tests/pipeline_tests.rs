mod common;

use common::fixtures::FULL_PAGE;
use common::{PNG_BASE64, SourceSite, TestResult, init_logging};
use docweave::{
    Document, EnrichError, PipelineBuilder, PipelineError, ResourceError, TocEntry, Token,
    TokenKind,
};
use std::fs;
use std::sync::Arc;

const ZWSP: &str = "\u{200B}";

#[test]
fn test_full_page_without_bionic() -> TestResult {
    init_logging();
    let site = SourceSite::new()?;
    let pipeline = site.builder().with_bionic(false).build()?;
    let page = pipeline.render_markdown(FULL_PAGE)?;

    assert!(page.html.starts_with("<ul class=\"toc-tree\">"));
    assert!(page.html.contains("<h1 id=\"section_1\">1 Intro</h1>"));
    assert!(page.html.contains("<h2 id=\"section_1_1\">1.1 Setup</h2>"));
    assert!(page.html.contains("<h2 id=\"section_details\">Details</h2>"));
    assert!(page.html.contains(&format!(
        "<p>Read <code class=\"code-wrappable\">mm_{ZWSP}fmt_{ZWSP}init</code> first.</p>"
    )));
    assert!(page.html.contains(&format!(
        "<p><img src=\"data:image/png;base64,{PNG_BASE64}\" alt=\"Figure 1 Chart\" id=\"figure_1\"><figcaption>Figure 1 Chart</figcaption></p>"
    )));
    assert!(!page.html.contains("[toc]"));
    Ok(())
}

#[test]
fn test_toc_links_match_heading_ids() -> TestResult {
    let site = SourceSite::new()?;
    let page = site.pipeline()?.render_markdown(FULL_PAGE)?;

    assert_eq!(
        page.toc,
        vec![
            TocEntry::new(1, "1 Intro"),
            TocEntry::new(2, "1.1 Setup"),
            TocEntry::new(2, "Details"),
        ]
    );
    for slug in ["section_1", "section_1_1", "section_details"] {
        assert!(page.html.contains(&format!("href=\"#{slug}\"")));
        assert!(page.html.contains(&format!("id=\"{slug}\"")));
    }
    Ok(())
}

#[test]
fn test_bionic_spans_in_paragraphs_only() -> TestResult {
    let site = SourceSite::new()?;
    let page = site.pipeline()?.render_markdown(FULL_PAGE)?;

    // Text around the code span is emphasized, the code itself is not.
    assert!(page.html.contains(&format!(
        "<p><span class=\"bionic\">Re</span>ad <code class=\"code-wrappable\">mm_{ZWSP}fmt_{ZWSP}init</code> <span class=\"bionic\">fir</span>st.</p>"
    )));
    // Headings are not paragraphs.
    assert!(page.html.contains("<h2 id=\"section_details\">Details</h2>"));
    Ok(())
}

#[test]
fn test_report_counts() -> TestResult {
    let site = SourceSite::new()?;
    let page = site.pipeline()?.render_markdown(FULL_PAGE)?;

    assert_eq!(page.report.headings, 3);
    assert_eq!(page.report.figures, 1);
    assert_eq!(page.report.code_spans, 1);
    assert_eq!(page.report.skipped_paragraphs, 1);
    assert_eq!(page.report.paragraphs, 3);
    assert!(page.report.spans > 0);
    Ok(())
}

#[test]
fn test_disabled_passes_leave_tree_alone() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_figure_embedding(false)
        .with_bionic(false)
        .with_code_wrapping(false)
        .build()?;
    let page = pipeline.render_markdown(FULL_PAGE)?;

    assert!(page.html.contains("<code>mm_fmt_init</code>"));
    assert!(page.html.contains("<img src=\"img/chart.png\" alt=\"Figure 1 Chart\">"));
    assert!(!page.html.contains("bionic"));
    // Heading ids are always assigned.
    assert!(page.html.contains("<h1 id=\"section_1\">"));
    assert_eq!(page.report.figures, 0);
    Ok(())
}

#[test]
fn test_missing_image_is_configuration_error() -> TestResult {
    let site = SourceSite::new()?;
    let err = site
        .pipeline()?
        .render_markdown("![Gone](img/gone.png)\n")
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(
        err,
        PipelineError::Enrich(EnrichError::Resource(ResourceError::NotFound(ref p))) if p == "img/gone.png"
    ));
    Ok(())
}

#[test]
fn test_unknown_extension_names_path() -> TestResult {
    let site = SourceSite::new()?;
    let err = site
        .pipeline()?
        .render_markdown("![Logo](img/logo.svg)\n")
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("svg"));
    assert!(message.contains("img/logo.svg"));
    Ok(())
}

#[test]
fn test_escaping_the_source_root_is_refused() -> TestResult {
    let site = SourceSite::new()?;
    let err = site
        .pipeline()?
        .render_markdown("![x](../outside.png)\n")
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Enrich(EnrichError::Resource(ResourceError::InvalidPath(_)))
    ));
    Ok(())
}

#[test]
fn test_inline_images_are_not_figures() -> TestResult {
    let site = SourceSite::new()?;
    let page = site
        .builder()
        .with_bionic(false)
        .build()?
        .render_markdown("See ![Figure 1](img/chart.png) here.\n")?;

    assert!(page.html.contains("src=\"img/chart.png\""));
    assert!(!page.html.contains("figcaption"));
    assert_eq!(page.report.figures, 0);
    Ok(())
}

#[test]
fn test_jpeg_figure() -> TestResult {
    let site = SourceSite::new()?;
    let page = site
        .builder()
        .with_bionic(false)
        .build()?
        .render_markdown("![Team photo](/img/photo.jpg)\n")?;

    assert!(page.html.contains("src=\"data:image/jpeg;base64,/9j/\""));
    assert!(page.html.contains("id=\"figure_team_photo\""));
    Ok(())
}

#[test]
fn test_config_file_drives_pipeline() -> TestResult {
    let site = SourceSite::new()?;
    let config_dir = tempfile::tempdir()?;
    let config_path = config_dir.path().join("docweave.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "sourceRoot": {:?}, "tocMaxLevel": 1, "bionic": false }}"#,
            site.root().display().to_string()
        ),
    )?;

    let pipeline = PipelineBuilder::new().with_config_file(&config_path)?.build()?;
    assert_eq!(pipeline.config().toc_max_level, 1);

    let page = pipeline.render_markdown(FULL_PAGE)?;
    assert!(page.html.contains("data:image/png;base64,"));
    // Level-2 headings are left out of the TOC but keep their ids.
    assert!(!page.html.contains("href=\"#section_1_1\""));
    assert!(page.html.contains("id=\"section_1_1\""));
    Ok(())
}

#[test]
fn test_custom_emphasizer() -> TestResult {
    let shout = |text: &str| format!("\u{E000}{}\u{E001}", text.to_uppercase());
    let pipeline = PipelineBuilder::new()
        .with_figure_embedding(false)
        .with_emphasizer(Arc::new(shout))
        .build()?;

    let page = pipeline.render_markdown("quiet words\n")?;
    assert_eq!(page.html, "<p><span class=\"bionic\">QUIET WORDS</span></p>\n");
    Ok(())
}

#[test]
fn test_broken_emphasizer_is_internal_error() -> TestResult {
    let unbalanced = |text: &str| format!("\u{E000}{text}");
    let pipeline = PipelineBuilder::new()
        .with_figure_embedding(false)
        .with_emphasizer(Arc::new(unbalanced))
        .build()?;

    let err = pipeline.render_markdown("words\n").unwrap_err();
    assert!(!err.is_configuration());
    assert!(matches!(
        err,
        PipelineError::Enrich(EnrichError::UnbalancedSentinels { .. })
    ));
    Ok(())
}

#[test]
fn test_render_prebuilt_document() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_figure_embedding(false)
        .with_bionic(false)
        .build()?;
    let doc = Document::new(vec![
        Token::paragraph_open(),
        Token::inline("[toc]", vec![Token::text("[toc]")]),
        Token::paragraph_close(),
        Token::heading_open(2),
        Token::inline("2.1 Overview", vec![Token::text("2.1 Overview")]),
        Token::heading_close(2),
    ]);

    let page = pipeline.render_document(doc, vec![TocEntry::new(2, "2.1 Overview")])?;
    assert!(page.html.starts_with("<ul class=\"toc-tree\"><ul class=\"toc-tree\">"));
    assert!(page.html.contains("<h2 id=\"section_2_1\">2.1 Overview</h2>"));
    Ok(())
}

#[test]
fn test_enrich_reports_per_pass() -> TestResult {
    let pipeline = PipelineBuilder::new().with_figure_embedding(false).build()?;
    let mut doc = docweave::parse_markdown("# A\n\nuse `a_b`\n").document;

    let report = pipeline.enrich(&mut doc)?;
    assert_eq!(report.headings, 1);
    assert_eq!(report.code_spans, 1);
    assert_eq!(report.paragraphs, 1);

    let code = doc.tokens[4]
        .children
        .iter()
        .find(|t| t.kind == TokenKind::CodeInline)
        .ok_or("code span missing")?;
    assert_eq!(code.content, format!("a_{ZWSP}b"));
    Ok(())
}

#[test]
fn test_pipeline_shared_between_threads() -> TestResult {
    let site = SourceSite::new()?;
    let pipeline = site.pipeline()?;

    let pages: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pipeline = &pipeline;
                scope.spawn(move || {
                    pipeline
                        .render_markdown(&format!("# Part {i}\n\n![Figure {i}](img/chart.png)\n"))
                        .map(|page| page.html)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("render thread panicked"))
            .collect::<Result<_, _>>()
    })?;

    for (i, html) in pages.iter().enumerate() {
        assert!(html.contains(&format!("id=\"figure_{i}\"")));
    }
    Ok(())
}

#[test]
fn test_deferred_injection_matches_render() -> TestResult {
    let site = SourceSite::new()?;
    let pipeline = site.builder().with_toc_max_level(1).build()?;

    let (content, _) = pipeline.render_content(FULL_PAGE)?;
    assert!(content.html.contains("<p>[toc]</p>"));
    assert_eq!(pipeline.toc_renderer().max_level, 1);

    let injected = content.html_with_toc(pipeline.toc_renderer());
    assert_eq!(injected, pipeline.render_markdown(FULL_PAGE)?.html);
    assert!(!injected.contains("href=\"#section_1_1\""));
    Ok(())
}
