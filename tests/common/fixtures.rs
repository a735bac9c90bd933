/// A page exercising every pass.
pub const FULL_PAGE: &str = "\
[toc]

# 1 Intro

Read `mm_fmt_init` first.

## 1.1 Setup

![Figure 1 Chart](img/chart.png)

## Details

Plain closing words.
";

/// Headings only, for TOC shape checks.
pub fn outline(headings: &[(u8, &str)]) -> String {
    let mut markdown = String::from("[toc]\n\n");
    for (level, label) in headings {
        markdown.push_str(&"#".repeat(*level as usize));
        markdown.push(' ');
        markdown.push_str(label);
        markdown.push_str("\n\n");
    }
    markdown
}
