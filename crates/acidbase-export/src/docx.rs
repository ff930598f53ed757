use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use acidbase_core::models::report::Report;

use crate::error::ExportError;
use crate::render::render_report;
use crate::styles::DocumentStyles;

const FLAGS: [&str; 2] = ["(H)", "(L)"];

/// Render a report with the built-in layout and pack it as DOCX.
pub fn generate_report_docx(
    report: &Report,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render_report(report)?;
    let bytes = generate_docx(&rendered, styles)?;
    tracing::info!(report_id = %report.id, bytes = bytes.len(), "generated DOCX report");
    Ok(bytes)
}

/// Generate a DOCX document from rendered report text.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → DOCX Heading 1, centred
/// - `## Heading` → DOCX Heading 2
/// - `### Heading` → DOCX Heading 3
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `(H)` / `(L)` → bold run in the flag colour
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles).align(AlignmentType::Center)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    inline_paragraph(Some(text_run("\u{2022} ", false, styles)), text, styles)
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    inline_paragraph(None, text, styles)
}

fn inline_paragraph(lead: Option<Run>, text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in lead.into_iter().chain(parse_inline(text, styles)) {
        para = para.add_run(run);
    }
    para
}

/// Split a line into runs on `**` markers, then colour any H/L flags.
/// An unclosed `**` leaves the trailing text plain.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let unclosed = segments.len() % 2 == 0;
    let last = segments.len() - 1;

    let mut runs = Vec::new();
    for (i, segment) in segments.into_iter().enumerate() {
        let bold = i % 2 == 1 && !(unclosed && i == last);
        push_flagged(&mut runs, segment, bold, styles);
    }
    runs
}

fn push_flagged(runs: &mut Vec<Run>, text: &str, bold: bool, styles: &DocumentStyles) {
    let mut remaining = text;
    while let Some(start) = FLAGS.iter().filter_map(|f| remaining.find(f)).min() {
        if start > 0 {
            runs.push(text_run(&remaining[..start], bold, styles));
        }
        let end = start + FLAGS[0].len();
        runs.push(text_run(&remaining[start..end], true, styles).color(&styles.flag_color));
        remaining = &remaining[end..];
    }
    if !remaining.is_empty() {
        runs.push(text_run(remaining, bold, styles));
    }
}

fn text_run(text: &str, bold: bool, styles: &DocumentStyles) -> Run {
    let run = Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if bold { run.bold() } else { run }
}
