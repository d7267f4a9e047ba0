//! docx-rs based evaluation form renderer.
//!
//! Document order:
//! 1. Title, school and academic year, centred
//! 2. Evaluator table
//! 3. One section per teacher: heading, profile table, rubric table and
//!    comments, with a page break between sections
//! 4. Signature table

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, PageMargin, Paragraph, Run, Style, StyleType, Table, TableAlignmentType,
    TableCell, TableRow,
};

use super::layout::{self, INFO_COLUMNS, PAGE_MARGIN};
use crate::domain::evaluation::{
    EvaluationForm, EvaluatorInfo, FormHeader, InfoRow, RubricRow, Signatory, TeacherNarrative,
};
use crate::domain::foundation::RubricBand;
use crate::ports::{FormRenderer, RenderError};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

const RUBRIC_NUMBER_HEADER: &str = "No";
const RUBRIC_CRITERION_HEADER: &str = "Kriteria Evaluasi";
const TOTAL_LABEL: &str = "TOTAL NILAI AHP";
const CRITERIA_CAPTION: &str = "KRITERIA EVALUASI:";
const COMMENTS_CAPTION: &str = "KOMENTAR DAN SARAN:";

/// The total score is printed under this band's column.
const TOTAL_SCORE_BAND: RubricBand = RubricBand::Cukup;

/// Empty rows between the signatory roles and printed names.
const SIGNATURE_SPACE_ROWS: usize = 2;

/// Renders the filled-in evaluation form into a `.docx` document.
#[derive(Debug, Clone, Default)]
pub struct DocxFormRenderer;

impl DocxFormRenderer {
    /// Create a new form renderer.
    pub fn new() -> Self {
        Self
    }

    fn build(form: &EvaluationForm) -> Docx {
        let mut docx = Docx::new()
            .page_margin(
                PageMargin::new()
                    .top(PAGE_MARGIN)
                    .bottom(PAGE_MARGIN)
                    .left(PAGE_MARGIN)
                    .right(PAGE_MARGIN),
            )
            .add_style(title_style())
            .add_style(heading_style());

        for paragraph in header_paragraphs(&form.header) {
            docx = docx.add_paragraph(paragraph);
        }
        docx = docx
            .add_paragraph(layout::blank_line())
            .add_table(evaluator_table(&form.evaluator))
            .add_paragraph(layout::blank_line());

        for (idx, section) in form.sections.iter().enumerate() {
            if idx > 0 {
                docx = docx.add_paragraph(layout::page_break());
            }
            docx = add_section(docx, section);
        }

        docx.add_paragraph(layout::blank_line())
            .add_paragraph(layout::blank_line())
            .add_table(signature_table(&form.signatories))
    }
}

impl FormRenderer for DocxFormRenderer {
    fn render(&self, form: &EvaluationForm) -> Result<Vec<u8>, RenderError> {
        if form.sections.is_empty() {
            return Err(RenderError::invalid_input("form has no teacher sections"));
        }

        let mut buffer = Cursor::new(Vec::new());
        Self::build(form)
            .build()
            .pack(&mut buffer)
            .map_err(RenderError::document)?;
        Ok(buffer.into_inner())
    }
}

fn title_style() -> Style {
    Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name("Title")
        .bold()
        .size(layout::half_points(16))
}

/// Outline level one, one per teacher section.
fn heading_style() -> Style {
    Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(layout::half_points(14))
        .outline_lvl(0)
}

fn header_paragraphs(header: &FormHeader) -> Vec<Paragraph> {
    vec![
        layout::centered(layout::arial_text(&header.title, 16).bold()).style(TITLE_STYLE),
        layout::centered(layout::arial_text(&header.school, 14).bold()),
        layout::centered(layout::arial_text(&header.academic_year, 12)),
    ]
}

/// Four-column `label : value` grid. Values are bold.
fn info_table(rows: &[InfoRow]) -> Table {
    let rows = rows
        .iter()
        .map(|row| {
            TableRow::new(vec![
                layout::sized_cell(
                    Paragraph::new().add_run(Run::new().add_text(&row.label)),
                    INFO_COLUMNS[0],
                ),
                layout::sized_cell(
                    Paragraph::new().add_run(Run::new().add_text(":")),
                    INFO_COLUMNS[1],
                ),
                layout::sized_cell(
                    Paragraph::new().add_run(Run::new().add_text(&row.value).bold()),
                    INFO_COLUMNS[2],
                ),
                layout::sized_cell(Paragraph::new(), INFO_COLUMNS[3]),
            ])
        })
        .collect();

    Table::new(rows).set_grid(INFO_COLUMNS.to_vec())
}

fn evaluator_table(evaluator: &EvaluatorInfo) -> Table {
    info_table(&evaluator.info_rows()).align(TableAlignmentType::Left)
}

fn add_section(docx: Docx, section: &TeacherNarrative) -> Docx {
    let heading = Paragraph::new()
        .add_run(layout::arial_text(&section.heading, 14).bold())
        .style(HEADING_STYLE)
        .align(AlignmentType::Left);

    let mut docx = docx
        .add_paragraph(heading)
        .add_table(info_table(&section.profile_rows()))
        .add_paragraph(layout::blank_line())
        .add_paragraph(
            Paragraph::new().add_run(layout::arial_text(CRITERIA_CAPTION, 12).bold()),
        )
        .add_table(rubric_table(section))
        .add_paragraph(layout::blank_line())
        .add_paragraph(
            Paragraph::new().add_run(layout::arial_text(COMMENTS_CAPTION, 12).bold()),
        );

    for line in &section.comments {
        docx = docx.add_paragraph(Paragraph::new().add_run(layout::text(line, 10)));
    }
    docx
}

fn rubric_table(section: &TeacherNarrative) -> Table {
    let mut rows = Vec::with_capacity(section.rubric.len() + 2);
    rows.push(rubric_header_row());
    rows.extend(section.rubric.iter().map(rubric_row));
    rows.push(total_row(&section.total_score.one_decimal()));

    Table::new(rows).align(TableAlignmentType::Center)
}

fn rubric_header_row() -> TableRow {
    let headers = [RUBRIC_NUMBER_HEADER, RUBRIC_CRITERION_HEADER]
        .into_iter()
        .chain(RubricBand::ALL.iter().map(|band| band.header()));

    TableRow::new(
        headers
            .map(|header| layout::cell(layout::centered(layout::text(header, 10).bold())))
            .collect(),
    )
}

fn rubric_row(row: &RubricRow) -> TableRow {
    let mut cells = vec![
        layout::cell(layout::centered(layout::text(&row.number.to_string(), 9))),
        layout::cell(
            Paragraph::new().add_run(layout::two_line_text(&row.criterion, &row.detail, 9)),
        ),
    ];
    cells.extend(
        RubricBand::ALL
            .iter()
            .map(|band| layout::cell(layout::centered(layout::text(row.checkbox(*band), 9)))),
    );
    TableRow::new(cells)
}

fn total_row(score: &str) -> TableRow {
    let mut cells = vec![
        layout::cell(layout::centered(Run::new())),
        layout::cell(Paragraph::new().add_run(layout::text(TOTAL_LABEL, 9).bold())),
    ];
    cells.extend(RubricBand::ALL.iter().map(|band| {
        if *band == TOTAL_SCORE_BAND {
            layout::cell(layout::centered(layout::text(score, 12).bold()))
        } else {
            layout::cell(layout::centered(Run::new()))
        }
    }));
    TableRow::new(cells)
}

fn signature_table(signatories: &[Signatory]) -> Table {
    let line = |text: &str, bold: bool| -> TableCell {
        let run = layout::text(text, 11);
        TableCell::new().add_paragraph(layout::centered(if bold { run.bold() } else { run }))
    };

    let mut rows = vec![TableRow::new(
        signatories.iter().map(|s| line(&s.role, true)).collect(),
    )];
    for _ in 0..SIGNATURE_SPACE_ROWS {
        rows.push(TableRow::new(
            signatories.iter().map(|_| line("", false)).collect(),
        ));
    }
    rows.push(TableRow::new(
        signatories
            .iter()
            .map(|s| line(&s.printed_name(), true))
            .collect(),
    ));

    Table::new(rows)
        .align(TableAlignmentType::Center)
        .clear_all_border()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::sample;
    use std::io::Read;

    fn part_xml(bytes: Vec<u8>, part: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(part)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn render_part(part: &str) -> String {
        let form = sample::evaluation_form().unwrap();
        part_xml(DocxFormRenderer::new().render(&form).unwrap(), part)
    }

    fn render_sample() -> String {
        render_part("word/document.xml")
    }

    /// Text of every `<w:t>` element in `xml`, in order.
    fn text_runs(xml: &str) -> Vec<String> {
        xml.split("<w:t")
            .skip(1)
            .filter(|chunk| chunk.starts_with('>') || chunk.starts_with(' '))
            .filter_map(|chunk| {
                let start = chunk.find('>')? + 1;
                let end = chunk.find("</w:t>")?;
                Some(chunk[start..end].to_string())
            })
            .collect()
    }

    /// Text runs of every table row, in document order.
    fn table_rows(xml: &str) -> Vec<Vec<String>> {
        xml.split("<w:tr")
            .skip(1)
            .filter(|chunk| chunk.starts_with('>') || chunk.starts_with(' '))
            .map(|chunk| text_runs(chunk.split("</w:tr>").next().unwrap()))
            .collect()
    }

    /// Rubric rows as number followed by the four band cells.
    fn rubric_cells(xml: &str) -> Vec<Vec<String>> {
        table_rows(xml)
            .into_iter()
            .filter(|row| row.iter().any(|t| t == "☑"))
            .map(|row| {
                let bands = row[row.len() - 4..].to_vec();
                std::iter::once(row[0].clone()).chain(bands).collect()
            })
            .collect()
    }

    fn expected_row(number: &str, marks: [&str; 4]) -> Vec<String> {
        std::iter::once(number)
            .chain(marks)
            .map(String::from)
            .collect()
    }

    #[test]
    fn document_carries_header_lines() {
        let xml = render_sample();
        assert!(xml.contains("FORM EVALUASI KINERJA GURU"));
        assert!(xml.contains("SMP PENIDA KATAPANG"));
        assert!(xml.contains("TAHUN AKADEMIK 2024/2025"));
        assert!(xml.contains("Dr. H. Asep Suryadi, M.Pd"));
        assert!(xml.contains("15 Januari 2025"));
    }

    #[test]
    fn document_has_both_teacher_sections_in_order() {
        let xml = render_sample();
        let first = xml.find("EVALUASI GURU 1").unwrap();
        let second = xml.find("EVALUASI GURU 2").unwrap();
        assert!(first < second);
        assert!(xml.contains("196805121990031005"));
        assert!(xml.contains("197203151998022003"));
        assert!(xml.contains("IPA (Ilmu Pengetahuan Alam)"));
        assert!(xml.contains("VII C, VIII B, IX A"));
    }

    #[test]
    fn document_ticks_one_band_per_criterion() {
        let xml = render_sample();
        assert_eq!(xml.matches('☑').count(), 10);
        assert_eq!(xml.matches('□').count(), 30);
    }

    #[test]
    fn document_ticks_the_recorded_band_column() {
        const SB: [&str; 4] = ["☑", "□", "□", "□"];
        const B: [&str; 4] = ["□", "☑", "□", "□"];

        let rows = rubric_cells(&render_sample());

        assert_eq!(
            rows,
            vec![
                // Budi Santoso
                expected_row("1", B),
                expected_row("2", SB),
                expected_row("3", SB),
                expected_row("4", B),
                expected_row("5", B),
                // Siti Nurhaliza
                expected_row("1", SB),
                expected_row("2", B),
                expected_row("3", B),
                expected_row("4", B),
                expected_row("5", SB),
            ]
        );
    }

    #[test]
    fn rubric_header_lists_bands_from_best_to_worst() {
        let xml = render_sample();
        let header = table_rows(&xml)
            .into_iter()
            .find(|row| row.first().map(String::as_str) == Some("No"))
            .unwrap();

        assert_eq!(
            &header[..5],
            &["No", "Kriteria Evaluasi", "Sangat Baik (90-100)", "Baik (80-89)", "Cukup (70-79)"]
        );
    }

    #[test]
    fn heading_style_is_a_bold_outline_level() {
        let styles = render_part("word/styles.xml");
        let start = styles.find(r#"w:styleId="Heading1""#).unwrap();
        let heading = &styles[start..];
        let heading = &heading[..heading.find("</w:style>").unwrap()];

        assert!(heading.contains(r#"<w:outlineLvl w:val="0""#));
        assert!(heading.contains("<w:b "));
    }

    #[test]
    fn document_prints_totals_with_one_decimal() {
        let xml = render_sample();
        assert!(xml.contains("TOTAL NILAI AHP"));
        assert!(xml.contains(">87.0<"));
        assert!(xml.contains(">86.0<"));
    }

    #[test]
    fn document_breaks_page_between_sections() {
        let xml = render_sample();
        assert_eq!(xml.matches(r#"w:type="page""#).count(), 1);
    }

    #[test]
    fn document_ends_with_signatures() {
        let xml = render_sample();
        let last_section = xml.find("EVALUASI GURU 2").unwrap();
        let signature = xml.rfind("(Dr. H. Asep Suryadi, M.Pd)").unwrap();
        assert!(signature > last_section);
        assert_eq!(xml.matches("(Dr. H. Asep Suryadi, M.Pd)").count(), 2);
    }

    #[test]
    fn render_rejects_form_without_sections() {
        let mut form = sample::evaluation_form().unwrap();
        form.sections.clear();

        let result = DocxFormRenderer::new().render(&form);

        assert!(matches!(result, Err(RenderError::InvalidInput(_))));
    }
}
