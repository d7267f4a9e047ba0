//! rust_xlsxwriter based workbook renderer.
//!
//! Lays the evaluation dataset out over four sheets:
//!
//! | Sheet | Content |
//! |---|---|
//! | `Kriteria AHP` | titles, criteria table, notes |
//! | `Matriks Perbandingan` | pairwise comparison matrix |
//! | `Hasil Evaluasi` | per-teacher criterion scores and AHP value |
//! | `Ranking` | ranking, category and recommendation |
//!
//! Rows and columns below are zero-based.

use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, Worksheet, XlsxError};

use super::styles;
use crate::domain::evaluation::EvaluationDataset;
use crate::ports::{RenderError, SpreadsheetRenderer};

/// Sheet names in workbook order.
pub const SHEET_NAMES: [&str; 4] = [
    "Kriteria AHP",
    "Matriks Perbandingan",
    "Hasil Evaluasi",
    "Ranking",
];

const CRITERIA_LAST_COL: ColNum = 7;
const CRITERIA_HEADER_ROW: RowNum = 4;
const CRITERIA_HEADERS: [&str; 4] = ["Kode", "Kriteria", "Deskripsi", "Bobot AHP"];
const CRITERIA_WIDTHS: [f64; 4] = [8.0, 20.0, 50.0, 12.0];
/// Row offset from the last criterion to the first note.
const NOTES_GAP: RowNum = 3;

const MATRIX_LAST_COL: ColNum = 6;
const MATRIX_HEADER_ROW: RowNum = 2;

const EVALUATION_LAST_COL: ColNum = 8;
const EVALUATION_HEADER_ROW: RowNum = 3;
const EVALUATION_WIDTHS: [f64; 9] = [5.0, 20.0, 15.0, 12.0, 15.0, 12.0, 12.0, 18.0, 12.0];

const RANKING_LAST_COL: ColNum = 5;
const RANKING_HEADER_ROW: RowNum = 3;
const RANKING_HEADERS: [&str; 5] = ["Ranking", "Nama Guru", "Nilai AHP", "Kategori", "Rekomendasi"];
const RANKING_WIDTHS: [f64; 5] = [10.0, 20.0, 12.0, 15.0, 40.0];

/// Renders the evaluation dataset into an `.xlsx` workbook.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = XlsxWorkbookRenderer::new();
/// let bytes = renderer.render(&dataset)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct XlsxWorkbookRenderer;

impl XlsxWorkbookRenderer {
    /// Create a new workbook renderer.
    pub fn new() -> Self {
        Self
    }

    fn check_shape(dataset: &EvaluationDataset) -> Result<(), RenderError> {
        let criteria = dataset.criteria.len();
        if dataset.matrix.size() != criteria {
            return Err(RenderError::invalid_input(format!(
                "matrix has {} rows for {} criteria",
                dataset.matrix.size(),
                criteria
            )));
        }
        if let Some(row) = dataset
            .evaluations
            .iter()
            .find(|e| e.criterion_scores.len() != criteria)
        {
            return Err(RenderError::invalid_input(format!(
                "{} has {} criterion scores for {} criteria",
                row.name,
                row.criterion_scores.len(),
                criteria
            )));
        }
        Ok(())
    }

    fn build(dataset: &EvaluationDataset) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();

        write_criteria_sheet(workbook.add_worksheet().set_name(SHEET_NAMES[0])?, dataset)?;
        write_matrix_sheet(workbook.add_worksheet().set_name(SHEET_NAMES[1])?, dataset)?;
        write_evaluation_sheet(workbook.add_worksheet().set_name(SHEET_NAMES[2])?, dataset)?;
        write_ranking_sheet(workbook.add_worksheet().set_name(SHEET_NAMES[3])?, dataset)?;

        Ok(workbook)
    }
}

impl SpreadsheetRenderer for XlsxWorkbookRenderer {
    fn render(&self, dataset: &EvaluationDataset) -> Result<Vec<u8>, RenderError> {
        Self::check_shape(dataset)?;
        let mut workbook = Self::build(dataset).map_err(RenderError::workbook)?;
        workbook.save_to_buffer().map_err(RenderError::workbook)
    }
}

fn write_titles(
    sheet: &mut Worksheet,
    titles: &[String],
    last_col: ColNum,
    format: &Format,
) -> Result<(), XlsxError> {
    for (row, title) in titles.iter().enumerate() {
        let row = row as RowNum;
        sheet.merge_range(row, 0, row, last_col, title, format)?;
    }
    Ok(())
}

fn write_header<S: AsRef<str>>(
    sheet: &mut Worksheet,
    row: RowNum,
    first_col: ColNum,
    headers: &[S],
) -> Result<(), XlsxError> {
    let format = styles::header();
    for (idx, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(row, first_col + idx as ColNum, header.as_ref(), &format)?;
    }
    Ok(())
}

fn set_widths(sheet: &mut Worksheet, widths: &[f64]) -> Result<(), XlsxError> {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as ColNum, *width)?;
    }
    Ok(())
}

fn write_criteria_sheet(sheet: &mut Worksheet, dataset: &EvaluationDataset) -> Result<(), XlsxError> {
    write_titles(sheet, &dataset.titles.criteria, CRITERIA_LAST_COL, &styles::title(14.0))?;
    write_header(sheet, CRITERIA_HEADER_ROW, 0, &CRITERIA_HEADERS[..])?;

    let centered = styles::body(FormatAlign::Center);
    let left = styles::body(FormatAlign::Left);
    let weight = styles::decimal(FormatAlign::Left);

    for (idx, criterion) in dataset.criteria.iter().enumerate() {
        let row = CRITERIA_HEADER_ROW + 1 + idx as RowNum;
        sheet.write_string_with_format(row, 0, criterion.code.as_str(), &centered)?;
        sheet.write_string_with_format(row, 1, criterion.name.as_str(), &centered)?;
        sheet.write_string_with_format(row, 2, criterion.description.as_str(), &left)?;
        sheet.write_number_with_format(row, 3, criterion.weight.value(), &weight)?;
    }

    set_widths(sheet, &CRITERIA_WIDTHS)?;

    let note = styles::note();
    let first_note_row = CRITERIA_HEADER_ROW + dataset.criteria.len() as RowNum + NOTES_GAP;
    for (idx, line) in dataset.notes.iter().enumerate() {
        sheet.write_string_with_format(first_note_row + idx as RowNum, 0, line.as_str(), &note)?;
    }

    Ok(())
}

fn write_matrix_sheet(sheet: &mut Worksheet, dataset: &EvaluationDataset) -> Result<(), XlsxError> {
    write_titles(sheet, &dataset.titles.matrix, MATRIX_LAST_COL, &styles::title(12.0))?;

    sheet.write_blank(MATRIX_HEADER_ROW, 0, &styles::corner())?;
    write_header(sheet, MATRIX_HEADER_ROW, 1, dataset.matrix.codes())?;

    let label = styles::row_label();
    let value = styles::decimal(FormatAlign::Center);

    for (idx, (code, values)) in dataset.matrix.rows().enumerate() {
        let row = MATRIX_HEADER_ROW + 1 + idx as RowNum;
        sheet.write_string_with_format(row, 0, code, &label)?;
        for (col, v) in values.iter().enumerate() {
            sheet.write_number_with_format(row, 1 + col as ColNum, *v, &value)?;
        }
    }

    Ok(())
}

fn write_evaluation_sheet(
    sheet: &mut Worksheet,
    dataset: &EvaluationDataset,
) -> Result<(), XlsxError> {
    write_titles(sheet, &dataset.titles.evaluation, EVALUATION_LAST_COL, &styles::title(12.0))?;

    let mut headers = vec!["No", "Nama Guru", "Mata Pelajaran"];
    headers.extend(dataset.criterion_names());
    headers.push("Nilai AHP");
    write_header(sheet, EVALUATION_HEADER_ROW, 0, headers.as_slice())?;

    let centered = styles::body(FormatAlign::Center);
    let score = styles::decimal(FormatAlign::Right);

    for (idx, evaluation) in dataset.evaluations.iter().enumerate() {
        let row = EVALUATION_HEADER_ROW + 1 + idx as RowNum;
        sheet.write_number_with_format(row, 0, evaluation.number, &centered)?;
        sheet.write_string_with_format(row, 1, evaluation.name.as_str(), &centered)?;
        sheet.write_string_with_format(row, 2, evaluation.subject.as_str(), &centered)?;

        for (offset, criterion_score) in evaluation.criterion_scores.iter().enumerate() {
            sheet.write_number_with_format(row, 3 + offset as ColNum, criterion_score.value(), &score)?;
        }

        let final_col = 3 + evaluation.criterion_scores.len() as ColNum;
        sheet.write_number_with_format(row, final_col, evaluation.final_score.value(), &score)?;
    }

    set_widths(sheet, &EVALUATION_WIDTHS)
}

fn write_ranking_sheet(sheet: &mut Worksheet, dataset: &EvaluationDataset) -> Result<(), XlsxError> {
    write_titles(sheet, &dataset.titles.ranking, RANKING_LAST_COL, &styles::title(12.0))?;
    write_header(sheet, RANKING_HEADER_ROW, 0, &RANKING_HEADERS[..])?;

    let centered = styles::body(FormatAlign::Center);
    let left = styles::body(FormatAlign::Left);
    let score = styles::decimal(FormatAlign::Center);

    for (idx, entry) in dataset.ranking.iter().enumerate() {
        let row = RANKING_HEADER_ROW + 1 + idx as RowNum;
        sheet.write_number_with_format(row, 0, entry.rank, &centered)?;
        sheet.write_string_with_format(row, 1, entry.teacher_name.as_str(), &centered)?;
        sheet.write_number_with_format(row, 2, entry.score.value(), &score)?;
        sheet.write_string_with_format(row, 3, entry.category.label(), &centered)?;
        sheet.write_string_with_format(row, 4, entry.recommendation.as_str(), &left)?;
    }

    set_widths(sheet, &RANKING_WIDTHS)
}
