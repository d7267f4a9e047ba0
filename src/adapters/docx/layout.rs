//! Units, fonts and small paragraph builders for the evaluation form.

use docx_rs::{
    AlignmentType, BreakType, Paragraph, Run, RunFonts, TableCell, VAlignType, WidthType,
};

/// Twentieths of a point per inch.
const TWIPS_PER_INCH: usize = 1440;

pub const FONT_FAMILY: &str = "Arial";

/// Page margin on every side, 2 cm in twips.
pub const PAGE_MARGIN: i32 = 1134;

/// Info table columns: label, colon, value, spare. 2in / 0.3in / 2.5in / 2.5in.
pub const INFO_COLUMNS: [usize; 4] = [
    2 * TWIPS_PER_INCH,
    3 * TWIPS_PER_INCH / 10,
    5 * TWIPS_PER_INCH / 2,
    5 * TWIPS_PER_INCH / 2,
];

/// Converts points to the half-point unit docx uses for font sizes.
pub const fn half_points(points: usize) -> usize {
    points * 2
}

pub fn arial() -> RunFonts {
    RunFonts::new().ascii(FONT_FAMILY).hi_ansi(FONT_FAMILY)
}

/// A single run of text in the given point size.
pub fn text(value: &str, points: usize) -> Run {
    Run::new().add_text(value).size(half_points(points))
}

/// A single Arial run in the given point size.
pub fn arial_text(value: &str, points: usize) -> Run {
    text(value, points).fonts(arial())
}

/// Title followed by a line break and detail, as one run.
pub fn two_line_text(title: &str, detail: &str, points: usize) -> Run {
    Run::new()
        .add_text(title)
        .add_break(BreakType::TextWrapping)
        .add_text(detail)
        .size(half_points(points))
}

pub fn centered(run: Run) -> Paragraph {
    Paragraph::new().add_run(run).align(AlignmentType::Center)
}

pub fn blank_line() -> Paragraph {
    Paragraph::new()
}

pub fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

/// Vertically centred cell holding one paragraph.
pub fn cell(paragraph: Paragraph) -> TableCell {
    TableCell::new()
        .add_paragraph(paragraph)
        .vertical_align(VAlignType::Center)
}

/// Vertically centred cell with a fixed width.
pub fn sized_cell(paragraph: Paragraph, width: usize) -> TableCell {
    cell(paragraph).width(width, WidthType::Dxa)
}
