//! Cell formats shared by all evaluation sheets.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

/// Fill behind column headers.
pub const HEADER_FILL: u32 = 0x4472C4;

/// Fill behind matrix row labels.
pub const SUBHEADER_FILL: u32 = 0xD9E2F3;

/// Number format for weights, matrix values and scores.
pub const DECIMAL_FORMAT: &str = "0.00";

/// Bold centred title line.
pub fn title(size: f64) -> Format {
    Format::new()
        .set_bold()
        .set_font_size(size)
        .set_align(FormatAlign::Center)
}

/// White bold text on the header fill, bordered and centred.
pub fn header() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

/// Empty top-left cell of the comparison matrix.
pub fn corner() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

/// Bold row label on the sub-header fill.
pub fn row_label() -> Format {
    corner()
        .set_background_color(Color::RGB(SUBHEADER_FILL))
        .set_pattern(FormatPattern::Solid)
}

/// Bordered body cell with the given horizontal alignment.
pub fn body(align: FormatAlign) -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(align)
        .set_align(FormatAlign::VerticalCenter)
}

/// Bordered two-decimal number cell.
pub fn decimal(align: FormatAlign) -> Format {
    body(align).set_num_format(DECIMAL_FORMAT)
}

/// Italic explanatory note.
pub fn note() -> Format {
    Format::new().set_italic()
}
