//! Element implementations built on top of `genpdf` primitives.
//!
//! The header and section blocks of the research document are composed here.  Line wrapping and
//! page breaking stay with `genpdf`; these elements only stack paragraphs and reserve the fixed
//! gaps between them.

use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::error::Error;
use genpdf::style::{Style, StyledString};
use genpdf::{render, Alignment, Element, Margins, Mm, Position, RenderResult, Size};

use crate::model::Section;

/// Converts a millimetre value into a `genpdf` length.
pub fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Builds the centered page header followed by an empty gap of `gap_mm`.
pub fn page_header(text: &str, font_size: u8, gap_mm: f64) -> PaddedElement<Paragraph> {
    let style = Style::new().bold().with_font_size(font_size);
    Paragraph::new(StyledString::new(text.to_owned(), style))
        .aligned(Alignment::Center)
        .padded(Margins::trbl(0, 0, mm_from_f64(gap_mm), 0))
}

/// A section heading stacked on top of its word-wrapped body.
///
/// When the body does not fit on the current page the element reports `has_more` and continues
/// with the remaining lines on the next page.  The heading is only printed once.
pub struct SectionBlock {
    heading: Paragraph,
    body: Paragraph,
    heading_gap: Mm,
    trailing_gap: Mm,
    heading_done: bool,
}

impl SectionBlock {
    /// Creates the block for `section` with the given heading and body font sizes.
    pub fn new(section: &Section, heading_size: u8, body_size: u8) -> Self {
        let heading_style = Style::new().bold().with_font_size(heading_size);
        let body_style = Style::new().with_font_size(body_size);

        Self {
            heading: Paragraph::new(StyledString::new(section.heading(), heading_style)),
            body: Paragraph::new(StyledString::new(section.body().to_owned(), body_style)),
            heading_gap: Mm::default(),
            trailing_gap: Mm::default(),
            heading_done: false,
        }
    }

    /// Sets the space between the heading and the body.
    pub fn with_heading_gap(mut self, gap: Mm) -> Self {
        self.heading_gap = gap;
        self
    }

    /// Sets the space left below the body once it has been printed completely.
    pub fn with_trailing_gap(mut self, gap: Mm) -> Self {
        self.trailing_gap = gap;
        self
    }
}

impl Element for SectionBlock {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();

        if !self.heading_done {
            let heading = self.heading.render(context, area.clone(), style)?;
            if heading.has_more {
                result.size = heading.size;
                result.has_more = true;
                return Ok(result);
            }
            self.heading_done = true;

            result.size = result.size.stack_vertical(heading.size);
            if mm_to_f64(self.heading_gap) > 0.0 {
                result.size = result
                    .size
                    .stack_vertical(Size::new(0, self.heading_gap));
            }
            area.add_offset(Position::new(0, heading.size.height + self.heading_gap));
        }

        let body = self.body.render(context, area, style)?;
        result.size = result.size.stack_vertical(body.size);
        result.has_more = body.has_more;

        if !body.has_more && mm_to_f64(self.trailing_gap) > 0.0 {
            result.size = result
                .size
                .stack_vertical(Size::new(0, self.trailing_gap));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{mm_from_f64, mm_to_f64};

    #[test]
    fn millimetre_conversion_is_lossless() {
        for value in [0.0, 5.0, 8.0, 10.5, 297.0] {
            assert_eq!(mm_to_f64(mm_from_f64(value)), value);
        }
    }
}
