//! Document construction for the research document.

use std::cell::Cell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use genpdf::style;
use genpdf::{self, Element, Margins, PageDecorator, PaperSize, Position, Size};
use log::{debug, info};

use crate::elements::{self, mm_from_f64, SectionBlock};
use crate::fonts;
use crate::model::{self, Section};

/// Page geometry and typography applied when rendering.
///
/// The defaults reproduce the classic report layout: A4 paper with 10 mm margins and a 20 mm
/// bottom margin reserved for the automatic page break.
#[derive(Clone, Copy, Debug)]
pub struct DocumentLayout {
    /// Paper size of every page.
    pub paper_size: Size,
    /// Printable area margins.
    pub margins: Margins,
    /// Font size of the page header in points.
    pub header_font_size: u8,
    /// Space below the page header in millimetres.
    pub header_gap_mm: f64,
    /// Font size of section headings in points.
    pub heading_font_size: u8,
    /// Space between a section heading and its body in millimetres.
    pub heading_gap_mm: f64,
    /// Font size of body text in points.
    pub body_font_size: u8,
    /// Space after each section body in millimetres.
    pub section_gap_mm: f64,
    /// Line spacing factor applied to all text.
    pub line_spacing: f64,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4.into(),
            margins: Margins::trbl(10, 10, 20, 10),
            header_font_size: 16,
            header_gap_mm: 10.0,
            heading_font_size: 14,
            heading_gap_mm: 5.0,
            body_font_size: 12,
            section_gap_mm: 8.0,
            line_spacing: 1.5,
        }
    }
}

/// Errors raised while building or writing the document.
#[derive(Debug)]
pub enum DocumentError {
    /// No usable fonts could be loaded.
    FontLoad(genpdf::error::Error),
    /// A section ordinal does not match its position in the document.
    SectionOrder {
        /// Ordinal implied by the section's position.
        expected: u32,
        /// Ordinal carried by the section.
        found: u32,
    },
    /// Layout or serialization inside `genpdf` failed.
    Render(genpdf::error::Error),
    /// The rendered document could not be written to disk.
    Io {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to load fonts: {}", err),
            Self::SectionOrder { expected, found } => write!(
                f,
                "Section numbered {} found where section {} was expected",
                found, expected
            ),
            Self::Render(err) => write!(f, "Failed to render PDF: {}", err),
            Self::Io { path, .. } => write!(f, "Failed to write {}", path.display()),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::SectionOrder { .. } => None,
        }
    }
}

impl From<model::OrdinalMismatch> for DocumentError {
    fn from(mismatch: model::OrdinalMismatch) -> Self {
        Self::SectionOrder {
            expected: mismatch.expected,
            found: mismatch.found,
        }
    }
}

/// Output of a successful render.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// The serialized PDF document.
    pub bytes: Vec<u8>,
    /// Number of pages produced.
    pub page_count: usize,
}

/// Collects the header and sections of a document and renders them through `genpdf`.
///
/// Rendering consumes the builder, so no section can be appended once output exists.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    header: Option<String>,
    title: Option<String>,
    sections: Vec<Section>,
    layout: DocumentLayout,
}

impl DocumentBuilder {
    /// Creates an empty builder using the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text printed at the top of every page, the first one included.
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Sets the PDF title metadata. Defaults to the header text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the page layout.
    pub fn with_layout(mut self, layout: DocumentLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Appends a section after the ones already added.
    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Returns the configured header text, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Returns the sections in rendering order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the active layout.
    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    fn build(self, pages: Rc<Cell<usize>>) -> Result<genpdf::Document, DocumentError> {
        model::check_ordinals(&self.sections)?;

        let font_family = fonts::default_font_family().map_err(DocumentError::FontLoad)?;
        let mut document = genpdf::Document::new(font_family);
        let layout = self.layout;

        document.set_paper_size(layout.paper_size);
        document.set_font_size(layout.body_font_size);
        document.set_line_spacing(layout.line_spacing);
        document.set_minimal_conformance();
        if let Some(title) = self.title.as_ref().or(self.header.as_ref()) {
            document.set_title(title.clone());
        }

        let header = self.header.map(|text| {
            Box::new(move |_page: usize| {
                Box::new(elements::page_header(
                    &text,
                    layout.header_font_size,
                    layout.header_gap_mm,
                )) as Box<dyn Element>
            }) as Box<HeaderFactory>
        });
        document.set_page_decorator(HeaderDecorator::new(layout.margins, header, pages));

        for section in &self.sections {
            debug!("Adding {}", section.heading());
            document.push(
                SectionBlock::new(section, layout.heading_font_size, layout.body_font_size)
                    .with_heading_gap(mm_from_f64(layout.heading_gap_mm))
                    .with_trailing_gap(mm_from_f64(layout.section_gap_mm)),
            );
        }

        Ok(document)
    }

    /// Renders the document into memory.
    pub fn render(self) -> Result<RenderedPdf, DocumentError> {
        let pages = Rc::new(Cell::new(0));
        let document = self.build(Rc::clone(&pages))?;

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(DocumentError::Render)?;

        let page_count = pages.get();
        info!("Rendered {} page(s), {} bytes", page_count, bytes.len());
        Ok(RenderedPdf { bytes, page_count })
    }

    /// Renders the document and writes it to `path`, replacing any existing file.
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn render_to_file(self, path: impl AsRef<Path>) -> Result<RenderedPdf, DocumentError> {
        let path = path.as_ref();
        let pdf = self.render()?;
        fs::write(path, &pdf.bytes).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {}", path.display());
        Ok(pdf)
    }
}

type HeaderFactory = dyn Fn(usize) -> Box<dyn Element>;

/// Applies the margins and prints the header at the top of each new page.
struct HeaderDecorator {
    pages: Rc<Cell<usize>>,
    margins: Margins,
    header: Option<Box<HeaderFactory>>,
}

impl HeaderDecorator {
    fn new(margins: Margins, header: Option<Box<HeaderFactory>>, pages: Rc<Cell<usize>>) -> Self {
        Self {
            pages,
            margins,
            header,
        }
    }
}

impl PageDecorator for HeaderDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, genpdf::error::Error> {
        let page = self.pages.get() + 1;
        self.pages.set(page);
        debug!("Decorating page {}", page);

        area.add_margins(self.margins);

        if let Some(header_cb) = &self.header {
            let mut element = header_cb(page);
            let result = element.render(context, area.clone(), style)?;
            area.add_offset(Position::new(0, result.size.height));
        }

        Ok(area)
    }
}
