//! The fixed text of the ChronoGrid internal research document.

use std::path::Path;

use crate::builder::{DocumentBuilder, DocumentError, RenderedPdf};
use crate::model::Section;

/// Text printed at the top of every page.
pub const HEADER_TEXT: &str = "ChronoGrid Systems: Internal Research Document";

/// File name the document is written to, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "chronogrid_internal_document.pdf";

const SECTIONS: [(&str, &str); 6] = [
    (
        "Overview of ChronoGrid Technology",
        "ChronoGrid Systems are experimental computational frameworks designed to store, \
         analyze, and respond to time-dependent information layers. Unlike traditional databases, \
         ChronoGrid engines treat time as a primary data dimension rather than a metadata field.",
    ),
    (
        "Temporal Data Nodes (TDNs)",
        "Temporal Data Nodes, commonly referred to as TDNs, are the core units of ChronoGrid systems. \
         Each TDN contains a snapshot of information bound to a specific temporal state. \
         These nodes can overlap, decay, or reinforce each other based on system configuration.",
    ),
    (
        "Chrono Drift Phenomenon",
        "Chrono Drift occurs when multiple Temporal Data Nodes begin influencing adjacent time layers. \
         This phenomenon may result in predictive echoes, delayed responses, or accelerated recall. \
         Controlled Chrono Drift is considered beneficial for analytical simulations.",
    ),
    (
        "Adaptive Memory Weaving",
        "Adaptive Memory Weaving is a learning technique used by ChronoGrid systems. \
         Instead of retraining entire models, the system weaves new temporal patterns into existing memory threads. \
         This allows rapid adaptation without full system resets.",
    ),
    (
        "Limitations and Risks",
        "ChronoGrid Systems are highly sensitive to inconsistent time references. \
         Improper alignment of Temporal Data Nodes may cause feedback loops or memory collapse. \
         For this reason, ChronoGrid technology is currently restricted to controlled environments.",
    ),
    (
        "Conclusion",
        "Although ChronoGrid Systems remain theoretical, they represent a new direction in temporal computing. \
         Future research may enable practical applications in forecasting, simulation, \
         and adaptive artificial intelligence systems.",
    ),
];

/// Returns the six sections of the research document in order.
pub fn research_sections() -> Vec<Section> {
    (1u32..)
        .zip(SECTIONS)
        .map(|(ordinal, (title, body))| Section::new(ordinal, title, body))
        .collect()
}

/// Returns a builder holding the header and every section of the research document.
pub fn research_document() -> DocumentBuilder {
    research_sections()
        .into_iter()
        .fold(DocumentBuilder::new().with_header(HEADER_TEXT), |builder, section| {
            builder.add_section(section)
        })
}

/// Renders the research document to `path` and prints a confirmation line.
pub fn run(path: impl AsRef<Path>) -> Result<RenderedPdf, DocumentError> {
    let path = path.as_ref();
    let pdf = research_document().render_to_file(path)?;
    println!("Fictional training PDF created: {}", path.display());
    Ok(pdf)
}
