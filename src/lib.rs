//! Renders the fictional ChronoGrid internal research document to PDF.

pub mod builder;
pub mod content;
pub mod elements;
pub mod fonts;
pub mod model;

pub use content::run;
