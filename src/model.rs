//! Data structures describing the logical content of the research document.
//!
//! The types in this module are plain values that do not reference `genpdf`, so the content can
//! be assembled and checked without loading fonts or rendering anything.

/// Logical representation of a numbered document section.
///
/// A section is rendered as a bold heading of the form `Section {ordinal}: {title}` followed by
/// the word-wrapped body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    ordinal: u32,
    title: String,
    body: String,
}

impl Section {
    /// Creates a new section with the provided 1-based ordinal, title and body.
    pub fn new(ordinal: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            ordinal,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the 1-based position of the section in the document.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Returns the title of the section.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text of the section.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the heading line printed above the body.
    pub fn heading(&self) -> String {
        format!("Section {}: {}", self.ordinal, self.title)
    }
}

/// An ordinal that does not match the position of its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrdinalMismatch {
    /// Ordinal implied by the section's position.
    pub expected: u32,
    /// Ordinal the section actually carries.
    pub found: u32,
}

/// Checks that the sections are numbered `1..=n` in order.
pub fn check_ordinals(sections: &[Section]) -> Result<(), OrdinalMismatch> {
    for (expected, section) in (1u32..).zip(sections) {
        if section.ordinal() != expected {
            return Err(OrdinalMismatch {
                expected,
                found: section.ordinal(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_ordinals, OrdinalMismatch, Section};

    #[test]
    fn heading_includes_ordinal_and_title() {
        let section = Section::new(3, "Chrono Drift Phenomenon", "body");
        assert_eq!(section.heading(), "Section 3: Chrono Drift Phenomenon");
    }

    #[test]
    fn sequential_ordinals_are_accepted() {
        let sections = vec![
            Section::new(1, "One", "a"),
            Section::new(2, "Two", "b"),
            Section::new(3, "Three", "c"),
        ];
        assert_eq!(check_ordinals(&sections), Ok(()));
        assert_eq!(check_ordinals(&[]), Ok(()));
    }

    #[test]
    fn gaps_and_reordering_are_rejected() {
        let gap = vec![Section::new(1, "One", "a"), Section::new(3, "Three", "c")];
        assert_eq!(
            check_ordinals(&gap),
            Err(OrdinalMismatch {
                expected: 2,
                found: 3
            })
        );

        let zero_based = vec![Section::new(0, "Zero", "a")];
        assert_eq!(
            check_ordinals(&zero_based),
            Err(OrdinalMismatch {
                expected: 1,
                found: 0
            })
        );
    }
}
