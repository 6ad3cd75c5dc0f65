//! Fixed structure analysis of the embedded page
//!
//! The report describes class names that are visible in the markup. Nothing
//! here reads the markup; the wording was authored once and never changes.

use std::fmt;
use std::io::Write;

use crate::error::ReportError;

/// The structure analysis, section by section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: &'static str,
    pub underline: &'static str,
    pub summary_heading: &'static str,
    /// Numbered structural facts
    pub facts: [&'static str; 4],
    pub key_elements_heading: &'static str,
    /// Bulleted parallax layers
    pub key_elements: [&'static str; 6],
}

impl Report {
    /// The analysis printed for the scroll lock page
    pub fn structure_analysis() -> Self {
        Self {
            header: "HTML Structure Analysis:",
            underline: "======================",
            summary_heading: "The HTML contains:",
            facts: [
                "1. Starry background with multiple layers (stars1, stars2, stars3, twinkling, nebula)",
                "2. Header with title and subtitle",
                "3. Three main sections with text and images",
                "4. Existing classes that suggest parallax layers",
            ],
            key_elements_heading: "Key elements for parallax:",
            key_elements: [
                "- .starry-background container",
                "- .stars (stars1, stars2, stars3)",
                "- .twinkling",
                "- .nebula",
                "- Section content divs",
                "- Images (IT Crowd GIF, space-goat.jpg)",
            ],
        }
    }

    /// All lines in output order; the separating blank line is `""`
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.header, self.underline, self.summary_heading]
            .into_iter()
            .chain(self.facts)
            .chain(["", self.key_elements_heading])
            .chain(self.key_elements)
    }

    /// Write every line, newline-terminated, then flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::structure_analysis()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
