//! Section assembly
//!
//! The report layout is fixed: a title, then nine sections in an order that
//! never varies with input. The layout is data, not control flow, so the
//! sequence can be inspected and tested on its own.

use crate::models::AnalysisRecord;

/// Top-level document title.
pub const DOC_TITLE: &str = "💖 Love Lens: Relationship Insight";

/// Disclaimer shown before any analysis content. Never derived from input.
pub const NOTE_TO_READER: &str = "This is a third-party relationship reflection \
based on real conversations. The goal? Clarity. All emotional tones are \
preserved as they were sent. We're not assigning blame—just holding up a \
mirror to the emotional patterns at play.";

/// Body of the Visual Insights section. Chart rendering is not implemented;
/// this placeholder goes out regardless of input content.
pub const CHART_PLACEHOLDER: &str = "Charts would be generated and inserted here.";

type FieldAccessor = for<'a> fn(&'a AnalysisRecord) -> &'a str;

/// One entry in the fixed report layout.
pub enum SectionSpec {
    /// Heading plus a hard-coded body paragraph.
    Fixed {
        heading: &'static str,
        body: &'static str,
    },
    /// Heading plus the matching record field, carried verbatim.
    Field {
        heading: &'static str,
        value: FieldAccessor,
    },
}

/// The report layout. Order here is the order in the rendered document.
pub const SECTIONS: [SectionSpec; 9] = [
    SectionSpec::Fixed {
        heading: "Note to Reader",
        body: NOTE_TO_READER,
    },
    SectionSpec::Field {
        heading: "💬 Communication Styles & Emotional Tone",
        value: |record| &record.communication_styles,
    },
    SectionSpec::Field {
        heading: "🔁 Recurring Patterns Identified",
        value: |record| &record.recurring_patterns,
    },
    SectionSpec::Field {
        heading: "🧠 Reflective Frameworks",
        value: |record| &record.reflective_frameworks,
    },
    SectionSpec::Field {
        heading: "🚧 What's Getting in the Way",
        value: |record| &record.getting_in_the_way,
    },
    SectionSpec::Field {
        heading: "🌱 Constructive Feedback",
        value: |record| &record.constructive_feedback,
    },
    SectionSpec::Fixed {
        heading: "📊 Visual Insights",
        body: CHART_PLACEHOLDER,
    },
    SectionSpec::Field {
        heading: "🔮 Outlook",
        value: |record| &record.outlook,
    },
    SectionSpec::Field {
        heading: "📎 Optional Appendix",
        value: |record| &record.optional_appendix,
    },
];

/// A flattened, renderer-ready document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading, rendered with the Heading1 paragraph style.
    Heading(String),
    /// Body text, one paragraph per block.
    Paragraph(String),
}

/// Build the report for one analysis record.
///
/// Pure and infallible: every failure mode was ruled out when the record was
/// validated, so the builder is a straight mapping from record to layout.
pub fn build_document(record: &AnalysisRecord) -> Document {
    let mut blocks = Vec::with_capacity(SECTIONS.len() * 2);
    for section in &SECTIONS {
        match section {
            SectionSpec::Fixed { heading, body } => {
                blocks.push(Block::Heading((*heading).to_owned()));
                blocks.push(Block::Paragraph((*body).to_owned()));
            }
            SectionSpec::Field { heading, value } => {
                blocks.push(Block::Heading((*heading).to_owned()));
                blocks.push(Block::Paragraph(value(record).to_owned()));
            }
        }
    }

    Document {
        title: DOC_TITLE.to_owned(),
        blocks,
    }
}
