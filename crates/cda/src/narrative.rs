//! Section narrative (wire model).
//!
//! The human-readable part of a section: an ordered list of paragraphs, lists and tables.

use serde::{Deserialize, Serialize};

/// Narrative block of a section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Narrative {
    pub blocks: Vec<NarrativeBlock>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NarrativeBlock {
    Paragraph {
        text: String,
    },
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        items: Vec<String>,
    },
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl Narrative {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(NarrativeBlock::Paragraph { text: text.into() });
        self
    }

    pub fn list(mut self, caption: Option<&str>, items: Vec<String>) -> Self {
        self.blocks.push(NarrativeBlock::List {
            caption: caption.map(str::to_string),
            items,
        });
        self
    }

    pub fn table(mut self, caption: Option<&str>, header: &[&str], rows: Vec<Vec<String>>) -> Self {
        self.blocks.push(NarrativeBlock::Table {
            caption: caption.map(str::to_string),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Flattens the narrative into plain text, one line per paragraph, list item or table row.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                NarrativeBlock::Paragraph { text } => lines.push(text.clone()),
                NarrativeBlock::List { caption, items } => {
                    lines.extend(caption.iter().cloned());
                    lines.extend(items.iter().map(|item| format!("- {item}")));
                }
                NarrativeBlock::Table {
                    caption,
                    header,
                    rows,
                } => {
                    lines.extend(caption.iter().cloned());
                    lines.push(header.join(" | "));
                    lines.extend(rows.iter().map(|row| row.join(" | ")));
                }
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_blocks_in_order() {
        let narrative = Narrative::new()
            .paragraph("Reason for referral: chest pain")
            .list(Some("Manifestations"), vec!["Rash".into(), "Wheeze".into()])
            .table(
                None,
                &["Medicine", "Directions"],
                vec![vec!["Amoxicillin 500 mg".into(), "1 capsule tds".into()]],
            );

        assert_eq!(
            narrative.plain_text(),
            "Reason for referral: chest pain\nManifestations\n- Rash\n- Wheeze\nMedicine | Directions\nAmoxicillin 500 mg | 1 capsule tds"
        );
    }

    #[test]
    fn blocks_serialise_with_type_tag() {
        let narrative = Narrative::new().paragraph("No known allergies");
        let yaml = serde_yaml::to_string(&narrative).expect("serialise");
        assert!(yaml.contains("type: paragraph"));
        let back: Narrative = serde_yaml::from_str(&yaml).expect("deserialise");
        assert_eq!(back, narrative);
    }
}
