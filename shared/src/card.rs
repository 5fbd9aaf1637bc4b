use crate::SourceDoc;

/// Display form of one retrieved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCard {
    pub file_name: String,
    pub page_label: Option<String>,
    pub excerpt: String,
}

impl SourceCard {
    /// `Source: <file>` followed by the page label, if any.
    pub fn heading(&self) -> String {
        match &self.page_label {
            Some(label) => format!("Source: {} {}", self.file_name, label),
            None => format!("Source: {}", self.file_name),
        }
    }
}

impl From<&SourceDoc> for SourceCard {
    fn from(doc: &SourceDoc) -> Self {
        Self {
            file_name: file_name(&doc.metadata.source).to_owned(),
            page_label: doc.metadata.page.map(page_label),
            excerpt: doc.page_content.clone(),
        }
    }
}

/// Last path segment, accepting both `/` and `\` separators.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Labels are 1-based while loaders number pages from zero.
pub fn page_label(page: u64) -> String {
    format!("(Page {})", page.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceMetadata;

    fn doc(source: &str, page: Option<u64>) -> SourceDoc {
        SourceDoc {
            page_content: "text".to_owned(),
            metadata: SourceMetadata {
                source: source.to_owned(),
                page,
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn file_name_handles_both_separators() {
        assert_eq!(file_name("/a/b/doc.pdf"), "doc.pdf");
        assert_eq!(file_name(r"C:\texts\meditations.txt"), "meditations.txt");
        assert_eq!(file_name(r"spiritual_database/mixed\apology.pdf"), "apology.pdf");
        assert_eq!(file_name("plain.txt"), "plain.txt");
        assert_eq!(file_name("dir/"), "");
    }

    #[test]
    fn card_from_paged_source() {
        let card = SourceCard::from(&doc("/a/b/doc.pdf", Some(2)));

        assert_eq!(card.file_name, "doc.pdf");
        assert_eq!(card.page_label.as_deref(), Some("(Page 3)"));
        assert_eq!(card.excerpt, "text");
        assert_eq!(card.heading(), "Source: doc.pdf (Page 3)");
    }

    #[test]
    fn first_page_still_gets_a_label() {
        let card = SourceCard::from(&doc("republic.pdf", Some(0)));

        assert_eq!(card.heading(), "Source: republic.pdf (Page 1)");
    }

    #[test]
    fn unpaged_source_has_no_label() {
        let card = SourceCard::from(&doc("notes/ethics.txt", None));

        assert_eq!(card.page_label, None);
        assert_eq!(card.heading(), "Source: ethics.txt");
    }
}
