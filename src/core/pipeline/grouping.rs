//! Grouping page records by document.

use std::collections::BTreeMap;

use crate::core::types::PageRecord;

/// A page record together with the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// File name inside the input directory
    pub file_name: String,
    pub record: PageRecord,
}

/// Group pages by `document_id`, each group sorted by page number.
///
/// The sort is stable, so pages sharing a page number (including
/// the default 0) keep the order they were loaded in. Documents are
/// keyed in lexical order.
pub fn group_by_document(pages: Vec<LoadedPage>) -> BTreeMap<String, Vec<LoadedPage>> {
    let mut documents: BTreeMap<String, Vec<LoadedPage>> = BTreeMap::new();

    for page in pages {
        documents
            .entry(page.record.document_id.clone())
            .or_default()
            .push(page);
    }

    for pages in documents.values_mut() {
        pages.sort_by(|a, b| a.record.page_number.total_cmp(&b.record.page_number));
    }

    documents
}
