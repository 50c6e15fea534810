//! Documents command - lists the knowledge store

use clap::Args;

use super::GlobalArgs;
use crate::domain::{Category, Document};

#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Only show documents of this category
    #[arg(long)]
    pub category: Option<Category>,
}

pub fn run(global: &GlobalArgs, args: DocumentsArgs) -> anyhow::Result<()> {
    let config = super::bootstrap(global)?;
    let resolver = crate::create_resolver(&config)?;

    for doc in filter_documents(resolver.store().documents(), args.category) {
        println!("{}", format_row(doc));
    }

    Ok(())
}

fn filter_documents(documents: &[Document], category: Option<Category>) -> Vec<&Document> {
    documents
        .iter()
        .filter(|doc| category.is_none_or(|c| doc.category() == c))
        .collect()
}

fn format_row(doc: &Document) -> String {
    format!("{:<6} {:<13} {}", doc.id(), doc.category(), doc.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KnowledgeStore;

    #[test]
    fn test_filter_by_category() {
        let store = KnowledgeStore::admissions();

        let fees = filter_documents(store.documents(), Some(Category::Fees));
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].id(), "3");

        assert_eq!(filter_documents(store.documents(), None).len(), 5);
        assert!(filter_documents(store.documents(), Some(Category::General)).is_empty());
    }

    #[test]
    fn test_format_row() {
        let doc = Document::new("3", "Fee Structure", "...", Category::Fees);
        assert_eq!(format_row(&doc), "3      fees          Fee Structure");
    }
}
