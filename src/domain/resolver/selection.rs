//! Category rules and answer selection

use crate::domain::knowledge_base::{Category, Document};

/// Reply used when no document is relevant to the query
pub const FALLBACK_MESSAGE: &str = "I don't have specific information about that topic. \
    Please ask about eligibility criteria, courses offered, fees, scholarships, or contact information.";

/// Keyword group that routes a query to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// True when any keyword is a substring of the lowercased query
    pub fn matches(&self, query_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| query_lower.contains(keyword))
    }
}

/// Ordered rule table, first match wins
///
/// The order decides queries that hit several groups ("fee scholarship"
/// resolves to fees).
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Eligibility,
        keywords: &["eligibility", "criteria", "requirement"],
    },
    CategoryRule {
        category: Category::Courses,
        keywords: &["course", "program", "branch"],
    },
    CategoryRule {
        category: Category::Fees,
        keywords: &["fee", "cost", "price"],
    },
    CategoryRule {
        category: Category::Scholarships,
        keywords: &["scholarship", "financial aid", "concession"],
    },
    CategoryRule {
        category: Category::Contact,
        keywords: &["contact", "phone", "email", "address"],
    },
];

/// First rule matching the query, if any
pub fn matching_rule(query: &str) -> Option<&'static CategoryRule> {
    let query_lower = query.to_lowercase();
    CATEGORY_RULES.iter().find(|rule| rule.matches(&query_lower))
}

/// Outcome of answer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Nothing was relevant
    Fallback,
    /// A rule matched and a relevant document carries its category
    Categorized {
        category: Category,
        document: &'a Document,
    },
    /// The first relevant document, because no rule matched or the matched
    /// rule's category was absent from the relevant set
    Default {
        document: &'a Document,
        unmatched_rule: Option<Category>,
    },
}

impl<'a> Selection<'a> {
    /// Reply text for this selection
    pub fn answer(&self) -> &'a str {
        match *self {
            Self::Fallback => FALLBACK_MESSAGE,
            Self::Categorized { document, .. } | Self::Default { document, .. } => {
                document.content()
            }
        }
    }
}

/// Pick the answer for `query` among the retrieved documents
pub fn select<'a>(query: &str, relevant: &[&'a Document]) -> Selection<'a> {
    let Some(first) = relevant.first().copied() else {
        return Selection::Fallback;
    };

    match matching_rule(query) {
        Some(rule) => {
            let categorized = relevant
                .iter()
                .copied()
                .find(|doc| doc.category() == rule.category);

            match categorized {
                Some(document) => Selection::Categorized {
                    category: rule.category,
                    document,
                },
                None => Selection::Default {
                    document: first,
                    unmatched_rule: Some(rule.category),
                },
            }
        }
        None => Selection::Default {
            document: first,
            unmatched_rule: None,
        },
    }
}

/// Reply text for `query` among the retrieved documents
pub fn select_answer(query: &str, relevant: &[&Document]) -> String {
    select(query, relevant).answer().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::KnowledgeStore;

    fn all(store: &KnowledgeStore) -> Vec<&Document> {
        store.documents().iter().collect()
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<Category> = CATEGORY_RULES.iter().map(|r| r.category).collect();

        assert_eq!(
            order,
            vec![
                Category::Eligibility,
                Category::Courses,
                Category::Fees,
                Category::Scholarships,
                Category::Contact,
            ]
        );
    }

    #[test]
    fn test_general_has_no_rule() {
        assert!(CATEGORY_RULES
            .iter()
            .all(|rule| rule.category != Category::General));
    }

    #[test]
    fn test_matching_rule_first_match_wins() {
        assert_eq!(
            matching_rule("fee scholarship").map(|r| r.category),
            Some(Category::Fees)
        );
        assert_eq!(
            matching_rule("scholarship fee").map(|r| r.category),
            Some(Category::Fees)
        );
        assert_eq!(
            matching_rule("Course requirements").map(|r| r.category),
            Some(Category::Eligibility)
        );
    }

    #[test]
    fn test_matching_rule_multi_word_keyword() {
        assert_eq!(
            matching_rule("Any FINANCIAL AID?").map(|r| r.category),
            Some(Category::Scholarships)
        );
        assert!(matching_rule("financial help").is_none());
    }

    #[test]
    fn test_empty_relevant_returns_fallback() {
        assert_eq!(select("fees", &[]), Selection::Fallback);
        assert_eq!(select_answer("fees", &[]), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_rule_picks_category_document() {
        let store = KnowledgeStore::admissions();
        let relevant = all(&store);

        let selection = select("what does it cost", &relevant);

        assert_eq!(
            selection,
            Selection::Categorized {
                category: Category::Fees,
                document: &store.documents()[2],
            }
        );
    }

    #[test]
    fn test_rule_without_category_document_defaults_to_first() {
        let store = KnowledgeStore::admissions();
        let relevant = vec![&store.documents()[1], &store.documents()[4]];

        let selection = select("fee details", &relevant);

        assert_eq!(
            selection,
            Selection::Default {
                document: &store.documents()[1],
                unmatched_rule: Some(Category::Fees),
            }
        );
    }

    #[test]
    fn test_no_rule_defaults_to_first() {
        let store = KnowledgeStore::admissions();
        let relevant = vec![&store.documents()[3], &store.documents()[4]];

        let answer = select_answer("hello there", &relevant);

        assert_eq!(answer, store.documents()[3].content());
    }

    #[test]
    fn test_fallback_message_text() {
        assert_eq!(
            FALLBACK_MESSAGE,
            "I don't have specific information about that topic. Please ask about eligibility \
             criteria, courses offered, fees, scholarships, or contact information."
        );
    }
}
