//! Built-in admissions FAQ documents

use super::category::Category;
use super::document::Document;

/// The five admissions documents served when no knowledge file is configured
pub fn admissions_documents() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "B.Tech Eligibility Criteria",
            "For B.Tech admission, candidates must have completed 12th grade with Physics, \
             Chemistry, and Mathematics. Minimum 75% marks required in 12th grade. Valid JEE \
             Main score is mandatory. Age limit is 25 years for general category.",
            Category::Eligibility,
        ),
        Document::new(
            "2",
            "Available Courses",
            "We offer B.Tech in Computer Science, Electronics, Mechanical, Civil, Chemical \
             Engineering. M.Tech programs available in all branches. MBA, MCA, and PhD programs \
             also offered. Duration: B.Tech (4 years), M.Tech (2 years), MBA (2 years).",
            Category::Courses,
        ),
        Document::new(
            "3",
            "Fee Structure",
            "B.Tech annual fees: ₹1,50,000. M.Tech annual fees: ₹80,000. MBA annual fees: \
             ₹2,00,000. Hostel fees: ₹50,000 per year. Mess fees: ₹40,000 per year. One-time \
             admission fee: ₹10,000.",
            Category::Fees,
        ),
        Document::new(
            "4",
            "Scholarship Programs",
            "Merit scholarships for top 10% students. Need-based financial aid available. Sports \
             scholarships for state/national level players. SC/ST/OBC fee concessions as per \
             government norms. Girl student scholarships available.",
            Category::Scholarships,
        ),
        Document::new(
            "5",
            "Contact Information",
            "Admission Office: +91-9876543210. Email: admissions@college.edu. Address: College \
             Road, Education City, State - 123456. Office Hours: 9 AM to 5 PM, Monday to \
             Saturday. Online portal: www.college.edu/admissions",
            Category::Contact,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::KnowledgeStore;

    #[test]
    fn test_reference_documents_are_valid() {
        let store = KnowledgeStore::new(admissions_documents()).unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_reference_document_order_and_categories() {
        let docs = admissions_documents();
        let summary: Vec<(&str, Category)> =
            docs.iter().map(|d| (d.id(), d.category())).collect();

        assert_eq!(
            summary,
            vec![
                ("1", Category::Eligibility),
                ("2", Category::Courses),
                ("3", Category::Fees),
                ("4", Category::Scholarships),
                ("5", Category::Contact),
            ]
        );
    }

    #[test]
    fn test_line_continuations_keep_single_spaces() {
        for doc in admissions_documents() {
            assert!(!doc.content().contains("  "), "double space in {}", doc.id());
            assert!(!doc.content().contains('\n'));
        }

        let docs = admissions_documents();
        assert!(docs[2].content().starts_with("B.Tech annual fees: ₹1,50,000. M.Tech"));
        assert!(docs[4].content().ends_with("Online portal: www.college.edu/admissions"));
    }
}
