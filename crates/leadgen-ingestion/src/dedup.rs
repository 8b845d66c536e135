//! De-duplication of fetched papers.

use std::collections::HashSet;

use leadgen_common::Paper;

/// Keep the first paper for each title; later duplicates are dropped.
pub fn dedup_by_title(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen = HashSet::new();
    papers
        .into_iter()
        .filter(|paper| seen.insert(paper.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadgen_test_utils::paper;

    #[test]
    fn test_first_occurrence_wins() {
        let mut first = paper("Same title", "Jane Doe", 2025);
        first.journal = "First".to_string();
        let mut second = paper("Same title", "John Smith", 2025);
        second.journal = "Second".to_string();

        let kept = dedup_by_title(vec![first, paper("Other", "A B", 2024), second]);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].journal, "First");
        assert_eq!(kept[1].title, "Other");
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_by_title(vec![]).is_empty());
    }
}
