//! Read-only catalog queries over the project collection.

use std::collections::BTreeMap;

use serde::Serialize;

use models::project::{Project, ProjectStatus};

/// Category sentinel meaning "do not filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub by_status: BTreeMap<&'static str, usize>,
    pub by_category: BTreeMap<String, usize>,
}

/// Case-insensitive substring search over title, description and tags,
/// optionally narrowed to an exact category.
pub fn search(records: &[Project], q: &str, category: &str) -> Vec<Project> {
    records
        .iter()
        .filter(|p| q.is_empty() || p.matches(q))
        .filter(|p| category.is_empty() || category == ALL_CATEGORIES || p.category == category)
        .cloned()
        .collect()
}

/// Unique category names in first-seen order.
pub fn categories(records: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in records {
        if !seen.contains(&p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

/// Collection counts: total, per status (every status always present), and
/// per category.
pub fn stats(records: &[Project]) -> ProjectStats {
    let mut by_status: BTreeMap<&'static str, usize> =
        ProjectStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for p in records {
        *by_status.entry(p.status.as_str()).or_insert(0) += 1;
        *by_category.entry(p.category.clone()).or_insert(0) += 1;
    }
    ProjectStats { total: records.len(), by_status, by_category }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::project::ProjectPatch;
    use models::record::Resource;

    fn project(id: i64, title: &str, category: &str, status: ProjectStatus, tags: &[&str]) -> Project {
        let mut p = Project::create(id, ProjectPatch {
            title: Some(title.into()),
            description: Some(format!("{title} description")),
            category: Some(category.into()),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        });
        p.status = status;
        p
    }

    fn fixture() -> Vec<Project> {
        vec![
            project(1, "Shop", "Web Development", ProjectStatus::Completed, &["React", "Stripe"]),
            project(2, "Ray Tracer", "Graphics", ProjectStatus::InProgress, &["Rust"]),
            project(3, "Blog", "Web Development", ProjectStatus::Planned, &["react", "markdown"]),
        ]
    }

    #[test]
    fn search_is_case_insensitive_and_checks_tags() {
        let records = fixture();
        let hits = search(&records, "REACT", ALL_CATEGORIES);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        let hits = search(&records, "tracer", ALL_CATEGORIES);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn search_category_filter_is_exact_unless_all() {
        let records = fixture();
        let hits = search(&records, "", "Web Development");
        assert_eq!(hits.len(), 2);
        let hits = search(&records, "react", "Graphics");
        assert!(hits.is_empty());
        let hits = search(&records, "", ALL_CATEGORIES);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let cats = categories(&fixture());
        assert_eq!(cats, vec!["Web Development".to_string(), "Graphics".to_string()]);
    }

    #[test]
    fn stats_counts_every_status_even_at_zero() {
        let mut records = fixture();
        records.pop(); // drop the planned project
        let s = stats(&records);
        assert_eq!(s.total, 2);
        assert_eq!(s.by_status["completed"], 1);
        assert_eq!(s.by_status["in-progress"], 1);
        assert_eq!(s.by_status["planned"], 0);
        assert_eq!(s.by_category["Web Development"], 1);
        assert_eq!(s.by_category["Graphics"], 1);
    }
}
