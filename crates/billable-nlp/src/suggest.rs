//! Client and task suggestions for entry forms.

use billable_core::config::{DEFAULT_MAX_CLIENT_SUGGESTIONS, DEFAULT_MAX_TASK_SUGGESTIONS};
use billable_core::{ClientRecord, PracticeArea};

use crate::extract::practice_area::keywords_for;
use crate::text::title_case;

/// Minimum input length before client suggestions are offered.
pub const MIN_CLIENT_QUERY_CHARS: usize = 2;
/// Context shorter than this does not filter task suggestions.
const MIN_TASK_CONTEXT_CHARS: usize = 3;

/// Clients whose name or company contains `input`, case-insensitively.
pub fn suggest_clients(input: &str, clients: &[ClientRecord]) -> Vec<ClientRecord> {
    suggest_clients_with_limit(input, clients, DEFAULT_MAX_CLIENT_SUGGESTIONS)
}

pub fn suggest_clients_with_limit(
    input: &str,
    clients: &[ClientRecord],
    limit: usize,
) -> Vec<ClientRecord> {
    let query = input.trim().to_lowercase();
    if query.chars().count() < MIN_CLIENT_QUERY_CHARS {
        return Vec::new();
    }

    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c
                    .company
                    .as_deref()
                    .is_some_and(|company| company.to_lowercase().contains(&query))
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Title-cased task names for a practice area, narrowed by `context`.
///
/// Unknown areas and `general` fall back to the corporate list. If the
/// context filters out every task, the full list is returned instead.
pub fn suggest_tasks(practice_area: &str, context: &str) -> Vec<String> {
    suggest_tasks_with_limit(practice_area, context, DEFAULT_MAX_TASK_SUGGESTIONS)
}

pub fn suggest_tasks_with_limit(practice_area: &str, context: &str, limit: usize) -> Vec<String> {
    let area = practice_area
        .parse::<PracticeArea>()
        .unwrap_or(PracticeArea::Corporate);
    let tasks = keywords_for(area)
        .or_else(|| keywords_for(PracticeArea::Corporate))
        .unwrap_or_default();

    let context = context.trim().to_lowercase();
    let mut relevant: Vec<&str> = if context.chars().count() >= MIN_TASK_CONTEXT_CHARS {
        tasks
            .iter()
            .copied()
            .filter(|task| task.contains(context.as_str()) || context.contains(task))
            .collect()
    } else {
        tasks.to_vec()
    };
    if relevant.is_empty() {
        relevant = tasks.to_vec();
    }

    relevant.into_iter().take(limit).map(title_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<ClientRecord> {
        vec![
            ClientRecord::new("Jane Smith").with_company("Smith Holdings"),
            ClientRecord::new("Robert Chen").with_company("Acme Corp"),
            ClientRecord::new("Acme Legal Dept"),
            ClientRecord::new("Maria Lopez"),
        ]
    }

    #[test]
    fn test_suggest_clients_matches_name_or_company() {
        let hits = suggest_clients("acme", &directory());
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Robert Chen", "Acme Legal Dept"]);

        let hits = suggest_clients("SMITH", &directory());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_suggest_clients_short_input() {
        assert!(suggest_clients("a", &directory()).is_empty());
        assert!(suggest_clients(" ", &directory()).is_empty());
    }

    #[test]
    fn test_suggest_clients_caps_results() {
        let many: Vec<ClientRecord> = (0..12)
            .map(|i| ClientRecord::new(format!("Client {}", i)))
            .collect();
        assert_eq!(suggest_clients("client", &many).len(), 5);
        assert_eq!(suggest_clients_with_limit("client", &many, 3).len(), 3);
    }

    #[test]
    fn test_suggest_tasks_for_area() {
        let tasks = suggest_tasks("ip", "");
        assert_eq!(
            tasks,
            vec!["Patent", "Trademark", "Copyright", "Licensing", "Infringement"]
        );
    }

    #[test]
    fn test_suggest_tasks_filters_by_context() {
        assert_eq!(
            suggest_tasks("real_estate", "title"),
            vec!["Title Search"]
        );
        // context containing the task also counts
        assert_eq!(
            suggest_tasks("criminal", "bail hearing tomorrow"),
            vec!["Bail"]
        );
    }

    #[test]
    fn test_suggest_tasks_unfiltered_when_nothing_matches() {
        let tasks = suggest_tasks("family", "zoning");
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0], "Custody");
    }

    #[test]
    fn test_suggest_tasks_unknown_area_uses_corporate() {
        let tasks = suggest_tasks("maritime", "");
        assert_eq!(tasks[0], "Drafting");
        assert!(tasks.contains(&"Due Diligence".to_string()));
        assert_eq!(suggest_tasks("general", ""), tasks);
    }

    #[test]
    fn test_short_context_does_not_filter() {
        assert_eq!(suggest_tasks("ip", "pa").len(), 5);
    }
}
