// Derived display model for a featured project.
// Turns raw repository records into what the projects section renders.

use serde::{Deserialize, Serialize};

use crate::github::{Languages, Repository};

/// Number of entries in the fixed accent palette the UI cycles through.
pub const ACCENT_PALETTE_LEN: usize = 8;

/// Maximum number of technology labels per project.
pub const MAX_TECH_LABELS: usize = 4;

/// Label used when no technology source yields anything.
const TECH_FALLBACK: &str = "Code";

/// A project card: identifier, derived display fields, and provenance
/// needed to link back to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub url: String,
    /// Index into the accent palette, assigned by list position.
    pub accent: usize,
    pub stars: u64,
}

impl ProjectRecord {
    /// Build a record from a repository and its (possibly absent) language
    /// breakdown. `index` is the repository's position in the featured
    /// list and fixes the accent.
    pub fn from_repository(repo: &Repository, index: usize, languages: Option<&Languages>) -> Self {
        let description = repo
            .description
            .clone()
            .unwrap_or_else(|| format!("Repository: {}", repo.name));

        Self {
            id: repo.id,
            title: display_title(&repo.name),
            description,
            tech_stack: resolve_tech_stack(languages, &repo.topics, repo.language.as_deref()),
            url: repo.html_url.clone(),
            accent: index % ACCENT_PALETTE_LEN,
            stars: repo.stargazers_count,
        }
    }
}

/// Derive a display title from a raw repository name: split on `-` and `_`,
/// capitalize each segment's first letter, rejoin with single spaces.
pub fn display_title(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve up to four technology labels, first non-empty source wins:
/// language breakdown, then topics, then the primary language, then a
/// fixed fallback. Never returns an empty list.
///
/// The breakdown response carries no reliable key order, so its keys are
/// ranked by byte count descending (name ascending on ties) before the cap
/// is applied.
pub fn resolve_tech_stack(
    languages: Option<&Languages>,
    topics: &[String],
    primary: Option<&str>,
) -> Vec<String> {
    if let Some(languages) = languages {
        if !languages.is_empty() {
            let mut ranked: Vec<_> = languages.iter().collect();
            ranked.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
                b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
            });
            return ranked
                .into_iter()
                .take(MAX_TECH_LABELS)
                .map(|(name, _)| name.clone())
                .collect();
        }
    }

    if !topics.is_empty() {
        return topics.iter().take(MAX_TECH_LABELS).cloned().collect();
    }

    if let Some(primary) = primary {
        return vec![primary.to_string()];
    }

    vec![TECH_FALLBACK.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, description: Option<&str>) -> Repository {
        Repository {
            id: 7,
            name: name.to_string(),
            description: description.map(String::from),
            html_url: format!("https://github.com/someone/{}", name),
            topics: Vec::new(),
            language: None,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            fork: false,
            stargazers_count: 2,
            languages_url: String::new(),
        }
    }

    #[test]
    fn title_capitalizes_dash_separated_segments() {
        assert_eq!(display_title("my-iot-project"), "My Iot Project");
    }

    #[test]
    fn title_capitalizes_underscore_separated_segments() {
        assert_eq!(display_title("smart_home_hub"), "Smart Home Hub");
    }

    #[test]
    fn title_handles_mixed_and_repeated_separators() {
        assert_eq!(display_title("led_matrix-driver"), "Led Matrix Driver");
        assert_eq!(display_title("a--b__c"), "A B C");
        assert_eq!(display_title("plain"), "Plain");
    }

    #[test]
    fn description_falls_back_to_synthesized_string() {
        let record = ProjectRecord::from_repository(&repo("sensor-hub", None), 0, None);
        assert_eq!(record.description, "Repository: sensor-hub");

        let record = ProjectRecord::from_repository(&repo("sensor-hub", Some("Reads things")), 0, None);
        assert_eq!(record.description, "Reads things");
    }

    #[test]
    fn tech_stack_prefers_language_breakdown_ranked_by_bytes() {
        let languages: Languages = [
            ("Shell".to_string(), 50u64),
            ("Rust".to_string(), 9000),
            ("Dockerfile".to_string(), 10),
            ("C".to_string(), 700),
            ("Makefile".to_string(), 50),
        ]
        .into_iter()
        .collect();

        let stack = resolve_tech_stack(Some(&languages), &["topic".to_string()], Some("Rust"));
        assert_eq!(stack, vec!["Rust", "C", "Makefile", "Shell"]);
    }

    #[test]
    fn tech_stack_falls_back_to_topics_capped_at_four() {
        let topics: Vec<String> = ["iot", "esp32", "mqtt", "sensors", "home"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let stack = resolve_tech_stack(None, &topics, Some("C++"));
        assert_eq!(stack, vec!["iot", "esp32", "mqtt", "sensors"]);

        let empty: Languages = Languages::new();
        let stack = resolve_tech_stack(Some(&empty), &topics, Some("C++"));
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn tech_stack_falls_back_to_primary_language() {
        let stack = resolve_tech_stack(None, &[], Some("Go"));
        assert_eq!(stack, vec!["Go"]);
    }

    #[test]
    fn tech_stack_is_never_empty() {
        assert_eq!(resolve_tech_stack(None, &[], None), vec!["Code"]);
    }

    #[test]
    fn accent_cycles_through_the_palette() {
        for index in 0..20 {
            let record = ProjectRecord::from_repository(&repo("x", None), index, None);
            assert_eq!(record.accent, index % ACCENT_PALETTE_LEN);
        }
    }
}
