//! Directory layouts, as path segments relative to the project root.
//!
//! Parents are always listed before their children.

use camino::Utf8PathBuf;

pub type DirectorySpec = &'static [&'static [&'static str]];

/// The layered-architecture template.
pub const LAYERED: DirectorySpec = &[
    &["src"],
    &["src", "application"],
    &["src", "application", "interfaces"],
    &["src", "application", "services"],
    &["src", "application", "use_cases"],
    &["src", "domain"],
    &["src", "domain", "entities"],
    &["src", "domain", "value_objects"],
    &["src", "domain", "events"],
    &["src", "infrastructure"],
    &["src", "infrastructure", "database"],
    &["src", "infrastructure", "repositories"],
    &["src", "infrastructure", "messaging"],
    &["src", "infrastructure", "cache"],
    &["src", "presentation"],
    &["src", "presentation", "api"],
    &["src", "presentation", "api", "routes"],
    &["src", "presentation", "api", "schemas"],
    &["src", "presentation", "grpc"],
    &["src", "presentation", "graphql"],
    &["src", "core"],
    &["src", "common"],
    &["tests"],
    &["tests", "unit"],
    &["tests", "integration"],
    &["tests", "e2e"],
    &["scripts"],
    &["k8s"],
    &["ci"],
];

/// Architecture decision records, only created on request.
pub const DOCS: DirectorySpec = &[&["docs"], &["docs", "adr"]];

pub fn relative(segments: &[&str]) -> Utf8PathBuf {
    segments.iter().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_parents_first(spec: DirectorySpec) {
        let mut seen = HashSet::new();
        for segments in spec {
            if segments.len() > 1 {
                let parent = relative(&segments[..segments.len() - 1]);
                assert!(seen.contains(&parent), "{parent} must precede its children");
            }
            assert!(seen.insert(relative(segments)), "duplicate entry {segments:?}");
        }
    }

    #[test]
    fn layered_lists_parents_before_children() {
        assert_parents_first(LAYERED);
    }

    #[test]
    fn docs_lists_parents_before_children() {
        assert_parents_first(DOCS);
    }

    #[test]
    fn layered_top_level_entries() {
        let top: Vec<&str> = LAYERED
            .iter()
            .filter(|segments| segments.len() == 1)
            .map(|segments| segments[0])
            .collect();
        assert_eq!(top, ["src", "tests", "scripts", "k8s", "ci"]);
    }

    #[test]
    fn relative_joins_segments() {
        assert_eq!(
            relative(&["src", "presentation", "api", "routes"]),
            Utf8PathBuf::from("src/presentation/api/routes")
        );
    }
}
