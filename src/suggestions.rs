//! # Error Suggestions
//!
//! Helpers for errors and warnings that tell the user what went wrong AND
//! how to fix it.
//!
//! `find_similar` powers the "did you mean" hints for unknown settings keys
//! and for absolute-ordering names that match no document. The `anyhow`
//! constructors are used by the command-line front end.

use std::path::Path;

/// Error for a missing settings file.
///
/// Includes hints about:
/// - Creating a settings file
/// - Using the -s/--settings flag
/// - Using the FACES_CONFIG_SETTINGS environment variable
pub fn settings_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Settings file not found: {path}\n\n\
         hint: Create a .faces-config.yaml file next to your web application\n\
         hint: Use -s/--settings to specify a different path\n\
         hint: Set FACES_CONFIG_SETTINGS environment variable",
        path = path.display()
    )
}

/// Error for settings that name no document source at all.
pub fn no_sources() -> anyhow::Error {
    anyhow::anyhow!(
        "No descriptor sources configured\n\n\
         hint: Set web_root to load WEB-INF/faces-config.xml\n\
         hint: Add meta_inf_roots or patterns to load library descriptors"
    )
}

/// Error for a cycle between implicit ordering directives.
pub fn ordering_cycle(cycle: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Circular ordering dependencies detected between documents: {cycle}\n\n\
         hint: Remove one of the <before>/<after> entries to break the cycle\n\
         hint: Declare an <absolute-ordering> in WEB-INF/faces-config.xml to override them"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
pub fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows are enough: each row only reads the one above it.
    let mut previous: Vec<usize> = (0..=b_len).collect();
    let mut current = vec![0usize; b_len + 1];

    for i in 1..=a_len {
        current[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_not_found_includes_hints() {
        let path = Path::new("/some/path/.faces-config.yaml");
        let message = settings_not_found(path).to_string();

        assert!(message.contains("Settings file not found"));
        assert!(message.contains("/some/path/.faces-config.yaml"));
        assert!(message.contains("-s/--settings"));
        assert!(message.contains("FACES_CONFIG_SETTINGS"));
    }

    #[test]
    fn test_no_sources_includes_hints() {
        let message = no_sources().to_string();
        assert!(message.contains("web_root"));
        assert!(message.contains("meta_inf_roots"));
    }

    #[test]
    fn test_ordering_cycle_includes_hints() {
        let message = ordering_cycle("a, b").to_string();
        assert!(message.contains("a, b"));
        assert!(message.contains("break the cycle"));
        assert!(message.contains("absolute-ordering"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("threads", "threads"), 0);
        assert_eq!(edit_distance("thread", "threads"), 1);
        assert_eq!(edit_distance("treads", "threads"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_similar() {
        let candidates = ["web_root", "patterns", "parallel"];

        assert_eq!(find_similar("webroot", &candidates), Some("web_root"));
        assert_eq!(find_similar("pattern", &candidates), Some("patterns"));
        assert_eq!(find_similar("paralel", &candidates), Some("parallel"));
        assert_eq!(find_similar("colour_scheme", &candidates), None);
    }
}
