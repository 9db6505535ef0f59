use crate::verbs::VerbSet;
use std::sync::Arc;

/// One scanned line paired with the verb that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub line: Arc<str>,
    pub verb: Arc<str>,
}

/// How far the producer got through the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_scanned: u64,
    pub matches_emitted: u64,
    /// Set when the scan stopped early on a read error or an overlong line.
    pub read_error: Option<String>,
}

/// Every verb of `verbs` contained in `line`, in verb-set order.
///
/// Containment is literal and case-sensitive. The line is shared between all
/// of its matches.
pub fn matches(line: &str, verbs: &VerbSet) -> Vec<LineMatch> {
    let mut shared: Option<Arc<str>> = None;
    let mut out = Vec::new();

    for verb in verbs.iter() {
        if line.contains(verb.as_ref()) {
            let line = shared.get_or_insert_with(|| Arc::from(line)).clone();
            out.push(LineMatch {
                line,
                verb: verb.clone(),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::matches;
    use crate::verbs::VerbSet;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn verbs_of(line: &str, verbs: &str) -> Vec<String> {
        matches(line, &VerbSet::parse(verbs))
            .into_iter()
            .map(|m| m.verb.to_string())
            .collect()
    }

    #[test]
    fn emits_one_match_per_contained_verb() {
        let got = verbs_of("2024-01-01 10:00:00 GET /api/POST 200 0.120", "GET,POST,PUT");
        assert_eq!(got, vec!["GET", "POST"]);
    }

    #[test]
    fn matching_is_case_sensitive_and_unanchored() {
        assert!(verbs_of("get /api 0.1", "GET").is_empty());
        assert_eq!(verbs_of("xxGETxx 0.1", "GET"), vec!["GET"]);
    }

    #[test]
    fn duplicate_verbs_match_twice() {
        let found = matches("GET /api 0.5", &VerbSet::parse("GET,GET"));
        assert_eq!(found.len(), 2);
        assert!(Arc::ptr_eq(&found[0].line, &found[1].line));
    }

    #[test]
    fn empty_verb_set_matches_nothing() {
        assert!(matches("GET /api 0.5", &VerbSet::default()).is_empty());
    }

    #[test]
    fn non_matching_line_is_discarded() {
        assert!(verbs_of("not a verb line 0.999", "GET,POST").is_empty());
    }
}
