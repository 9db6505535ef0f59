use std::fmt;
use std::sync::Arc;

/// Ordered list of substrings a line is matched against.
///
/// Duplicates are kept on purpose: a verb listed twice produces two matches
/// for every line that contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbSet {
    verbs: Vec<Arc<str>>,
}

impl VerbSet {
    /// Split a comma-separated list into verbs.
    ///
    /// Pieces are trimmed and empty pieces are dropped, so `"GET,,POST "`
    /// yields `["GET", "POST"]` and `""` yields an empty set.
    pub fn parse(raw: &str) -> Self {
        let verbs = raw
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Arc::from)
            .collect();

        Self { verbs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.verbs.iter()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Distinct verbs in first-seen order, used when reporting counts.
    pub fn distinct(&self) -> Vec<Arc<str>> {
        let mut out: Vec<Arc<str>> = Vec::with_capacity(self.verbs.len());
        for verb in &self.verbs {
            if !out.iter().any(|seen| seen == verb) {
                out.push(verb.clone());
            }
        }
        out
    }
}

impl<S: AsRef<str>> FromIterator<S> for VerbSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            verbs: iter.into_iter().map(|v| Arc::from(v.as_ref())).collect(),
        }
    }
}

impl fmt::Display for VerbSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.verbs.iter().map(|v| v.as_ref()).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}
