use crate::network::subnet::Subnet;
use crate::verdict::Verdict;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub subnet: Subnet,
    pub verdict: Verdict,
}

/// Outcome of a run, in the order the subnets were read from the scope file.
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, subnet: Subnet, verdict: Verdict) {
        self.entries.push(Entry { subnet, verdict });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.entries.iter().filter(|e| e.verdict == verdict).count()
    }

    /// NoRoute and Timeout entries, input order preserved.
    pub fn problems(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.verdict.is_problem())
    }

    pub fn empty_but_reachable(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|e| e.verdict == Verdict::EmptyButReachable)
    }

    pub fn problem_count(&self) -> usize {
        self.problems().count()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }

    /// Problem list in its copyable form: `10.0.0.0/24 (NoRoute)`.
    pub fn problem_lines(&self) -> Vec<String> {
        self.problems()
            .map(|e| format!("{} ({})", e.subnet, e.verdict.tag()))
            .collect()
    }
}
