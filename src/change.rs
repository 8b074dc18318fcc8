use std::fmt;

/// Semver impact of a single change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Breaks existing clients.
    Major,
    /// Backward-compatible addition.
    Minor,
    /// Documentation or metadata only.
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub severity: Severity,
    /// Dotted location of the offending node, e.g. `paths./users.get`.
    pub location: String,
    pub message: String,
    /// Whether Display appends `(at: location)`.
    located: bool,
}

impl Change {
    pub fn major(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Major, message, location)
    }

    pub fn minor(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Minor, message, location)
    }

    pub fn patch(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Patch, message, location)
    }

    fn new(severity: Severity, message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            severity,
            location: location.into(),
            message: message.into(),
            located: true,
        }
    }

    /// Renders the message alone; `location` is still recorded.
    pub fn unlocated(mut self) -> Self {
        self.located = false;
        self
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.located {
            write!(f, "{} (at: {})", self.message, self.location)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// Changes bucketed by severity, each bucket in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    major: Vec<Change>,
    minor: Vec<Change>,
    patch: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: Change) {
        match change.severity {
            Severity::Major => self.major.push(change),
            Severity::Minor => self.minor.push(change),
            Severity::Patch => self.patch.push(change),
        }
    }

    pub fn major(&self) -> &[Change] {
        &self.major
    }

    pub fn minor(&self) -> &[Change] {
        &self.minor
    }

    pub fn patch(&self) -> &[Change] {
        &self.patch
    }

    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len() + self.patch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_major(&self) -> bool {
        !self.major.is_empty()
    }

    pub fn has_minor(&self) -> bool {
        !self.minor.is_empty()
    }

    pub fn has_patch(&self) -> bool {
        !self.patch.is_empty()
    }
}

impl Extend<Change> for ChangeSet {
    fn extend<I: IntoIterator<Item = Change>>(&mut self, iter: I) {
        iter.into_iter().for_each(|change| self.push(change));
    }
}
