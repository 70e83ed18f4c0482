use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Whether an experience entry is employment or a side project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceKind {
    Work,
    Project,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "work",
            ExperienceKind::Project => "project",
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown experience type '{0}', expected 'work' or 'project'")]
pub struct UnknownExperienceKind(pub String);

impl FromStr for ExperienceKind {
    type Err = UnknownExperienceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" => Ok(ExperienceKind::Work),
            "project" => Ok(ExperienceKind::Project),
            other => Err(UnknownExperienceKind(other.to_string())),
        }
    }
}

/// One position or project on the experience timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub kind: ExperienceKind,
    pub start_date: NaiveDate,
    /// `None` while ongoing
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        kind: ExperienceKind,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            kind,
            start_date,
            end_date: None,
            description: None,
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }
}
