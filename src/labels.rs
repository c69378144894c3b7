use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// The kind of activity an entry logs. Only the command line knows about
/// this type, the store keeps the label as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    JobApplication,
    Networking,
    SkillDevelopment,
    InterviewPrep,
    FreelanceWork,
    MentalWellness,
}

/// Progress of the logged task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Completed,
    InProgress,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::JobApplication,
        Category::Networking,
        Category::SkillDevelopment,
        Category::InterviewPrep,
        Category::FreelanceWork,
        Category::MentalWellness,
    ];

    pub const LABELS: [&'static str; 6] = [
        "Job Application",
        "Networking",
        "Skill Development",
        "Interview Prep",
        "Freelance Work",
        "Mental Wellness",
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::JobApplication => "Job Application",
            Category::Networking => "Networking",
            Category::SkillDevelopment => "Skill Development",
            Category::InterviewPrep => "Interview Prep",
            Category::FreelanceWork => "Freelance Work",
            Category::MentalWellness => "Mental Wellness",
        }
    }
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Completed, Status::InProgress];

    pub const LABELS: [&'static str; 3] = ["Pending", "Completed", "In Progress"];

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::JobApplication
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown category '{}'.", s))
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown status '{}'.", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_variants() {
        for (category, label) in Category::ALL.iter().zip(Category::LABELS.iter()) {
            assert_eq!(category.label(), *label);
        }
        for (status, label) in Status::ALL.iter().zip(Status::LABELS.iter()) {
            assert_eq!(status.label(), *label);
        }
    }

    #[test]
    fn parses_labels_ignoring_case() {
        assert_eq!("interview prep".parse::<Category>().unwrap(), Category::InterviewPrep);
        assert_eq!("Mental Wellness".parse::<Category>().unwrap(), Category::MentalWellness);
        assert_eq!("IN PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("Gardening".parse::<Category>().is_err());
        assert!("Abandoned".parse::<Status>().is_err());
    }

    #[test]
    fn defaults_are_first_options() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(Status::default(), Status::ALL[0]);
    }
}
