// Status filtering for `list`

use crate::error::{Result, TaskError};
use crate::models::{Status, Task};
use std::fmt;

/// Predicate restricting a listing to one status value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Strict parse: an unrecognized value is a validation error
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(StatusFilter::All),
            Some(s) => Status::parse(s)
                .map(StatusFilter::Only)
                .ok_or_else(|| TaskError::validation("invalid filter. Use: done, todo, in-progress")),
        }
    }

    /// Lenient parse: an unrecognized value means no filter
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(Status::parse).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse_strict() {
        assert_eq!(StatusFilter::parse(None).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("done")).unwrap(), StatusFilter::Only(Status::Done));
        assert_eq!(
            StatusFilter::parse(Some("in-progress")).unwrap(),
            StatusFilter::Only(Status::InProgress)
        );

        let err = StatusFilter::parse(Some("finished")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test]
    fn test_filter_parse_lenient() {
        assert_eq!(StatusFilter::parse_lenient(Some("finished")), StatusFilter::All);
        assert_eq!(StatusFilter::parse_lenient(None), StatusFilter::All);
        assert_eq!(StatusFilter::parse_lenient(Some("todo")), StatusFilter::Only(Status::Todo));
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new(1, "Test");
        assert!(StatusFilter::All.matches(&task));
        assert!(StatusFilter::Only(Status::Todo).matches(&task));

        task.set_status(Status::Done);
        assert!(!StatusFilter::Only(Status::Todo).matches(&task));
        assert!(StatusFilter::Only(Status::Done).matches(&task));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(StatusFilter::Only(Status::InProgress).to_string(), "in-progress");
    }
}
