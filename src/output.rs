// User-facing results of task operations

use crate::models::{Status, Task};
use std::fmt;

/// What an accepted command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(u32),
    Updated(u32),
    Deleted(u32),
    StatusChanged(u32, Status),
    Cleared(usize),
    NothingToClear,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(id) => write!(f, "Task added successfully (ID: {})", id),
            Outcome::Updated(id) => write!(f, "Task {} updated successfully", id),
            Outcome::Deleted(id) => write!(f, "Task {} deleted successfully", id),
            Outcome::StatusChanged(id, status) => write!(f, "Task {} is now {}", id, status),
            Outcome::Cleared(count) => write!(f, "Cleared {} done task(s).", count),
            Outcome::NothingToClear => write!(f, "No done tasks to clear."),
        }
    }
}

/// Rendering used by `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Human,
    Json,
}

/// Filtered snapshot of the collection, rendered on demand
///
/// Rendering borrows the snapshot, so a listing can be displayed any number of
/// times with the same result.
#[derive(Debug, Clone)]
pub struct Listing {
    tasks: Vec<Task>,
    format: Format,
}

impl Listing {
    pub fn new(tasks: Vec<Task>, format: Format) -> Self {
        Self { tasks, format }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Json => {
                let json = serde_json::to_string_pretty(&self.tasks).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Format::Human if self.tasks.is_empty() => f.write_str("No tasks found"),
            Format::Human => {
                for (i, task) in self.tasks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}: [{}] {}", task.id, task.status, task.description)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        let mut done = Task::new(1, "write spec");
        done.set_status(Status::Done);
        vec![done, Task::new(2, "review spec")]
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Added(1).to_string(), "Task added successfully (ID: 1)");
        assert_eq!(Outcome::Updated(3).to_string(), "Task 3 updated successfully");
        assert_eq!(Outcome::Deleted(3).to_string(), "Task 3 deleted successfully");
        assert_eq!(
            Outcome::StatusChanged(2, Status::InProgress).to_string(),
            "Task 2 is now in-progress"
        );
        assert_eq!(Outcome::Cleared(2).to_string(), "Cleared 2 done task(s).");
        assert_eq!(Outcome::NothingToClear.to_string(), "No done tasks to clear.");
    }

    #[test]
    fn test_human_listing() {
        let listing = Listing::new(tasks(), Format::Human);
        assert_eq!(listing.to_string(), "1: [done] write spec\n2: [todo] review spec");
    }

    #[test]
    fn test_listing_renders_repeatably() {
        let listing = Listing::new(tasks(), Format::Human);
        assert_eq!(listing.to_string(), listing.to_string());
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.format(), Format::Human);
        assert_eq!(listing.tasks()[0].description, "write spec");
    }

    #[test]
    fn test_empty_listings() {
        assert_eq!(Listing::new(vec![], Format::Human).to_string(), "No tasks found");
        assert_eq!(Listing::new(vec![], Format::Json).to_string(), "[]");
    }

    #[test]
    fn test_json_listing_is_full_fidelity() {
        let original = tasks();
        let listing = Listing::new(original.clone(), Format::Json);

        let parsed: Vec<Task> = serde_json::from_str(&listing.to_string()).unwrap();
        assert_eq!(parsed, original);
    }
}
