// Task operations on top of the store

use crate::error::{Result, TaskError};
use crate::filter::StatusFilter;
use crate::models::{Status, Task, next_id};
use crate::output::{Format, Listing, Outcome};
use crate::store::Store;
use tracing::debug;

/// Runs one command against the task file
///
/// Arguments are validated before the store is touched, so a rejected command
/// never reads or writes the file. An accepted command loads the collection
/// once and, if it changes anything, saves it once.
#[derive(Debug, Clone)]
pub struct Tracker {
    store: Store,
}

impl Tracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Append a new `todo` task and report its id
    pub fn add(&self, description: &str) -> Result<Outcome> {
        let description = parse_description(description, "task description is required")?;

        let mut tasks = self.store.load();
        let id = next_id(&tasks).ok_or_else(|| TaskError::validation("no free task ID left"))?;
        tasks.push(Task::new(id, description));
        self.store.save(&tasks)?;

        debug!(id, "Added task");
        Ok(Outcome::Added(id))
    }

    /// Replace the description of an existing task
    pub fn update(&self, id: &str, description: &str) -> Result<Outcome> {
        let id = parse_id(id, "update")?;
        let description = parse_description(description, "usage: update <id> <new description>")?;

        let mut tasks = self.store.load();
        find_mut(&mut tasks, id)?.set_description(description);
        self.store.save(&tasks)?;

        Ok(Outcome::Updated(id))
    }

    /// Remove a task, keeping the order of the rest
    pub fn delete(&self, id: &str) -> Result<Outcome> {
        let id = parse_id(id, "delete")?;

        let mut tasks = self.store.load();
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        tasks.remove(index);
        self.store.save(&tasks)?;

        Ok(Outcome::Deleted(id))
    }

    /// Overwrite the status of a task with `in-progress` or `done`
    pub fn set_status(&self, id: &str, status: Status) -> Result<Outcome> {
        let command = match status {
            Status::InProgress => "mark-in-progress",
            Status::Done => "mark-done",
            Status::Todo => {
                return Err(TaskError::validation("status can only be set to in-progress or done"));
            }
        };
        let id = parse_id(id, command)?;

        let mut tasks = self.store.load();
        find_mut(&mut tasks, id)?.set_status(status);
        self.store.save(&tasks)?;

        Ok(Outcome::StatusChanged(id, status))
    }

    /// Snapshot of the tasks matching `filter`
    ///
    /// An unrecognized filter is an error for human output but means "no
    /// filter" for JSON output.
    pub fn list(&self, filter: Option<&str>, format: Format) -> Result<Listing> {
        let filter = match format {
            Format::Human => StatusFilter::parse(filter)?,
            Format::Json => StatusFilter::parse_lenient(filter),
        };

        let tasks: Vec<Task> = self.store.load().into_iter().filter(|t| filter.matches(t)).collect();
        debug!(%filter, count = tasks.len(), "Listed tasks");

        Ok(Listing::new(tasks, format))
    }

    /// Drop every `done` task; writes nothing when there is none
    pub fn clear_done(&self) -> Result<Outcome> {
        let mut tasks = self.store.load();
        let before = tasks.len();
        tasks.retain(|t| t.status != Status::Done);
        let cleared = before - tasks.len();

        if cleared == 0 {
            return Ok(Outcome::NothingToClear);
        }

        self.store.save(&tasks)?;
        Ok(Outcome::Cleared(cleared))
    }
}

fn parse_id(raw: &str, command: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TaskError::validation(format!("usage: {} <id>", command))),
    }
}

fn parse_description<'a>(raw: &'a str, usage: &str) -> Result<&'a str> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(TaskError::validation(usage));
    }
    Ok(description)
}

fn find_mut(tasks: &mut [Task], id: u32) -> Result<&mut Task> {
    tasks.iter_mut().find(|t| t.id == id).ok_or(TaskError::NotFound(id))
}
