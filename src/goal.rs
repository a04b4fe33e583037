//! Goals: the named groupings that own tasks

use std::fmt::{Display, Formatter};

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

/// The identifier of a [`Goal`], unique within the goals collection
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId {
    content: String,
}
impl GoalId {
    /// Generate a random GoalId
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for GoalId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for GoalId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for GoalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A named grouping of work that exclusively owns an ordered sequence of tasks.
///
/// No task exists outside a goal. Deleting a goal therefore discards its whole
/// task sequence with it, and nothing can dangle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The goal id
    id: GoalId,

    /// The display title of the goal
    title: String,

    /// A CSS color, also used as the default color of the goal's tasks
    color: String,

    /// How much effort this goal is meant to receive, as free text (e.g. `"30"`)
    effort: String,
    /// The unit `effort` is counted in (e.g. `"min"`)
    effort_unit: String,

    /// The tasks this goal owns, in display order.
    /// Task ids are only unique within this sequence.
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Goal {
    /// Create a brand new goal with no tasks yet.
    /// This will pick a new (random) goal id, and store the color in its hex form.
    pub fn new(title: String, color: &Color, effort: String, effort_unit: String) -> Self {
        Self {
            id: GoalId::random(),
            title,
            color: color.to_hex_string(),
            effort,
            effort_unit,
            tasks: Vec::new(),
        }
    }

    /// Create a goal whose fields are all known already (e.g. one the backend sent back).
    /// Contrary to [`Goal::new`], this performs no color normalization.
    pub fn new_with_parameters(id: GoalId, title: String, color: String,
                               effort: String, effort_unit: String,
                               tasks: Vec<Task>) -> Self
    {
        Self {
            id,
            title,
            color,
            effort,
            effort_unit,
            tasks,
        }
    }

    pub fn id(&self) -> &GoalId     { &self.id }
    pub fn title(&self) -> &str     { &self.title }
    pub fn color(&self) -> &str     { &self.color }
    pub fn effort(&self) -> &str        { &self.effort }
    pub fn effort_unit(&self) -> &str   { &self.effort_unit }
    pub fn tasks(&self) -> &[Task]      { &self.tasks }

    /// Returns the first task carrying this id, if any
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    /// Set the display color. The color is stored in its hex form.
    pub fn set_color(&mut self, color: &Color) {
        self.color = color.to_hex_string();
    }

    pub fn set_effort(&mut self, effort: String, effort_unit: String) {
        self.effort = effort;
        self.effort_unit = effort_unit;
    }

    /// Append a task to this goal's sequence.
    /// No task id uniqueness check is performed.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace the first task carrying the same id as `task` with it, as-is.
    /// Returns whether a task was actually replaced.
    pub fn replace_task(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            Some(existing) => {
                *existing = task;
                true
            },
            None => false,
        }
    }

    /// Remove every task carrying this id from the sequence
    pub fn remove_task(&mut self, id: &TaskId) {
        self.tasks.retain(|task| task.id() != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_normalization() {
        let color: Color = "#fff".parse().unwrap();
        let goal = Goal::new("Health".to_string(), &color, "0".to_string(), "min".to_string());
        assert_eq!(goal.color(), "#ffffff");

        // Named CSS colors normalize too
        let color: Color = "tomato".parse().unwrap();
        let goal = Goal::new("Reading".to_string(), &color, "20".to_string(), "min".to_string());
        assert_eq!(goal.color(), "#ff6347");

        // ...but data given as-is stays as-is
        let goal = Goal::new_with_parameters(
            GoalId::from("g1"), "Health".to_string(), "#fff".to_string(),
            "0".to_string(), "min".to_string(), Vec::new(),
        );
        assert_eq!(goal.color(), "#fff");
    }

    #[test]
    fn serde_goal_without_tasks() {
        // Documents written before tasks existed have no "tasks" key at all
        let text = r##"{"id":"g1","title":"Health","color":"#fff","effort":"30","effort_unit":"min"}"##;
        let goal: Goal = serde_json::from_str(text).unwrap();
        assert_eq!(goal.id(), &GoalId::from("g1"));
        assert_eq!(goal.tasks().len(), 0);
    }
}
