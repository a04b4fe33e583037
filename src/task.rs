//! To-do tasks, and the action records logged against them

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::goal::GoalId;

/// The identifier of a [`Task`].
///
/// Only unique within the owning goal's task sequence: the model gives no global uniqueness
/// guarantee, which is why task lookups always go through a goal first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// An audit record logged against a task.
///
/// The three taxonomy ids and the six value slots belong to an external action taxonomy.
/// The planner treats the whole record as an opaque payload and passes it through unchanged;
/// fields this crate does not know about survive a round trip through the `extra` map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskAction {
    #[serde(rename = "actionId", default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(rename = "actionTypeId", default, skip_serializing_if = "Option::is_none")]
    pub action_type_id: Option<String>,
    #[serde(rename = "actionListId", default, skip_serializing_if = "Option::is_none")]
    pub action_list_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value6: Option<String>,

    /// Whatever else the taxonomy attached to this record, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A unit of work belonging to exactly one [`Goal`](crate::Goal)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task id. See [`TaskId`] for its (lack of) uniqueness guarantees.
    id: TaskId,

    /// The display title of the task
    title: String,

    /// The id of the owning goal
    #[serde(rename = "goalId")]
    goal_id: GoalId,

    /// Whether this task is done
    #[serde(default)]
    completed: bool,

    /// A CSS color, usually inherited from the owning goal
    color: String,

    /// The numeric id this task has in an external tracker, in case it was imported from one
    #[serde(rename = "externalId", default, skip_serializing_if = "Option::is_none")]
    external_id: Option<i64>,

    /// The collective (grouping) this task is counted under
    collective_id: String,

    /// How much effort this task is meant to receive, as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effort: Option<String>,
    /// The unit `effort` is counted in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effort_unit: Option<String>,

    /// Actions logged against this task, oldest first.
    /// `None` and an empty list both mean "nothing logged yet".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<TaskAction>>,
}

impl Task {
    /// Create a brand new, uncompleted task for the given goal.
    /// This will pick a new (random) task id.
    pub fn new(goal_id: GoalId, title: String, color: &Color, collective_id: String) -> Self {
        Self {
            id: TaskId::random(),
            title,
            goal_id,
            completed: false,
            color: color.to_hex_string(),
            external_id: None,
            collective_id,
            effort: None,
            effort_unit: None,
            actions: None,
        }
    }

    /// Create a task whose fields are all known already (e.g. one the backend sent back).
    /// Contrary to [`Task::new`], this performs no color normalization.
    pub fn new_with_parameters(id: TaskId, goal_id: GoalId, title: String, completed: bool,
                               color: String, collective_id: String,
                               external_id: Option<i64>,
                               effort: Option<String>, effort_unit: Option<String>,
                               actions: Option<Vec<TaskAction>>) -> Self
    {
        Self {
            id,
            title,
            goal_id,
            completed,
            color,
            external_id,
            collective_id,
            effort,
            effort_unit,
            actions,
        }
    }

    pub fn id(&self) -> &TaskId     { &self.id }
    pub fn title(&self) -> &str     { &self.title }
    pub fn goal_id(&self) -> &GoalId        { &self.goal_id }
    pub fn completed(&self) -> bool         { self.completed }
    pub fn color(&self) -> &str             { &self.color }
    pub fn external_id(&self) -> Option<i64>    { self.external_id }
    pub fn collective_id(&self) -> &str         { &self.collective_id }
    pub fn effort(&self) -> Option<&str>        { self.effort.as_deref() }
    pub fn effort_unit(&self) -> Option<&str>   { self.effort_unit.as_deref() }

    /// The actions logged against this task (empty slice if none were ever logged)
    pub fn actions(&self) -> &[TaskAction] {
        self.actions.as_deref().unwrap_or(&[])
    }

    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Set the display color. The color is stored in its hex form.
    pub fn set_color(&mut self, color: &Color) {
        self.color = color.to_hex_string();
    }

    pub fn set_effort(&mut self, effort: String, effort_unit: String) {
        self.effort = Some(effort);
        self.effort_unit = Some(effort_unit);
    }

    /// Change the owner id carried by this task.
    ///
    /// This does not move the task between goals by itself: the store looks tasks up under
    /// the goal this field points to. See [`CalendarState::update_task`](crate::CalendarState::update_task).
    pub fn set_goal_id(&mut self, goal_id: GoalId) {
        self.goal_id = goal_id;
    }

    /// Append an action record to this task's log
    pub fn push_action(&mut self, action: TaskAction) {
        self.actions.get_or_insert_with(Vec::new).push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_task_action_passthrough() {
        // An action record straight from the backend, including a field this crate knows nothing about
        let json = serde_json::json!({
            "actionId": "a-42",
            "actionTypeId": "nutrition.meal",
            "value1": "540",
            "value2": "kcal",
            "mealKind": "lunch",
        });

        let action: TaskAction = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(action.action_id.as_deref(), Some("a-42"));
        assert_eq!(action.value2.as_deref(), Some("kcal"));
        assert_eq!(action.extra.get("mealKind").unwrap(), "lunch");

        // The record must survive a round trip unchanged
        let back = serde_json::to_value(&action).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn serde_task_wire_names() {
        let task = Task::new_with_parameters(
            TaskId::from("t1"),
            GoalId::from("g1"),
            "Run".to_string(),
            false,
            "#fff".to_string(),
            "c1".to_string(),
            Some(7),
            None,
            None,
            None,
        );

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["goalId"], "g1");
        assert_eq!(json["collective_id"], "c1");
        assert_eq!(json["externalId"], 7);
        // Absent optionals must not appear on the wire
        assert!(json.get("effort").is_none());
        assert!(json.get("actions").is_none());

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
