//! Scheduled calendar occurrences

use std::fmt::{Display, Formatter};

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::goal::GoalId;
use crate::task::TaskId;

/// The identifier of an [`Event`].
///
/// Unique within the events collection. The store never generates these on its own:
/// use [`EventId::random`] when creating events locally, or keep whatever id the backend assigned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId {
    content: String,
}
impl EventId {
    /// Generate a random EventId
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for EventId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for EventId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A scheduled calendar occurrence, optionally linked to a [`Goal`](crate::Goal) or a [`Task`](crate::Task)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The event id
    id: EventId,

    /// The display title of the event
    title: String,

    /// The start of the event, as ISO-8601 text.
    /// Timestamps stay text everywhere in the planner tree; parsing into date types happens at the UI boundary only.
    start: String,
    /// The end of the event, as ISO-8601 text
    end: String,

    /// The goal this event contributes to, if any
    #[serde(rename = "goalId", default, skip_serializing_if = "Option::is_none")]
    goal_id: Option<GoalId>,
    /// The task this event blocks time for, if any
    #[serde(rename = "taskId", default, skip_serializing_if = "Option::is_none")]
    task_id: Option<TaskId>,

    /// A CSS color for the calendar grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(rename = "allDay", default, skip_serializing_if = "Option::is_none")]
    all_day: Option<bool>,

    /// The id this event has in an external calendar system, in case it was imported from one
    #[serde(rename = "externalId", default, skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
}

impl Event {
    /// Create a brand new event. This will pick a new (random) event id.
    pub fn new(title: String, start: String, end: String) -> Self {
        Self {
            id: EventId::random(),
            title,
            start,
            end,
            goal_id: None,
            task_id: None,
            color: None,
            all_day: None,
            external_id: None,
        }
    }

    /// Create an event whose fields are all known already (e.g. one the backend sent back).
    /// Contrary to [`Event::new`], this performs no normalization whatsoever.
    pub fn new_with_parameters(id: EventId, title: String, start: String, end: String,
                               goal_id: Option<GoalId>, task_id: Option<TaskId>,
                               color: Option<String>, all_day: Option<bool>,
                               external_id: Option<String>) -> Self
    {
        Self {
            id,
            title,
            start,
            end,
            goal_id,
            task_id,
            color,
            all_day,
            external_id,
        }
    }

    pub fn id(&self) -> &EventId    { &self.id }
    pub fn title(&self) -> &str     { &self.title }
    pub fn start(&self) -> &str     { &self.start }
    pub fn end(&self) -> &str       { &self.end }
    pub fn color(&self) -> Option<&str>          { self.color.as_deref() }
    pub fn goal_id(&self) -> Option<&GoalId>     { self.goal_id.as_ref() }
    pub fn task_id(&self) -> Option<&TaskId>     { self.task_id.as_ref() }
    pub fn external_id(&self) -> Option<&str>    { self.external_id.as_deref() }

    /// Whether this event spans whole days rather than a time range.
    /// An absent flag counts as `false`.
    pub fn is_all_day(&self) -> bool {
        self.all_day.unwrap_or(false)
    }

    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    /// Reschedule this event. Both bounds are ISO-8601 text, like the ones given at creation.
    pub fn set_times(&mut self, start: String, end: String) {
        self.start = start;
        self.end = end;
    }

    pub fn set_all_day(&mut self, all_day: bool) {
        self.all_day = Some(all_day);
    }

    /// Set the display color. The color is stored in its hex form.
    pub fn set_color(&mut self, color: &Color) {
        self.color = Some(color.to_hex_string());
    }

    /// Point this event to a goal (or detach it with `None`)
    pub fn set_goal_id(&mut self, goal_id: Option<GoalId>) {
        self.goal_id = goal_id;
    }

    /// Point this event to a task (or detach it with `None`)
    pub fn set_task_id(&mut self, task_id: Option<TaskId>) {
        self.task_id = task_id;
    }
}
