//! The planner state, and every transition it supports

use std::fmt::{Display, Formatter};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};
use crate::goal::{Goal, GoalId};
use crate::task::{Task, TaskId};

/// The layout of the calendar pane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl Default for ViewMode {
    /// The layout the application starts in
    fn default() -> Self {
        ViewMode::Week
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
        }
    }
}

/// One snapshot of everything the planner displays: the calendar position,
/// the events, and the goals (that own the tasks).
///
/// This is a plain state container. It performs no I/O, it never fails, and it
/// only changes through the transition methods below. Transitions aimed at an
/// id that is not here are silently ignored (they only show up in `debug` logs),
/// so that callers can replay half-stale intents without bookkeeping.
///
/// Dates are deliberately kept as ISO-8601 *strings*, so that the whole tree
/// can travel through [`serde_json`] both ways without any conversion step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarState {
    /// The date the calendar pane is centered on, as ISO-8601 text
    #[serde(rename = "selectedDate")]
    selected_date: String,

    /// The current calendar layout
    #[serde(rename = "viewMode")]
    view_mode: ViewMode,

    /// Every scheduled event, in display order
    events: Vec<Event>,

    /// Every goal, in display order. Tasks live inside their goal.
    goals: Vec<Goal>,

    /// The goal the dashboard currently highlights, if any.
    /// This is never validated against `goals` and may well dangle
    /// (e.g. after the goal it points to got deleted).
    #[serde(rename = "selectedGoalId")]
    selected_goal_id: Option<GoalId>,
}

impl CalendarState {
    /// An empty planner, centered on the current date, in the default layout
    pub fn new() -> Self {
        Self {
            selected_date: Utc::now().to_rfc3339(),
            view_mode: ViewMode::default(),
            events: Vec::new(),
            goals: Vec::new(),
            selected_goal_id: None,
        }
    }

    pub fn selected_date(&self) -> &str     { &self.selected_date }
    pub fn view_mode(&self) -> ViewMode     { self.view_mode }
    pub fn events(&self) -> &[Event]        { &self.events }
    pub fn goals(&self) -> &[Goal]          { &self.goals }

    pub fn selected_goal_id(&self) -> Option<&GoalId> {
        self.selected_goal_id.as_ref()
    }

    /// Returns the first event carrying this id, if any
    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    /// Returns the first goal carrying this id, if any
    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id() == id)
    }

    /// Returns the goal `selected_goal_id` points to, unless it is unset or dangling
    pub fn selected_goal(&self) -> Option<&Goal> {
        self.selected_goal_id.as_ref()
            .and_then(|id| self.goal(id))
    }

    /// Move the calendar pane to this date.
    /// The text is stored as given, without any format check.
    pub fn set_selected_date(&mut self, date: String) {
        self.selected_date = date;
    }

    /// Switch the calendar pane layout
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Append an event. No id uniqueness check is performed.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the first event carrying the same id as `event` with it, as-is.
    /// The lookup key is the incoming event's own id, so an update can never
    /// change the id of a stored event.
    pub fn update_event(&mut self, event: Event) {
        match self.events.iter_mut().find(|existing| existing.id() == event.id()) {
            Some(existing) => *existing = event,
            None => log::debug!("Ignoring update of event {}: no such event", event.id()),
        }
    }

    /// Remove every event carrying this id
    pub fn delete_event(&mut self, id: &EventId) {
        let len_before = self.events.len();
        self.events.retain(|event| event.id() != id);
        if self.events.len() == len_before {
            log::debug!("Ignoring deletion of event {}: no such event", id);
        }
    }

    /// Append a goal, unless a goal with the same id is already here.
    ///
    /// This is the only guarded insertion: replaying the same "add goal" intent
    /// twice (a refresh racing a user action, say) must not duplicate the goal
    /// and its whole task sequence.
    pub fn add_goal(&mut self, goal: Goal) {
        if self.goals.iter().any(|existing| existing.id() == goal.id()) {
            log::debug!("Ignoring addition of goal {}: this id is already here", goal.id());
            return;
        }
        self.goals.push(goal);
    }

    /// Replace the first goal carrying the same id as `goal` with it, as-is
    /// (including its whole task sequence)
    pub fn update_goal(&mut self, goal: Goal) {
        match self.goals.iter_mut().find(|existing| existing.id() == goal.id()) {
            Some(existing) => *existing = goal,
            None => log::debug!("Ignoring update of goal {}: no such goal", goal.id()),
        }
    }

    /// Remove every goal carrying this id. Their tasks disappear with them.
    ///
    /// Events that referenced the goal, and `selected_goal_id` if it pointed
    /// there, are left untouched and may now dangle.
    pub fn delete_goal(&mut self, id: &GoalId) {
        let len_before = self.goals.len();
        self.goals.retain(|goal| goal.id() != id);
        if self.goals.len() == len_before {
            log::debug!("Ignoring deletion of goal {}: no such goal", id);
        }
    }

    /// Append a task to the goal its `goalId` points to.
    /// If no such goal is here, the task is dropped.
    pub fn add_task(&mut self, task: Task) {
        match self.goals.iter_mut().find(|goal| goal.id() == task.goal_id()) {
            Some(goal) => goal.push_task(task),
            None => log::debug!("Ignoring addition of task {}: no goal {}", task.id(), task.goal_id()),
        }
    }

    /// Replace the first task carrying the same id as `task`, under the goal
    /// `task.goal_id()` points to, with `task`, as-is.
    ///
    /// Note that the owning goal is looked up from the *incoming* task. An
    /// update that also changes `goalId` thus searches the new goal, finds no
    /// task with this id there, and is dropped: a task cannot change goals
    /// through this transition. Callers that re-parent a task delete it from
    /// the old goal and add it to the new one instead.
    pub fn update_task(&mut self, task: Task) {
        match self.goals.iter_mut().find(|goal| goal.id() == task.goal_id()) {
            Some(goal) => {
                let task_id = task.id().clone();
                let goal_id = task.goal_id().clone();
                if goal.replace_task(task) == false {
                    log::debug!("Ignoring update of task {}: goal {} has no such task", task_id, goal_id);
                }
            },
            None => log::debug!("Ignoring update of task {}: no goal {}", task.id(), task.goal_id()),
        }
    }

    /// Remove every task carrying this id from the given goal.
    /// If no such goal is here, nothing happens.
    pub fn delete_task(&mut self, goal_id: &GoalId, id: &TaskId) {
        match self.goals.iter_mut().find(|goal| goal.id() == goal_id) {
            Some(goal) => goal.remove_task(id),
            None => log::debug!("Ignoring deletion of task {}: no goal {}", id, goal_id),
        }
    }

    /// Highlight a goal (or clear the highlight with `None`).
    /// The id is not validated against `goals`.
    pub fn select_goal(&mut self, id: Option<GoalId>) {
        self.selected_goal_id = id;
    }

    /// Discard every goal (and, with them, every task)
    pub fn reset_goals(&mut self) {
        self.goals.clear();
    }

    /// Discard every event
    pub fn reset_events(&mut self) {
        self.events.clear();
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_calendar_state() {
        let mut state = CalendarState::new();
        state.set_selected_date("2024-05-06T08:00:00.000Z".to_string());
        state.set_view_mode(ViewMode::Day);
        state.select_goal(Some(GoalId::from("g1")));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selectedDate"], "2024-05-06T08:00:00.000Z");
        assert_eq!(json["viewMode"], "day");
        assert_eq!(json["selectedGoalId"], "g1");

        let retrieved: CalendarState = serde_json::from_value(json).unwrap();
        assert_eq!(state, retrieved);
    }

    #[test]
    fn state_from_empty_document() {
        // Documents saved by older versions may lack fields. Whole-struct
        // defaults must fill the gaps.
        let state: CalendarState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.view_mode(), ViewMode::Week);
        assert_eq!(state.events().len(), 0);
        assert_eq!(state.goals().len(), 0);
        assert_eq!(state.selected_goal_id(), None);
        assert_eq!(state.selected_goal(), None);
    }

    #[test]
    fn serde_view_mode() {
        assert_eq!(serde_json::to_string(&ViewMode::Month).unwrap(), r#""month""#);
        let retrieved: ViewMode = serde_json::from_str(r#""week""#).unwrap();
        assert_eq!(retrieved, ViewMode::Week);
        assert!(serde_json::from_str::<ViewMode>(r#""fortnight""#).is_err());
    }
}
