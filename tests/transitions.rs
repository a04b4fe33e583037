//! Tests of the planner store: every transition, and the guarantees they give

use corkboard::{CalendarState, Event, EventId, Goal, GoalId, Task, TaskId, ViewMode};

fn sample_goal(id: &str, title: &str) -> Goal {
    Goal::new_with_parameters(
        GoalId::from(id),
        title.to_string(),
        "#fff".to_string(),
        "0".to_string(),
        "min".to_string(),
        Vec::new(),
    )
}

fn sample_task(id: &str, goal_id: &str, title: &str, completed: bool) -> Task {
    Task::new_with_parameters(
        TaskId::from(id),
        GoalId::from(goal_id),
        title.to_string(),
        completed,
        "#fff".to_string(),
        "c1".to_string(),
        None,
        None,
        None,
        None,
    )
}

fn sample_event(id: &str, title: &str) -> Event {
    Event::new_with_parameters(
        EventId::from(id),
        title.to_string(),
        "2024-05-06T08:00:00.000Z".to_string(),
        "2024-05-06T09:00:00.000Z".to_string(),
        None, None, None, None, None,
    )
}

#[test]
fn initial_state() {
    let state = CalendarState::new();
    assert_eq!(state.view_mode(), ViewMode::Week);
    assert_eq!(state.events().len(), 0);
    assert_eq!(state.goals().len(), 0);
    assert_eq!(state.selected_goal_id(), None);
    // The initial selected date is "now", whatever that is, but it is set
    assert!(state.selected_date().is_empty() == false);
}

#[test]
fn selected_date_and_view_mode_are_stored_as_given() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.set_view_mode(ViewMode::Day);
    assert_eq!(state.view_mode(), ViewMode::Day);

    // No format validation happens here: that is the caller's responsibility
    state.set_selected_date("not even a date".to_string());
    assert_eq!(state.selected_date(), "not even a date");
}

#[test]
fn add_goal_is_guarded_against_duplicate_ids() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_goal(sample_goal("g2", "Reading"));

    // However many times a goal with a given id gets added...
    state.add_goal(sample_goal("g1", "Health"));
    state.add_goal(sample_goal("g1", "An impostor"));

    // ...exactly one goal with that id is here, and it is the first one
    let matching: Vec<&Goal> = state.goals().iter()
        .filter(|goal| goal.id() == &GoalId::from("g1"))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title(), "Health");
    assert_eq!(state.goals().len(), 2);
}

#[test]
fn delete_goal_discards_its_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_goal(sample_goal("g2", "Reading"));
    state.add_task(sample_task("t1", "g1", "Run", false));
    state.add_task(sample_task("t2", "g1", "Stretch", false));
    state.add_task(sample_task("t3", "g2", "One chapter", false));

    state.delete_goal(&GoalId::from("g1"));

    // The goal is gone, and both its tasks went with it
    assert_eq!(state.goal(&GoalId::from("g1")), None);
    assert_eq!(state.goals().len(), 1);
    let remaining: usize = state.goals().iter().map(|goal| goal.tasks().len()).sum();
    assert_eq!(remaining, 1);
    assert_eq!(state.goals()[0].tasks()[0].id(), &TaskId::from("t3"));
}

#[test]
fn updates_aimed_at_missing_ids_leave_collections_unchanged() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_event(sample_event("e1", "Standup"));
    state.add_goal(sample_goal("g1", "Health"));
    let before = state.clone();

    state.update_event(sample_event("nope", "Ghost"));
    state.update_goal(sample_goal("nope", "Ghost"));
    state.update_task(sample_task("nope", "g1", "Ghost", false));

    // Length and contents, identical
    assert_eq!(state, before);
}

#[test]
fn updates_match_on_the_payload_id() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_task(sample_task("t1", "g1", "Run", false));
    state.add_event(sample_event("e1", "Standup"));

    // A payload carrying an unknown id must not touch the stored records,
    // however similar the rest of it looks: stored ids can never be rewritten
    state.update_task(sample_task("t9", "g1", "Run", true));
    state.update_event(sample_event("e9", "Standup"));

    assert_eq!(state.goals()[0].tasks().len(), 1);
    assert_eq!(state.goals()[0].tasks()[0].id(), &TaskId::from("t1"));
    assert_eq!(state.goals()[0].tasks()[0].completed(), false);
    assert_eq!(state.events().len(), 1);
    assert_eq!(state.events()[0].id(), &EventId::from("e1"));
}

#[test]
fn delete_task_with_an_unknown_goal_is_a_no_op() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_task(sample_task("t1", "g1", "Run", false));
    let before = state.clone();

    state.delete_task(&GoalId::from("not-a-goal"), &TaskId::from("t1"));
    assert_eq!(state, before);
}

#[test]
fn add_task_after_reset_goals_is_a_no_op() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.reset_goals();

    // The goal this task references does not exist anymore
    state.add_task(sample_task("t1", "g1", "Run", false));
    assert_eq!(state.goals().len(), 0);
}

#[test]
fn test_goal_task_lifecycle() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_task(sample_task("t1", "g1", "Run", false));

    assert_eq!(state.goals()[0].tasks().len(), 1);
    assert_eq!(state.goals()[0].tasks()[0].id(), &TaskId::from("t1"));
    assert_eq!(state.goals()[0].tasks()[0].completed(), false);

    state.update_task(sample_task("t1", "g1", "Run", true));
    assert_eq!(state.goals()[0].tasks()[0].completed(), true);

    state.delete_task(&GoalId::from("g1"), &TaskId::from("t1"));
    assert_eq!(state.goals()[0].tasks().len(), 0);
}

#[test]
fn update_task_does_not_move_a_task_between_goals() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.add_goal(sample_goal("g2", "Reading"));
    state.add_task(sample_task("t1", "g1", "Run", false));

    // The incoming task claims a new owner: the lookup happens under g2,
    // where no t1 exists, so this update is dropped entirely
    state.update_task(sample_task("t1", "g2", "Run", true));

    let g1 = state.goal(&GoalId::from("g1")).unwrap();
    let g2 = state.goal(&GoalId::from("g2")).unwrap();
    assert_eq!(g1.tasks().len(), 1);
    assert_eq!(g1.tasks()[0].completed(), false);
    assert_eq!(g2.tasks().len(), 0);
}

#[test]
fn delete_event_removes_every_match() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    // add_event performs no uniqueness check, so duplicates can happen
    state.add_event(sample_event("e1", "Standup"));
    state.add_event(sample_event("e1", "Standup (again)"));
    state.add_event(sample_event("e2", "Lunch"));
    assert_eq!(state.events().len(), 3);

    state.delete_event(&EventId::from("e1"));
    assert_eq!(state.events().len(), 1);
    assert_eq!(state.events()[0].id(), &EventId::from("e2"));

    state.reset_events();
    assert_eq!(state.events().len(), 0);
}

#[test]
fn delete_task_removes_every_match() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    // add_task performs no task id uniqueness check, so duplicates can happen
    state.add_task(sample_task("t1", "g1", "Run", false));
    state.add_task(sample_task("t1", "g1", "Run (again)", false));
    state.add_task(sample_task("t2", "g1", "Stretch", false));
    assert_eq!(state.goals()[0].tasks().len(), 3);

    state.delete_task(&GoalId::from("g1"), &TaskId::from("t1"));

    assert_eq!(state.goals()[0].tasks().len(), 1);
    assert_eq!(state.goals()[0].tasks()[0].id(), &TaskId::from("t2"));
}

#[test]
fn update_event_replaces_the_first_match() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_event(sample_event("e1", "Standup"));
    state.add_event(sample_event("e2", "Lunch"));

    let mut rescheduled = sample_event("e2", "Lunch");
    rescheduled.set_times("2024-05-06T12:30:00.000Z".to_string(),
                          "2024-05-06T13:30:00.000Z".to_string());
    state.update_event(rescheduled);

    assert_eq!(state.events().len(), 2);
    assert_eq!(state.event(&EventId::from("e2")).unwrap().start(), "2024-05-06T12:30:00.000Z");
    assert_eq!(state.event(&EventId::from("e1")).unwrap().title(), "Standup");
}

#[test]
fn the_selected_goal_may_dangle() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state = CalendarState::new();
    state.add_goal(sample_goal("g1", "Health"));
    state.select_goal(Some(GoalId::from("g1")));
    assert_eq!(state.selected_goal().unwrap().title(), "Health");

    // Deleting the selected goal does not touch the selection
    state.delete_goal(&GoalId::from("g1"));
    assert_eq!(state.selected_goal_id(), Some(&GoalId::from("g1")));
    assert_eq!(state.selected_goal(), None);

    state.select_goal(None);
    assert_eq!(state.selected_goal_id(), None);
}
