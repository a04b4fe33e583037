///! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use crate::event::Event;
use crate::goal::Goal;
use crate::state::CalendarState;
use crate::task::Task;

/// A debug utility that pretty-prints a whole planner state
pub fn print_state(state: &CalendarState) {
    println!("{} view, centered on {}", state.view_mode(), state.selected_date());
    print_event_list(state.events());
    print_goal_list(state.goals());
}

/// A debug utility that pretty-prints goals, tasks included
pub fn print_goal_list(goals: &[Goal]) {
    for goal in goals {
        println!("GOAL {} ({} {})\t{}", goal.title(), goal.effort(), goal.effort_unit(), goal.id());
        for task in goal.tasks() {
            print_task(task);
        }
    }
}

/// A debug utility that pretty-prints events
pub fn print_event_list(events: &[Event]) {
    for event in events {
        let all_day = if event.is_all_day() { " (all day)" } else { "" };
        println!("  {} -> {}{}\t{}\t{}", event.start(), event.end(), all_day, event.title(), event.id());
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} {}\t{}", completion, task.title(), task.id());
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    stdout.write_all(b"Press Enter to continue...").unwrap();
    stdout.flush().unwrap();
    stdin().read_exact(&mut [0]).unwrap();
}
