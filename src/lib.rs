//! This crate provides the data core of a calendar-and-goals dashboard.
//!
//! The planner tree (the selected date, the calendar view mode, the events, and the goals that own tasks) lives in a [`CalendarState`]: a plain serializable state container that UI code reads snapshots from, and mutates only through a fixed set of transitions. The store itself never performs I/O and never fails; transitions aimed at records that are not there are silent no-ops.
//!
//! The connection to the backend is a thin REST wrapper in the [`client`] module, that can be used as a stand-alone module.
//!
//! These two halves meet in a [`Provider`](provider::Provider). \
//! A `Provider` owns the state and a pad backend. It refreshes the state from the persisted documents (by dispatching the regular transitions) and pushes snapshots back to the backend.

pub mod traits;

mod event;
pub use event::{Event, EventId};
mod goal;
pub use goal::{Goal, GoalId};
mod task;
pub use task::{Task, TaskAction, TaskId};
mod state;
pub use state::{CalendarState, ViewMode};
pub mod provider;
pub use provider::Provider;

pub mod client;
pub mod session;
pub mod pad;

pub mod config;
pub mod settings;
pub mod utils;
