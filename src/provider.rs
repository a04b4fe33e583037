//! This module ties the planner state to the backend that persists it

use std::error::Error;

use bitflags::bitflags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pad::PadId;
use crate::settings::Settings;
use crate::state::CalendarState;
use crate::traits::{self, PadSource};

/// The title of the pad the planner tree is persisted in
pub const PLANNER_PAD_TITLE: &str = "planner";
/// The title of the pad the settings are persisted in
pub const SETTINGS_PAD_TITLE: &str = "settings";

bitflags! {
    /// Which of the persisted documents a refresh or a push touches
    pub struct RefreshScope: u8 {
        /// The planner tree (selected date, view mode, events, goals)
        const PLANNER  = 1;
        /// The user preferences
        const SETTINGS = 2;
        /// Everything this crate persists
        const ALL = Self::PLANNER.bits | Self::SETTINGS.bits;
    }
}

/// What the planner pad actually holds: the state tree plus a write stamp
#[derive(Serialize, Deserialize)]
struct PlannerDocument {
    #[serde(rename = "savedAt")]
    saved_at: String,
    state: CalendarState,
}

/// What the settings pad actually holds
#[derive(Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(rename = "savedAt")]
    saved_at: String,
    settings: Settings,
}

/// Glue between the planner state and a backend that persists it.
///
/// The provider owns both the [`CalendarState`] and the [`Settings`]: UI code
/// receives this single context by reference, reads snapshots through
/// [`Provider::state`], and mutates through the transition methods of
/// [`Provider::state_mut`] (never through direct field writes).
///
/// `source` is usually a [`Client`](crate::client::Client), but integration
/// tests mock it with an in-memory [`PadSource`].
pub struct Provider<S: PadSource> {
    source: S,

    state: CalendarState,
    settings: Settings,

    planner_pad: Option<PadId>,
    settings_pad: Option<PadId>,
    last_refresh: Option<DateTime<Utc>>,
}

impl<S: PadSource> Provider<S> {
    /// Create a provider over a fresh default state. This does not start a connection;
    /// call [`Provider::refresh`] to populate the state from the backend.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CalendarState::new(),
            settings: Settings::default(),
            planner_pad: None,
            settings_pad: None,
            last_refresh: None,
        }
    }

    /// Returns the backend this provider persists into
    pub fn source(&self) -> &S              { &self.source }
    /// Returns the current planner state, for reading
    pub fn state(&self) -> &CalendarState   { &self.state }
    /// Returns the current user preferences, for reading
    pub fn settings(&self) -> &Settings     { &self.settings }

    /// Returns the planner state, to dispatch transitions into
    pub fn state_mut(&mut self) -> &mut CalendarState {
        &mut self.state
    }

    /// Returns the user preferences, to edit
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Returns the last time a refresh from the backend completed
    /// (or `None` in case none has completed yet)
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Fetch the persisted documents in `scope` and rebuild the local data from them.
    ///
    /// A document the backend does not have (nothing pushed yet) leaves the
    /// current data untouched; a document that does not parse is an error.
    pub async fn refresh(&mut self, scope: RefreshScope) -> Result<(), Box<dyn Error>> {
        log::info!("Starting a refresh.");

        if scope.contains(RefreshScope::PLANNER) {
            match self.fetch_document_text(PLANNER_PAD_TITLE).await? {
                None => log::info!("The backend holds no planner document yet, keeping the current state"),
                Some(text) => {
                    let document: PlannerDocument = serde_json::from_str(&text)?;
                    log::debug!("Refreshing from a planner document saved at {}", document.saved_at);
                    self.apply_planner_document(document);
                },
            }
        }

        if scope.contains(RefreshScope::SETTINGS) {
            match self.fetch_document_text(SETTINGS_PAD_TITLE).await? {
                None => log::info!("The backend holds no settings document yet, keeping the current settings"),
                Some(text) => {
                    let document: SettingsDocument = serde_json::from_str(&text)?;
                    log::debug!("Refreshing from a settings document saved at {}", document.saved_at);
                    self.settings = document.settings;
                },
            }
        }

        self.last_refresh = Some(Utc::now());
        Ok(())
    }

    /// Serialize the documents in `scope` and store them on the backend,
    /// creating the well-known pads on first use
    pub async fn push(&mut self, scope: RefreshScope) -> Result<(), Box<dyn Error>> {
        log::info!("Starting a push.");

        if scope.contains(RefreshScope::PLANNER) {
            let pad_id = self.get_or_create_planner_pad().await?;
            let document = PlannerDocument {
                saved_at: Utc::now().to_rfc3339(),
                state: self.state.clone(),
            };
            let text = serde_json::to_string(&document)?;
            self.source.set_pad_content(&pad_id, &text).await?;
        }

        if scope.contains(RefreshScope::SETTINGS) {
            let pad_id = self.get_or_create_settings_pad().await?;
            let document = SettingsDocument {
                saved_at: Utc::now().to_rfc3339(),
                settings: self.settings.clone(),
            };
            let text = serde_json::to_string(&document)?;
            self.source.set_pad_content(&pad_id, &text).await?;
        }

        Ok(())
    }

    /// Rebuild the planner state from a fetched document.
    ///
    /// This replays the document through the regular transitions rather than
    /// overwriting the state wholesale, so the fetched data gets the same
    /// guards as any other caller (e.g. goals sharing an id collapse into one).
    fn apply_planner_document(&mut self, document: PlannerDocument) {
        let fetched = document.state;

        self.state.reset_events();
        self.state.reset_goals();
        self.state.set_selected_date(fetched.selected_date().to_string());
        self.state.set_view_mode(fetched.view_mode());
        for event in fetched.events() {
            self.state.add_event(event.clone());
        }
        for goal in fetched.goals() {
            self.state.add_goal(goal.clone());
        }
        self.state.select_goal(fetched.selected_goal_id().cloned());
    }

    /// Returns the text of the named document, or `None` in case the backend
    /// has no such pad (or an empty one). This never creates the pad.
    async fn fetch_document_text(&mut self, title: &str) -> Result<Option<String>, Box<dyn Error>> {
        let pad_id = match title {
            PLANNER_PAD_TITLE => self.get_planner_pad().await?,
            _ => self.get_settings_pad().await?,
        };
        match pad_id {
            None => Ok(None),
            Some(id) => self.source.get_pad_content(&id).await,
        }
    }

    /// Return the planner pad id, or look it up on the backend if not known yet
    async fn get_planner_pad(&mut self) -> Result<Option<PadId>, Box<dyn Error>> {
        if let Some(id) = &self.planner_pad {
            return Ok(Some(id.clone()));
        }

        let found = traits::find_pad_by_title(&self.source, PLANNER_PAD_TITLE).await?;
        if let Some(id) = &found {
            log::debug!("The '{}' pad is {}", PLANNER_PAD_TITLE, id);
            self.planner_pad = Some(id.clone());
        }
        Ok(found)
    }

    /// Return the settings pad id, or look it up on the backend if not known yet
    async fn get_settings_pad(&mut self) -> Result<Option<PadId>, Box<dyn Error>> {
        if let Some(id) = &self.settings_pad {
            return Ok(Some(id.clone()));
        }

        let found = traits::find_pad_by_title(&self.source, SETTINGS_PAD_TITLE).await?;
        if let Some(id) = &found {
            log::debug!("The '{}' pad is {}", SETTINGS_PAD_TITLE, id);
            self.settings_pad = Some(id.clone());
        }
        Ok(found)
    }

    /// Return the planner pad id, creating the pad if the backend lacks it
    async fn get_or_create_planner_pad(&mut self) -> Result<PadId, Box<dyn Error>> {
        if let Some(id) = self.get_planner_pad().await? {
            return Ok(id);
        }

        log::info!("Creating the '{}' pad on the backend", PLANNER_PAD_TITLE);
        let pad = self.source.create_pad(PLANNER_PAD_TITLE).await?;
        let id = pad.id().to_string();
        self.planner_pad = Some(id.clone());
        Ok(id)
    }

    /// Return the settings pad id, creating the pad if the backend lacks it
    async fn get_or_create_settings_pad(&mut self) -> Result<PadId, Box<dyn Error>> {
        if let Some(id) = self.get_settings_pad().await? {
            return Ok(id);
        }

        log::info!("Creating the '{}' pad on the backend", SETTINGS_PAD_TITLE);
        let pad = self.source.create_pad(SETTINGS_PAD_TITLE).await?;
        let id = pad.id().to_string();
        self.settings_pad = Some(id.clone());
        Ok(id)
    }
}
