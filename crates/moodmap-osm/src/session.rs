//! Caller-side state for an interactive discovery session.
//!
//! Holds the current mood, search centre, and live place list. Mood and
//! location changes trigger a refresh. Refreshes may overlap; each one takes a
//! ticket and its result is applied only if no newer refresh has been
//! requested since, so the most recently *requested* call wins regardless of
//! which response arrives first.

use std::sync::atomic::{AtomicU64, Ordering};

use moodmap_core::{Location, Mood, Place};
use tokio::sync::Mutex;

use crate::discovery::PlaceDiscovery;

/// What happened to the result of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The result replaced the live place list.
    Applied { places: usize },
    /// A newer refresh was requested while this one was in flight.
    Superseded,
}

#[derive(Debug)]
struct SessionState {
    mood: Option<Mood>,
    location: Location,
    places: Vec<Place>,
    selected: Option<String>,
}

pub struct DiscoverySession {
    discovery: PlaceDiscovery,
    state: Mutex<SessionState>,
    latest_ticket: AtomicU64,
}

impl DiscoverySession {
    /// Starts a session centred on `location` with no mood selected.
    #[must_use]
    pub fn new(discovery: PlaceDiscovery, location: Location) -> Self {
        Self {
            discovery,
            state: Mutex::new(SessionState {
                mood: None,
                location,
                places: Vec::new(),
                selected: None,
            }),
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub async fn set_mood(&self, mood: Option<Mood>) -> RefreshOutcome {
        self.state.lock().await.mood = mood;
        self.refresh().await
    }

    pub async fn set_location(&self, location: Location) -> RefreshOutcome {
        tracing::info!(location = %location.display_name, "search centre changed");
        self.state.lock().await.location = location;
        self.refresh().await
    }

    /// Re-runs discovery for the current mood and location.
    ///
    /// The state lock is not held across the network call.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let (mood, center) = {
            let state = self.state.lock().await;
            (state.mood, state.location.coordinates())
        };

        let places = self.discovery.discover(mood, center).await;

        let mut state = self.state.lock().await;
        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding superseded discovery result");
            return RefreshOutcome::Superseded;
        }
        let count = places.len();
        state.places = places;
        state.selected = None;
        RefreshOutcome::Applied { places: count }
    }

    pub async fn mood(&self) -> Option<Mood> {
        self.state.lock().await.mood
    }

    pub async fn location(&self) -> Location {
        self.state.lock().await.location.clone()
    }

    pub async fn places(&self) -> Vec<Place> {
        self.state.lock().await.places.clone()
    }

    /// Marks the place with `id` as selected. Returns it, or `None` if no
    /// live place has that id (the selection is then cleared).
    pub async fn select(&self, id: &str) -> Option<Place> {
        let mut state = self.state.lock().await;
        let place = state.places.iter().find(|p| p.id == id).cloned();
        state.selected = place.as_ref().map(|p| p.id.clone());
        place
    }

    pub async fn selected(&self) -> Option<Place> {
        let state = self.state.lock().await;
        let id = state.selected.as_deref()?;
        state.places.iter().find(|p| p.id == id).cloned()
    }
}
