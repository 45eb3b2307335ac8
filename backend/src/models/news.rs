//! News items and macro events.
//!
//! A `GameEvent` holds a factor shift that is *not* applied when the event is
//! generated; it sits in the major-event queue until the player dismisses the
//! popup, at which point the engine applies the stored effects. `NewsItem` is
//! purely presentational: a headline record the engine creates and never
//! mutates afterwards.

use crate::core::time::GameDate;
use crate::models::asset::FactorMap;
use serde::{Deserialize, Serialize};

/// A headline for the ticker or the major-event banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub headline: String,
    pub date: GameDate,
    pub is_major: bool,
}

/// A macro event with deferred factor effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Sparse factor → signed delta, applied (clamped) on dismissal.
    pub effects: FactorMap,
}
