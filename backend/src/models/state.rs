//! Game state
//!
//! The single root aggregate owned by the engine. Every mutation flows
//! through `Engine::apply`; nothing outside the engine holds a mutable
//! reference to this struct.
//!
//! # Critical Invariants
//!
//! 1. **Factor bounds**: every global factor stays within [0, 1]
//! 2. **Calendar bounds**: `date.day ∈ [1, 30]`, `date.month ∈ [1, 12]`
//! 3. **Positive prices**: every asset price and base price stays above the
//!    configured floor
//! 4. **Determinism**: all keyed collections iterated during a tick are
//!    ordered (`BTreeMap`), so a fixed seed yields a fixed trajectory

use crate::core::time::GameDate;
use crate::models::asset::{Asset, FactorMap, GlobalFactor};
use crate::models::log::AuditLog;
use crate::models::news::{GameEvent, NewsItem};
use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Complete simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live market, keyed by asset id. Seeded from the asset templates.
    pub assets: BTreeMap<String, Asset>,
    pub date: GameDate,
    pub log: AuditLog,
    /// Macro factor levels, each clamped to [0, 1].
    pub global_factors: FactorMap,
    /// Ticker feed, newest first, bounded.
    pub daily_news: VecDeque<NewsItem>,
    /// Most recent major headline, if any.
    pub major_event_headline: Option<NewsItem>,
    /// Popup queue; effects apply on dismissal, oldest first.
    pub major_event_queue: VecDeque<GameEvent>,
    /// Real-time multiplier applied to tick deltas.
    pub game_speed: f64,
    pub is_paused: bool,
    pub has_started: bool,
}

impl GameState {
    /// Assemble the initial state. The game begins paused and not started;
    /// `StartGame` picks the residency and unpauses.
    pub fn new(
        assets: BTreeMap<String, Asset>,
        global_factors: FactorMap,
        player: Player,
        start_date: GameDate,
        log_capacity: usize,
    ) -> Self {
        Self {
            player,
            assets,
            date: start_date,
            log: AuditLog::new(log_capacity),
            global_factors,
            daily_news: VecDeque::new(),
            major_event_headline: None,
            major_event_queue: VecDeque::new(),
            game_speed: 1.0,
            is_paused: true,
            has_started: false,
        }
    }

    /// Current level of a factor, default-zero for robustness.
    pub fn factor(&self, factor: GlobalFactor) -> f64 {
        self.global_factors.get(&factor).copied().unwrap_or(0.0)
    }

    /// Shift a factor by `delta`, clamping the result to [0, 1].
    pub fn nudge_factor(&mut self, factor: GlobalFactor, delta: f64) {
        let current = self.factor(factor);
        self.global_factors
            .insert(factor, (current + delta).clamp(0.0, 1.0));
    }

    /// Push a headline onto the ticker, newest first, evicting past `cap`.
    pub fn push_news(&mut self, item: NewsItem, cap: usize) {
        if item.is_major {
            self.major_event_headline = Some(item.clone());
        }
        self.daily_news.push_front(item);
        while self.daily_news.len() > cap {
            self.daily_news.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Loan;

    fn minimal_state() -> GameState {
        let mut factors = FactorMap::new();
        factors.insert(GlobalFactor::OilSupply, 0.5);
        GameState::new(
            BTreeMap::new(),
            factors,
            Player::new(1_000_000.0, Loan::new(0.05, 100_000.0)),
            GameDate::new(2024, 1, 1),
            200,
        )
    }

    #[test]
    fn test_initial_flags() {
        let state = minimal_state();
        assert!(state.is_paused);
        assert!(!state.has_started);
        assert_eq!(state.game_speed, 1.0);
    }

    #[test]
    fn test_nudge_factor_clamps() {
        let mut state = minimal_state();
        state.nudge_factor(GlobalFactor::OilSupply, 2.0);
        assert_eq!(state.factor(GlobalFactor::OilSupply), 1.0);
        state.nudge_factor(GlobalFactor::OilSupply, -5.0);
        assert_eq!(state.factor(GlobalFactor::OilSupply), 0.0);
    }

    #[test]
    fn test_news_cap_and_major_banner() {
        let mut state = minimal_state();
        for i in 0..5 {
            state.push_news(
                NewsItem {
                    id: format!("news-{i}"),
                    headline: format!("headline {i}"),
                    date: state.date,
                    is_major: i == 3,
                },
                3,
            );
        }
        assert_eq!(state.daily_news.len(), 3);
        assert_eq!(state.daily_news[0].id, "news-4");
        assert_eq!(state.major_event_headline.as_ref().unwrap().id, "news-3");
    }
}
