//! Macro events, factor drift and the news ticker.
//!
//! Events carry deferred effects: generation only queues the popup and the
//! headline, and the factor shift lands when the player dismisses the popup.
//! Factor drift is the unconditional daily random walk, applied whether or
//! not an event fired.

use crate::engine::engine::Engine;
use crate::models::asset::{FactorMap, GlobalFactor};
use crate::models::log::LogCategory;
use crate::models::news::{GameEvent, NewsItem};

impl Engine {
    /// With the configured probability, queue one macro event against a
    /// uniformly chosen factor. Effects are not applied here.
    pub(crate) fn maybe_generate_event(&mut self) {
        if !self.rng.chance(self.tunables.event_probability) {
            return;
        }
        let Some(index) = self.rng.pick_index(GlobalFactor::ALL.len()) else {
            return;
        };
        let factor = GlobalFactor::ALL[index];
        let strengthens = self.rng.chance(0.5);
        let span = self.tunables.event_delta_max - self.tunables.event_delta_min;
        let magnitude = self.tunables.event_delta_min + self.rng.next_f64() * span;
        let delta = if strengthens { magnitude } else { -magnitude };

        let name = factor.display_name();
        let title = if strengthens {
            format!("Sudden shift: {name} strengthens")
        } else {
            format!("Sudden shift: {name} deteriorates")
        };
        let description = format!(
            "Analysts report a marked change in {name}; markets brace for knock-on effects."
        );

        let mut effects = FactorMap::new();
        effects.insert(factor, delta);
        let event = GameEvent {
            id: self.next_id("event"),
            title: title.clone(),
            description,
            effects,
        };
        self.state.major_event_queue.push_back(event);

        let item = NewsItem {
            id: self.next_id("news"),
            headline: title.clone(),
            date: self.state.date,
            is_major: true,
        };
        let cap = self.tunables.daily_news_capacity;
        self.state.push_news(item, cap);

        self.log(LogCategory::System, format!("Breaking: {title}."));
    }

    /// Daily random walk: every factor moves by `uniform(-1,1) * drift`,
    /// clamped to [0, 1]. Fixed iteration order over the factor set.
    pub(crate) fn drift_factors(&mut self) {
        let drift = self.tunables.factor_drift;
        for factor in GlobalFactor::ALL {
            let delta = self.rng.uniform_signed() * drift;
            self.state.nudge_factor(factor, delta);
        }
    }

    /// One minor ticker headline per day. Presentation only.
    pub(crate) fn publish_daily_ticker(&mut self) {
        let Some(index) = self.rng.pick_index(GlobalFactor::ALL.len()) else {
            return;
        };
        let factor = GlobalFactor::ALL[index];
        let mood = if self.state.factor(factor) >= 0.5 {
            "optimism"
        } else {
            "caution"
        };
        let item = NewsItem {
            id: self.next_id("news"),
            headline: format!(
                "Traders weigh {} with {mood} as the day opens.",
                factor.display_name()
            ),
            date: self.state.date,
            is_major: false,
        };
        let cap = self.tunables.daily_news_capacity;
        self.state.push_news(item, cap);
    }

    /// Pop the oldest queued event and apply its stored factor effects.
    pub(crate) fn handle_dismiss_event(&mut self) {
        let Some(event) = self.state.major_event_queue.pop_front() else {
            self.log(
                LogCategory::System,
                "No pending event to acknowledge.".to_string(),
            );
            return;
        };

        for (factor, delta) in &event.effects {
            self.state.nudge_factor(*factor, *delta);
        }
        self.log(
            LogCategory::System,
            format!("Acknowledged event: {}.", event.title),
        );
    }
}
