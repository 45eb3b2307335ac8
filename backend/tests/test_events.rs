//! Macro events: generation, deferred effects, ticker bounds.

use market_tycoon_core_rs::{Command, Engine, EngineConfig};

fn eventful_engine(seed: u64) -> Engine {
    let mut config = EngineConfig::standard(seed);
    config.tunables.event_probability = 1.0;
    let mut engine = Engine::new(config).unwrap();
    engine.apply(Command::StartGame {
        country_id: "USA".to_string(),
    });
    engine
}

#[test]
fn test_generation_queues_but_does_not_apply() {
    let mut config = EngineConfig::standard(1);
    config.tunables.event_probability = 1.0;
    config.tunables.factor_drift = 0.0; // isolate the event channel
    let mut engine = Engine::new(config).unwrap();
    engine.apply(Command::StartGame {
        country_id: "USA".to_string(),
    });

    let factors_before = engine.state().global_factors.clone();
    engine.apply(Command::NextDay);

    let state = engine.state();
    assert_eq!(state.major_event_queue.len(), 1);
    assert_eq!(state.global_factors, factors_before);

    let headline = state.major_event_headline.as_ref().unwrap();
    assert!(headline.is_major);
}

#[test]
fn test_dismissal_applies_stored_delta() {
    let mut config = EngineConfig::standard(2);
    config.tunables.event_probability = 1.0;
    config.tunables.factor_drift = 0.0;
    let mut engine = Engine::new(config).unwrap();
    engine.apply(Command::StartGame {
        country_id: "USA".to_string(),
    });
    engine.apply(Command::NextDay);

    let event = engine.state().major_event_queue[0].clone();
    let (&factor, &delta) = event.effects.iter().next().unwrap();
    assert!(delta.abs() >= 0.05 && delta.abs() <= 0.20);
    let before = engine.state().global_factors[&factor];

    engine.apply(Command::DismissEventPopup);
    let after = engine.state().global_factors[&factor];
    assert!((after - (before + delta).clamp(0.0, 1.0)).abs() < 1e-12);
}

#[test]
fn test_dismissals_drain_oldest_first() {
    let mut engine = eventful_engine(3);
    engine.apply(Command::NextDay);
    engine.apply(Command::NextDay);
    engine.apply(Command::NextDay);
    assert_eq!(engine.state().major_event_queue.len(), 3);

    let first_id = engine.state().major_event_queue[0].id.clone();
    let second_id = engine.state().major_event_queue[1].id.clone();
    engine.apply(Command::DismissEventPopup);
    assert_eq!(engine.state().major_event_queue.len(), 2);
    assert_ne!(engine.state().major_event_queue[0].id, first_id);
    assert_eq!(engine.state().major_event_queue[0].id, second_id);
}

#[test]
fn test_dismiss_empty_queue_is_a_logged_rejection() {
    let mut engine = eventful_engine(4);
    let factors = engine.state().global_factors.clone();
    let log_len = engine.state().log.len();

    engine.apply(Command::DismissEventPopup);

    let state = engine.state();
    assert_eq!(state.global_factors, factors);
    assert_eq!(state.log.len(), log_len + 1);
}

#[test]
fn test_factors_clamped_under_sustained_events() {
    let mut engine = eventful_engine(5);
    for _ in 0..150 {
        engine.apply(Command::NextDay);
        engine.apply(Command::DismissEventPopup);
    }
    for (&factor, &level) in &engine.state().global_factors {
        assert!(
            (0.0..=1.0).contains(&level),
            "{factor:?} left the unit interval: {level}"
        );
    }
}

#[test]
fn test_ticker_stays_bounded_and_carries_majors() {
    let mut engine = eventful_engine(6);
    for _ in 0..60 {
        engine.apply(Command::NextDay);
    }
    let state = engine.state();
    assert!(state.daily_news.len() <= 30);
    assert!(state.daily_news.iter().any(|item| item.is_major));
    assert!(state.daily_news.iter().any(|item| !item.is_major));
}
