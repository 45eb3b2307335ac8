//! Property tests: state invariants hold after any command sequence.

use market_tycoon_core_rs::{Command, CompanyType, Engine, EngineConfig};
use proptest::prelude::*;

fn asset_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "OIL".to_string(),
        "BTC".to_string(),
        "NVDA".to_string(),
        "SHIB".to_string(),
        "GOLD".to_string(),
    ])
}

fn country_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "USA".to_string(),
        "CHE".to_string(),
        "DEU".to_string(),
        "XXX".to_string(),
    ])
}

fn company_kind() -> impl Strategy<Value = CompanyType> {
    prop::sample::select(CompanyType::ALL.to_vec())
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::NextDay),
        (0.0f64..2000.0).prop_map(|delta_time| Command::Tick { delta_time }),
        (0.1f64..8.0).prop_map(|speed| Command::SetSpeed { speed }),
        Just(Command::PauseGame),
        Just(Command::ResumeGame),
        Just(Command::DismissEventPopup),
        (asset_id(), 0.0f64..500.0, 1.0f64..200.0, any::<bool>()).prop_map(
            |(asset_id, quantity, price, is_buy)| Command::ExecuteTrade {
                asset_id,
                quantity,
                price,
                is_buy,
            }
        ),
        (
            asset_id(),
            1.0f64..100.0,
            1.0f64..200.0,
            prop::sample::select(vec![2u32, 5, 10, 7]),
            any::<bool>()
        )
            .prop_map(|(asset_id, quantity, price, leverage, is_short)| {
                Command::OpenMarginPosition {
                    asset_id,
                    quantity,
                    price,
                    leverage,
                    is_short,
                }
            }),
        asset_id().prop_map(|asset_id| Command::CloseMarginPosition { asset_id }),
        company_kind().prop_map(|kind| Command::EstablishCompany { kind, name: None }),
        Just(Command::UpgradeCompany {
            company_id: "company-1".to_string(),
        }),
        (-10_000.0f64..200_000.0).prop_map(|amount| Command::TakeLoan { amount }),
        (-10_000.0f64..200_000.0).prop_map(|amount| Command::RepayLoan { amount }),
        country_id().prop_map(|country_id| Command::ApplyImmigration { country_id }),
        (country_id(), -100.0f64..100_000.0)
            .prop_map(|(country_id, amount)| Command::DonateToParty { country_id, amount }),
        country_id().prop_map(|country_id| Command::Lobby {
            country_id,
            category: market_tycoon_core_rs::AssetCategory::Crypto,
        }),
    ]
}

fn assert_invariants(engine: &Engine) {
    let state = engine.state();

    for (factor, value) in &state.global_factors {
        assert!(
            (0.0..=1.0).contains(value),
            "factor {:?} out of range: {}",
            factor,
            value
        );
    }

    for asset in state.assets.values() {
        assert!(asset.price > 0.0, "{} price not positive", asset.id);
        assert!(asset.base_price > 0.0, "{} base not positive", asset.id);
    }

    assert!(state.player.loan.amount >= 0.0);
    assert!(state.player.loan.amount.is_finite());

    assert!(state.log.len() <= state.log.capacity());
    assert!(state.daily_news.len() <= engine.tunables().daily_news_capacity);

    for item in state.player.portfolio.values() {
        assert!(item.quantity > 0.0);
    }
    for position in state.player.margin_positions.values() {
        assert!(position.initial_margin > 0.0);
    }
    assert!(state.player.cash.is_finite());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_invariants_hold_for_any_session(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..60),
    ) {
        let mut engine = Engine::new(EngineConfig::standard(seed)).unwrap();
        engine.apply(Command::StartGame { country_id: "USA".to_string() });
        assert_invariants(&engine);
        for command in commands {
            engine.apply(command);
            assert_invariants(&engine);
        }
    }

    #[test]
    fn test_clock_is_total_over_arbitrary_input(
        delta in any::<f64>(),
        speed in any::<f64>(),
    ) {
        let mut engine = Engine::new(EngineConfig::standard(5)).unwrap();
        engine.apply(Command::StartGame { country_id: "USA".to_string() });
        engine.apply(Command::SetSpeed { speed });
        engine.apply(Command::Tick { delta_time: delta });
        assert_invariants(&engine);
        prop_assert!(engine.state().date.ticks.is_finite());
        prop_assert!(engine.state().date.ticks >= 0.0);
    }
}

#[test]
fn test_long_session_stays_bounded() {
    let mut engine = Engine::new(EngineConfig::standard(77)).unwrap();
    engine.apply(Command::StartGame {
        country_id: "USA".to_string(),
    });
    engine.apply(Command::TakeLoan { amount: 100_000.0 });
    for day in 0..400 {
        engine.apply(Command::NextDay);
        if day % 5 == 0 {
            engine.apply(Command::DismissEventPopup);
        }
        assert_invariants(&engine);
    }
    assert!(engine.state().player.loan.amount >= 100_000.0);
}
