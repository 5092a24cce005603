mod support;

use luckybet::config::Config;
use luckybet::domain::{money, DomainError, FinishingPlaces, Lucky};
use num_traits::Zero;
use rust_decimal_macros::dec;

use support::domain::{horse, places, ratio, whole};

#[test]
fn reference_card_settles_to_exact_payouts() {
    let config = Config::parse_toml(support::REFERENCE_CARD).expect("reference card");
    let places = config.finishing_places().expect("places");

    let expected = [("Martin", ratio(23, 5)), ("Mark", whole(2)), ("Paul", ratio(73, 5))];
    for (bettor, payout) in expected {
        let slip = config.slip(bettor).expect("slip");
        let lucky = slip.to_lucky().expect("lucky");
        assert_eq!(lucky.name(), "Lucky 15");

        let settlement = lucky.settle(&slip.stake(), &places).expect("settle");
        assert_eq!(settlement.combinations, 15);
        assert_eq!(settlement.payout, payout, "{bettor}");
    }
}

#[test]
fn reference_card_renders_in_pence() {
    let config = Config::parse_toml(support::REFERENCE_CARD).expect("reference card");
    let places = config.finishing_places().expect("places");
    let slip = config.slip("Paul").expect("slip");

    let lucky = slip.to_lucky().expect("lucky");
    let payout = lucky.winnings(&slip.stake(), &places).expect("payout");
    let rendered = config.currency.format(money::to_currency(&payout).expect("currency"));
    assert_eq!(rendered, "£14.60");
}

#[test]
fn lucky_seven_with_a_win_only_selection() {
    // X: 9/2, Y: 11/10, Z: 5, XY: 33/20, XZ: 15, YZ and XYZ: 0 -> 109/4
    let lucky = Lucky::new(vec![
        horse("X", 2, 1, Some((4, 3))),
        horse("Y", 1, 2, Some((5, 3))),
        horse("Z", 4, 1, None),
    ]);
    let card = places(&[("X", 1), ("Y", 3), ("Z", 1)]);

    let settlement = lucky.settle(&whole(7), &card).unwrap();
    assert_eq!(lucky.name(), "Lucky 7");
    assert_eq!(settlement.combinations, 7);
    assert_eq!(settlement.multiplier, ratio(109, 4));
    assert_eq!(settlement.unit_stake, ratio(1, 2));
    assert_eq!(settlement.payout, ratio(109, 8));
}

#[test]
fn single_evens_winner_without_each_way() {
    let lucky = Lucky::new(vec![horse("A", 1, 1, None)]);
    let payout = lucky.winnings(&whole(10), &places(&[("A", 1)])).unwrap();
    assert_eq!(payout, whole(10));
}

#[test]
fn winner_and_placer_double() {
    let lucky = Lucky::new(vec![
        horse("A", 1, 1, Some((2, 2))),
        horse("B", 3, 1, Some((4, 2))),
    ]);
    let payout = lucky
        .winnings(&whole(10), &places(&[("A", 1), ("B", 2)]))
        .unwrap();
    assert_eq!(payout, ratio(105, 8));
    assert_eq!(money::to_currency(&payout).unwrap(), dec!(13.13));
}

#[test]
fn nothing_placed_pays_nothing() {
    let lucky = Lucky::new(vec![
        horse("A", 1, 1, Some((4, 3))),
        horse("B", 3, 1, Some((4, 3))),
        horse("C", 9, 2, None),
    ]);
    let card = places(&[("A", 4), ("B", 7), ("C", 2)]);
    assert!(lucky.winnings(&whole(50), &card).unwrap().is_zero());
}

#[test]
fn zero_stake_pays_nothing() {
    let lucky = Lucky::new(vec![
        horse("A", 1, 1, Some((4, 3))),
        horse("B", 3, 1, Some((4, 3))),
    ]);
    let card = places(&[("A", 1), ("B", 1)]);
    assert!(lucky.winnings(&whole(0), &card).unwrap().is_zero());
}

#[test]
fn no_selections_pays_nothing_for_any_stake() {
    let lucky = Lucky::new(vec![]);
    for stake in [whole(0), whole(1), ratio(999, 7)] {
        let settlement = lucky.settle(&stake, &FinishingPlaces::new()).unwrap();
        assert_eq!(settlement.combinations, 0);
        assert!(settlement.payout.is_zero());
    }
}

#[test]
fn payout_is_linear_in_stake() {
    let lucky = Lucky::new(vec![
        horse("A", 5, 2, Some((5, 3))),
        horse("B", 11, 4, Some((4, 2))),
        horse("C", 7, 1, None),
        horse("D", 1, 3, Some((5, 4))),
    ]);
    let card = places(&[("A", 1), ("B", 2), ("C", 1), ("D", 4)]);

    let base = lucky.winnings(&whole(1), &card).unwrap();
    assert!(!base.is_zero());
    for stake in [whole(2), whole(15), ratio(1, 3), ratio(250, 7)] {
        let payout = lucky.winnings(&stake, &card).unwrap();
        assert_eq!(payout, &base * &stake);
    }
}

#[test]
fn repeated_settlement_is_independent() {
    let lucky = Lucky::new(vec![
        horse("A", 1, 1, Some((2, 2))),
        horse("B", 3, 1, Some((4, 2))),
    ]);
    let won = places(&[("A", 1), ("B", 2)]);
    let lost = places(&[("A", 5), ("B", 6)]);

    let first = lucky.winnings(&whole(10), &won).unwrap();
    assert!(lucky.winnings(&whole(10), &lost).unwrap().is_zero());
    assert_eq!(lucky.winnings(&whole(10), &won).unwrap(), first);
}

#[test]
fn missing_place_is_reported_not_assumed() {
    let lucky = Lucky::new(vec![horse("A", 1, 1, Some((2, 2))), horse("B", 3, 1, None)]);
    let result = lucky.winnings(&whole(10), &places(&[("A", 1)]));
    assert_eq!(
        result,
        Err(DomainError::MissingPlace {
            name: "B".to_string()
        })
    );
}
