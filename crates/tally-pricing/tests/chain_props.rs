use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_pricing::{compose, Base, ModifierKind};

fn kind_strategy() -> impl Strategy<Value = ModifierKind> {
    prop_oneof![
        Just(ModifierKind::Milk),
        Just(ModifierKind::Sugar),
        Just(ModifierKind::Whip),
    ]
}

fn expected_label(base_label: &str, kinds: &[ModifierKind]) -> String {
    let mut label = base_label.to_string();
    for kind in kinds {
        label.push_str(", ");
        label.push_str(match kind {
            ModifierKind::Milk => "Milk",
            ModifierKind::Sugar => "Sugar",
            ModifierKind::Whip => "Whip",
        });
    }
    label
}

proptest! {
    #[test]
    fn prop_cost_is_base_plus_sum_of_surcharges(
        cents in 0i64..100_00,
        kinds in proptest::collection::vec(kind_strategy(), 0..8)
    ) {
        let base_cost = Decimal::new(cents, 2);
        let item = compose(Base::new(base_cost, "Item").boxed(), &kinds);

        let surcharges: Decimal = kinds.iter().map(ModifierKind::surcharge).sum();
        prop_assert_eq!(item.cost(), base_cost + surcharges);
    }

    #[test]
    fn prop_label_follows_construction_order(
        kinds in proptest::collection::vec(kind_strategy(), 0..8)
    ) {
        let item = compose(Base::new(dec!(2.00), "Simple").boxed(), &kinds);
        prop_assert_eq!(item.label(), expected_label("Simple", &kinds));
    }

    #[test]
    fn prop_cost_is_order_insensitive(
        kinds in proptest::collection::vec(kind_strategy(), 0..8)
    ) {
        let forward = compose(Base::new(dec!(2.00), "Simple").boxed(), &kinds);

        let mut reversed = kinds.clone();
        reversed.reverse();
        let backward = compose(Base::new(dec!(2.00), "Simple").boxed(), &reversed);

        prop_assert_eq!(forward.cost(), backward.cost());
    }

    #[test]
    fn prop_evaluation_is_idempotent(
        kinds in proptest::collection::vec(kind_strategy(), 0..8)
    ) {
        let item = compose(Base::new(dec!(2.00), "Simple").boxed(), &kinds);

        prop_assert_eq!(item.cost(), item.cost());
        prop_assert_eq!(item.label(), item.label());
    }
}

#[test]
fn milk_sugar_scenario() {
    let item = compose(
        Base::new(dec!(2.00), "Simple").boxed(),
        &[ModifierKind::Milk, ModifierKind::Sugar],
    );

    assert_eq!(item.cost(), dec!(2.80));
    assert_eq!(item.label(), "Simple, Milk, Sugar");
}
