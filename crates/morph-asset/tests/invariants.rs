use morph_asset::{Angle, AngleSelection};
use proptest::prelude::*;

fn any_angle() -> impl Strategy<Value = Angle> {
    prop_oneof![
        Just(Angle::Front),
        Just(Angle::Side),
        Just(Angle::Back),
        Just(Angle::ThreeQuarter),
    ]
}

proptest! {
    #[test]
    fn prop_selection_never_empties(toggles in prop::collection::vec(any_angle(), 0..64)) {
        let mut sel = AngleSelection::default();
        for angle in toggles {
            sel.toggle(angle);
            prop_assert!(sel.len() >= 1);
        }
    }

    #[test]
    fn prop_selection_has_no_duplicates(toggles in prop::collection::vec(any_angle(), 0..64)) {
        let mut sel = AngleSelection::default();
        for angle in toggles {
            sel.toggle(angle);
        }
        let slice = sel.as_slice();
        for (i, a) in slice.iter().enumerate() {
            prop_assert!(!slice[i + 1..].contains(a));
        }
    }

    #[test]
    fn prop_refused_toggle_leaves_selection_unchanged(angle in any_angle()) {
        let mut sel = AngleSelection::single(angle);
        let before = sel.clone();
        prop_assert!(!sel.toggle(angle));
        prop_assert_eq!(sel, before);
    }
}
