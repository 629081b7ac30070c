use boxarea_core::{group_by_building, BoxRecord};
use proptest::prelude::*;

fn arb_box() -> impl Strategy<Value = BoxRecord> {
    (
        0..6u32,
        0..100u32,
        -1000.0..1000.0f64,
        -1000.0..1000.0f64,
        -1000.0..1000.0f64,
        -1000.0..1000.0f64,
        prop_oneof![Just("Deur"), Just("Raam"), Just("deur")],
    )
        .prop_map(|(building, seq, x1, y1, x2, y2, cat)| {
            BoxRecord::new(format!("73310000000{building}_{seq:03}"), x1, y1, x2, y2, cat).unwrap()
        })
}

proptest! {
    #[test]
    fn prop_grouping_is_idempotent(boxes in proptest::collection::vec(arb_box(), 0..60)) {
        prop_assert_eq!(group_by_building(&boxes, "Deur"), group_by_building(&boxes, "Deur"));
    }

    #[test]
    fn prop_non_matching_boxes_contribute_nothing(
        boxes in proptest::collection::vec(arb_box(), 0..60)
    ) {
        let matching: Vec<BoxRecord> =
            boxes.iter().filter(|b| b.category() == "Deur").cloned().collect();
        prop_assert_eq!(group_by_building(&boxes, "Deur"), group_by_building(&matching, "Deur"));
    }

    #[test]
    fn prop_groups_only_buildings_with_matches(
        boxes in proptest::collection::vec(arb_box(), 0..60)
    ) {
        let grouped = group_by_building(&boxes, "Deur");
        for building in grouped.keys() {
            prop_assert!(boxes
                .iter()
                .any(|b| b.category() == "Deur" && b.building_id() == building.as_str()));
        }
        let with_doors = boxes.iter().filter(|b| b.category() == "Deur").count();
        prop_assert!(grouped.len() <= with_doors);
    }

    #[test]
    fn prop_group_total_matches_sequential_sum(
        boxes in proptest::collection::vec(arb_box(), 0..60)
    ) {
        let grouped = group_by_building(&boxes, "Deur");
        for (building, total) in &grouped {
            let expected = boxes
                .iter()
                .filter(|b| b.category() == "Deur" && b.building_id() == building.as_str())
                .fold(None::<f64>, |acc, b| Some(acc.map_or(b.area(), |s| s + b.area())));
            prop_assert_eq!(Some(*total), expected);
        }
    }
}

#[test]
fn test_empty_input() {
    assert!(group_by_building(&[], "Deur").is_empty());
}
