use aeromed_scoring::fatigue::{fatigue_injury_index, fatigue_injury_index_at};
use aeromed_scoring::location::{location_weight, BodyLocation};

#[test]
fn knee_complaint() {
    assert_eq!(fatigue_injury_index(Some(5.0), Some(50.0), "Knee"), Some(500.0));
}

#[test]
fn unweighted_location_has_no_index() {
    assert_eq!(fatigue_injury_index(Some(5.0), Some(50.0), "UnknownPlace"), None);
    assert_eq!(fatigue_injury_index(Some(5.0), Some(50.0), ""), None);
    // matching is case sensitive
    assert_eq!(fatigue_injury_index(Some(5.0), Some(50.0), "knee"), None);
}

#[test]
fn missing_inputs_have_no_index() {
    assert_eq!(fatigue_injury_index(None, Some(50.0), "Knee"), None);
    assert_eq!(fatigue_injury_index(Some(5.0), None, "Knee"), None);
}

#[test]
fn zero_inputs_count_as_missing() {
    assert_eq!(fatigue_injury_index(Some(0.0), Some(50.0), "Thorax"), None);
    assert_eq!(fatigue_injury_index(Some(4.0), Some(0.0), "Thorax"), None);
}

#[test]
fn weight_table() {
    let expected = [
        ("Thorax", 3),
        ("Thoracic Spine", 3),
        ("Lumbar Spine", 3),
        ("Pelvis and Buttocks", 3),
        ("Hip and Groin", 3),
        ("Head", 2),
        ("Shoulder", 2),
        ("Knee", 2),
        ("Thigh", 2),
        ("Wrist and Hand", 1),
        ("Forearm", 1),
        ("Leg/Ankle/Foot", 1),
        ("Elbow", 1),
        ("Neck", 0),
    ];
    for (location, weight) in expected {
        assert_eq!(location_weight(location), weight, "{location}");
    }
}

#[test]
fn portuguese_labels_share_weights() {
    for location in BodyLocation::ALL {
        assert_eq!(BodyLocation::from_label(location.label_pt()), Some(location));
        assert_eq!(location_weight(location.label_pt()), location.weight());
    }
    assert_eq!(fatigue_injury_index(Some(5.0), Some(50.0), "Joelho"), Some(500.0));
}

#[test]
fn result_is_rounded_to_two_decimals() {
    assert_eq!(
        fatigue_injury_index(Some(3.333), Some(10.0), "Elbow"),
        Some(33.33)
    );
    assert_eq!(
        fatigue_injury_index_at(Some(7.0), Some(62.5), BodyLocation::LumbarSpine),
        Some(1312.5)
    );
}

#[test]
fn non_decreasing_in_intensity_and_workload() {
    for location in BodyLocation::ALL {
        let mut previous = 0.0;
        for intensity in 1..=10 {
            let index =
                fatigue_injury_index_at(Some(f64::from(intensity)), Some(55.0), location).unwrap();
            assert!(index >= previous, "{location:?} intensity {intensity}");
            previous = index;
        }

        let mut previous = 0.0;
        for workload in (5..=100).step_by(5) {
            let index =
                fatigue_injury_index_at(Some(6.0), Some(f64::from(workload)), location).unwrap();
            assert!(index >= previous, "{location:?} workload {workload}");
            previous = index;
        }
    }
}
