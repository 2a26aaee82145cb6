use std::time::Duration;

use super::common::*;
use crate::analysis::domain::SpoilageStatus;

#[tokio::test]
async fn danger_zone_items_are_rejected_with_no_remaining_time() {
    let service = analysis_service();

    let result = service.analyze(&cooked_input(4.5, 25.0)).await;

    assert_eq!(result.status, SpoilageStatus::Reject);
    assert!(result.risk_score >= 85);
    assert_eq!(result.remaining_safe_hours, 0.0);
    assert!(result.reason.contains("Danger Zone"));
}

#[tokio::test]
async fn freshly_cooked_food_at_room_temperature_is_safe() {
    let service = analysis_service();

    let result = service.analyze(&cooked_input(0.5, 25.0)).await;

    assert_eq!(result.status, SpoilageStatus::Safe);
    assert_eq!(result.remaining_safe_hours, 3.5);
    assert!(result
        .handling_instruction
        .contains("Refrigerate immediately"));
}

#[tokio::test]
async fn refrigerated_cooked_food_keeps_a_long_window() {
    let service = analysis_service();

    let result = service.analyze(&cooked_input(24.0, 4.0)).await;

    assert_eq!(result.status, SpoilageStatus::Safe);
    assert_eq!(result.remaining_safe_hours, 48.0);
}

#[tokio::test]
async fn stale_raw_food_is_rejected_by_the_learned_boundary() {
    let service = analysis_service();

    let result = service.analyze(&raw_input(5.0, 20.0)).await;

    assert_eq!(result.status, SpoilageStatus::Reject);
    assert_eq!(result.remaining_safe_hours, 0.0);
}

#[tokio::test]
async fn frozen_food_stays_safe_with_an_exhausted_window() {
    let service = analysis_service();

    let result = service.analyze(&cooked_input(100.0, -5.0)).await;

    assert_eq!(result.status, SpoilageStatus::Safe);
    assert_eq!(result.remaining_safe_hours, 0.0);
}

#[tokio::test]
async fn guardrail_invariant_holds_across_the_danger_zone() {
    let service = analysis_service();

    for hours in [4.1, 6.0, 12.0, 48.0] {
        for temp in [20.1, 25.0, 40.0] {
            let result = service.analyze(&cooked_input(hours, temp)).await;
            assert_eq!(
                result.status,
                SpoilageStatus::Reject,
                "cooked {hours}h at {temp}°C must be rejected"
            );
            assert!(result.risk_score >= 85);
            assert_eq!(result.remaining_safe_hours, 0.0);
        }
    }
}

#[tokio::test]
async fn repeated_analysis_is_bit_identical() {
    let service = analysis_service();
    let input = cooked_input(3.0, 25.0);

    let first = service.analyze(&input).await;
    let second = service.analyze(&input).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn advisory_delay_never_changes_the_result() {
    let immediate = analysis_service();
    let delayed = analysis_service().with_advisory_delay(Duration::from_millis(5));
    let input = raw_input(1.0, 30.0);

    let baseline = immediate.analyze(&input).await;
    let slow = delayed.analyze(&input).await;

    assert_eq!(baseline, slow);
}

#[tokio::test]
async fn risk_scores_stay_in_the_documented_range() {
    let service = analysis_service();

    for hours in [0.0, 1.0, 3.0, 5.0, 24.0, 100.0] {
        for temp in [-5.0, 4.0, 12.0, 20.0, 25.0, 35.0] {
            for cooked in [true, false] {
                let result = service
                    .analyze(&named_input("Sweep", cooked, hours, temp))
                    .await;
                assert!(result.risk_score <= 100);
            }
        }
    }
}
