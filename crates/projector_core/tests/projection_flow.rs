//! Integration tests for the full projection flow.
//!
//! These tests run the pipeline end to end: build a snapshot frame, resolve
//! starting conditions, project the standard catalogue, and summarize the
//! results, checking the economics of each scenario along the way.

use chrono::NaiveDate;
use projector_core::analysis::{first_crossing, ReserveThreshold};
use projector_core::engine::{project, run_catalogue, ProjectionConfig};
use projector_core::frame::{SeriesColumn, SeriesFrame};
use projector_core::resolver::{SnapshotColumns, StartingConditions};
use projector_core::scenario::{ScenarioCatalogue, ScenarioId};
use projector_core::schedule::RunoffSchedule;
use projector_core::summary::summarize;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A snapshot frame shaped like the combined upstream download: monthly
/// reserves in billions, daily RRP in millions, weekly TGA in millions.
fn snapshot_frame() -> SeriesFrame {
    SeriesFrame::new(
        vec![
            date(2025, 10, 1),
            date(2025, 11, 1),
            date(2025, 12, 1),
            date(2026, 1, 2),
            date(2026, 1, 28),
        ],
        vec![
            SeriesColumn::new(
                "TOTRESNS",
                vec![Some(3150.0), Some(3080.0), Some(3000.0), None, None],
            ),
            SeriesColumn::new(
                "RRPONTSYD",
                vec![
                    Some(280_000.0),
                    Some(220_000.0),
                    None,
                    Some(150_000.0),
                    None,
                ],
            ),
            SeriesColumn::new(
                "WTREGEN",
                vec![None, Some(720_000.0), None, None, Some(650_000.0)],
            ),
        ],
    )
    .unwrap()
}

// ============================================================================
// End-to-End Flow Tests
// ============================================================================

/// Test the whole pipeline from raw frame to summary records.
#[test]
fn test_frame_to_summary_flow() {
    let start =
        StartingConditions::from_frame(&snapshot_frame(), &SnapshotColumns::default()).unwrap();
    assert_eq!(start.reserves(), 3000.0);
    assert_eq!(start.rrp(), 150.0);
    assert_eq!(start.tga(), 650.0);

    let catalogue = ScenarioCatalogue::standard();
    let config = ProjectionConfig::default();
    let runs = run_catalogue(&start, &catalogue, &config).unwrap();
    assert_eq!(runs.len(), 4);

    let records = summarize(&catalogue, &runs, start.reserves()).unwrap();
    assert_eq!(records.len(), 4);

    // Catalogue order survives all the way into the summary.
    let ids: Vec<ScenarioId> = records.iter().map(|r| r.scenario).collect();
    assert_eq!(ids, ScenarioId::all());
}

/// Test that scenario economics rank the way policy intuition says they must.
#[test]
fn test_scenario_ordering_is_economically_sensible() {
    let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
    let catalogue = ScenarioCatalogue::standard();
    let runs = run_catalogue(&start, &catalogue, &ProjectionConfig::default()).unwrap();

    let hawk = runs.get(ScenarioId::Hawk).unwrap();
    let moderate = runs.get(ScenarioId::Moderate).unwrap();
    let duration_shift = runs.get(ScenarioId::DurationShift).unwrap();
    let reversal = runs.get(ScenarioId::CrisisReversal).unwrap();

    // Faster runoff ends lower, month by month and at the horizon.
    for month in 1..=24 {
        assert!(
            hawk.reserves()[month] <= moderate.reserves()[month],
            "hawk above moderate at month {}",
            month
        );
        assert!(
            moderate.reserves()[month] <= duration_shift.reserves()[month],
            "moderate above duration shift at month {}",
            month
        );
    }

    // The reversal shares the hawk path before its trigger and ends highest
    // of the draining paths.
    assert_eq!(&reversal.reserves()[..6], &hawk.reserves()[..6]);
    assert!(reversal.reserves()[24] > hawk.reserves()[24]);
}

/// Test crossing months against the threshold ladder.
#[test]
fn test_threshold_crossings_at_reference_conditions() {
    let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
    let catalogue = ScenarioCatalogue::standard();
    let runs = run_catalogue(&start, &catalogue, &ProjectionConfig::default()).unwrap();
    let records = summarize(&catalogue, &runs, start.reserves()).unwrap();

    let hawk = &records[0];
    let moderate = &records[1];
    let duration_shift = &records[2];

    // Hawk reaches both thresholds, and no later than Moderate does.
    let hawk_ample = hawk.months_to_ample.unwrap();
    assert!(hawk.months_to_caution.unwrap() > hawk_ample);
    if let Some(moderate_ample) = moderate.months_to_ample {
        assert!(hawk_ample <= moderate_ample);
    }

    // With no runoff at all, reserves stay comfortably above caution.
    assert_eq!(duration_shift.months_to_caution, None);

    // The starting point already sits at the abundant line, so that
    // crossing is immediate for every scenario.
    for (_, trajectory) in runs.iter() {
        assert_eq!(
            first_crossing(trajectory.reserves(), ReserveThreshold::Abundant.level_bn()),
            Some(0)
        );
    }
}

/// Test that a drained buffer and a seeded cycle reproduce the hand-derived
/// first step.
#[test]
fn test_first_month_accounting_identity() {
    let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
    let config = ProjectionConfig::default();
    let trajectory = project(&start, &RunoffSchedule::constant(95.0), &config).unwrap();

    let delta_tga = config.tga_cycle.level_at(1) - 650.0;
    let expected = 3000.0 - 95.0 - 150.0 - delta_tga - 5.5 - 2.0;
    assert!(
        (trajectory.reserves()[1] - expected).abs() < 1e-9,
        "first step {} differs from identity {}",
        trajectory.reserves()[1],
        expected
    );
}

/// Test a depleted system: the floor engages and the flags say where.
#[test]
fn test_depleted_system_floors_at_zero() {
    let start = StartingConditions::new(200.0, 0.0, 650.0).unwrap();
    let catalogue = ScenarioCatalogue::standard();
    let runs = run_catalogue(&start, &catalogue, &ProjectionConfig::default()).unwrap();

    let hawk = runs.get(ScenarioId::Hawk).unwrap();
    assert!(hawk.ever_floored());
    let first_floored = hawk.floored().iter().position(|f| *f).unwrap();
    assert_eq!(hawk.reserves()[first_floored], 0.0);

    // Every level is still non-negative everywhere.
    for (_, trajectory) in runs.iter() {
        assert!(trajectory.reserves().iter().all(|level| *level >= 0.0));
    }
}

/// Test that shortening the horizon degrades the summary gracefully.
#[test]
fn test_short_horizon_summary_keeps_sentinels() {
    let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
    let catalogue = ScenarioCatalogue::standard();
    let config = ProjectionConfig {
        horizon_months: 10,
        ..ProjectionConfig::default()
    };
    let runs = run_catalogue(&start, &catalogue, &config).unwrap();
    let records = summarize(&catalogue, &runs, start.reserves()).unwrap();

    for record in &records {
        assert_eq!(record.reserves_at_12m, None);
        assert_eq!(record.reserves_at_24m, None);
        // The reduction is still measured, over the 10 months that exist.
        assert!(record.total_reduction_bn.is_finite());
    }
}
