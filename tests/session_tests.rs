//! Full-game tests: an agent playing fixed layouts to the end.

use proptest::prelude::*;

use sweep_kb::{Coord, GridDims, HazardField, Move, Session, SessionEnd, StepOutcome};

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

/// Same field and seed, same game.
#[test]
fn test_session_deterministic_with_seed() {
    let rows = [
        "..*.....",
        "........",
        "...*..*.",
        "........",
        "*.......",
        "........",
    ];
    let field = HazardField::from_rows(&rows).unwrap();

    let summary1 = Session::new(field.clone(), 2024).play().unwrap();
    let summary2 = Session::new(field, 2024).play().unwrap();

    assert_eq!(summary1, summary2);
}

/// A lone hazard in the corner is found without a second guess when the
/// opening lands on a zero.
#[test]
fn test_opening_on_zero_flags_corner_hazard() {
    let field = HazardField::from_rows(&[
        ".....",
        ".....",
        ".....",
        "....*",
    ])
    .unwrap();

    // Find a seed whose first guess reveals a zero far from the hazard
    let seed = (0..100)
        .find(|seed| {
            let mut session = Session::new(field.clone(), *seed);
            matches!(
                session.step().unwrap(),
                StepOutcome::Revealed(reveal) if reveal.hazard_count == 0
            )
        })
        .expect("some seed opens on a zero");

    let summary = Session::new(field, seed).play().unwrap();
    assert_eq!(summary.end, SessionEnd::Cleared);
    assert_eq!(summary.guesses, 1);
    assert_eq!(summary.flagged, 1);
    assert!(summary.all_flagged);
}

/// Every reveal carries the true count and safe moves are honest.
#[test]
fn test_step_reveals_match_field() {
    let field = HazardField::from_rows(&[
        "*....",
        ".....",
        "..*..",
        ".....",
    ])
    .unwrap();
    let mut session = Session::new(field.clone(), 7);

    loop {
        match session.step().unwrap() {
            StepOutcome::Revealed(reveal) => {
                let cell = reveal.chosen.cell();
                assert_eq!(reveal.hazard_count, field.nearby_hazards(cell));
                assert_eq!(reveal.report.cell, cell);
                if let Move::Safe(_) = reveal.chosen {
                    assert!(!field.is_hazard(cell));
                }
            }
            StepOutcome::Finished(end) => {
                if let SessionEnd::Detonated(cell) = end {
                    assert!(field.is_hazard(cell));
                }
                break;
            }
        }
    }
    assert!(session.end().is_some());
}

#[test]
fn test_single_cell_grid() {
    let clear = HazardField::new(GridDims::new(1, 1), std::iter::empty()).unwrap();
    let summary = Session::new(clear, 0).play().unwrap();
    assert_eq!(summary.end, SessionEnd::Cleared);
    assert_eq!(summary.probes, 1);

    // A lone hazard can only be found by stepping on it
    let hazard = HazardField::new(GridDims::new(1, 1), [c(0, 0)]).unwrap();
    let summary = Session::new(hazard, 0).play().unwrap();
    assert_eq!(summary.end, SessionEnd::Detonated(c(0, 0)));
    assert_eq!(summary.probes, 1);
    assert!(!summary.all_flagged);
}

/// The right-hand column only borders other hazards, so no reveal ever
/// mentions it and the session cannot clear, whatever the seed.
#[test]
fn test_walled_in_hazards_never_clear() {
    let field = HazardField::from_rows(&[
        "..**",
        "..**",
        "..**",
    ])
    .unwrap();

    for seed in 0..10 {
        let summary = Session::new(field.clone(), seed).play().unwrap();

        let SessionEnd::Detonated(cell) = summary.end else {
            panic!("seed {} ended {:?}", seed, summary.end);
        };
        assert!(field.is_hazard(cell));
        assert!(!summary.all_flagged);
        assert!(summary.flagged <= 3);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Sessions on real layouts never error and never run out of moves early.
    #[test]
    fn prop_sessions_end_cleanly(
        height in 2usize..=8,
        width in 2usize..=8,
        density in 0.0f64..0.3,
        layout_seed in any::<u64>(),
        seed in any::<u64>(),
    ) {
        let dims = GridDims::new(height, width);
        // Cheap deterministic layout from the seed
        let hazards: Vec<Coord> = dims
            .cells()
            .enumerate()
            .filter(|(i, _)| {
                let mixed = layout_seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add((*i as u64).wrapping_mul(1442695040888963407));
                ((mixed >> 33) as f64 / (1u64 << 31) as f64) < density
            })
            .map(|(_, cell)| cell)
            .collect();
        let field = HazardField::new(dims, hazards).unwrap();
        let clear_cells = dims.area() - field.hazard_count();

        let summary = Session::new(field.clone(), seed).play().unwrap();

        match summary.end {
            SessionEnd::Cleared => {
                prop_assert_eq!(summary.probes as usize, clear_cells);
                prop_assert!(summary.all_flagged);
            }
            SessionEnd::Detonated(cell) => prop_assert!(field.is_hazard(cell)),
            SessionEnd::Exhausted => prop_assert!(false, "exhausted with clear cells left"),
        }
        prop_assert!(summary.guesses <= summary.probes);
    }
}
