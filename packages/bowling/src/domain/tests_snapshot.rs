use serde_json::json;

use crate::domain::test_game_helpers::{game_after, roll_many};
use crate::domain::{Game, GameSnapshot, Mark};

#[test]
fn empty_game_snapshot() {
    let snap = Game::new().snapshot();
    assert_eq!(snap.current_frame, 1);
    assert!(!snap.game_over);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.frames.len(), 1);
    assert!(snap.frames[0].rolls.is_empty());
    assert_eq!(snap.frames[0].mark, None);
}

#[test]
fn snapshot_splits_rolls_per_frame() {
    let snap = game_after(&[10, 3, 7, 4, 2, 5]).snapshot();
    let rolls: Vec<Vec<u8>> = snap.frames.iter().map(|f| f.rolls.clone()).collect();
    assert_eq!(rolls, vec![vec![10], vec![3, 7], vec![4, 2], vec![5]]);

    let marks: Vec<Option<Mark>> = snap.frames.iter().map(|f| f.mark).collect();
    assert_eq!(marks, vec![Some(Mark::Strike), Some(Mark::Spare), None, None]);

    let completed: Vec<bool> = snap.frames.iter().map(|f| f.completed).collect();
    assert_eq!(completed, vec![true, true, true, false]);
}

#[test]
fn snapshot_running_totals_match_game() {
    let game = game_after(&[1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]);
    let snap = game.snapshot();
    let totals: Vec<u32> = snap.frames.iter().map(|f| f.running_total).collect();
    assert_eq!(totals, game.running_totals());
    assert_eq!(snap.score, game.score());
    assert!(snap.game_over);

    let tenth = snap.frames.last().unwrap();
    assert_eq!(tenth.rolls, vec![2, 8, 6]);
    assert_eq!(tenth.mark, Some(Mark::Spare));
}

#[test]
fn tenth_frame_keeps_fill_ball_in_snapshot() {
    let mut game = Game::new();
    roll_many(&mut game, 12, 10);
    let snap = game.snapshot();
    assert_eq!(snap.frames[9].rolls, vec![10, 10, 10]);
    assert_eq!(snap.frames[9].mark, Some(Mark::Strike));
    assert_eq!(snap.frames[9].running_total, 300);
}

#[test]
fn snapshot_serializes_to_stable_json() {
    let snap = game_after(&[10, 3]).snapshot();
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(
        value,
        json!({
            "current_frame": 2,
            "game_over": false,
            "score": 16,
            "frames": [
                {
                    "number": 1,
                    "rolls": [10],
                    "completed": true,
                    "mark": "strike",
                    "score": 13,
                    "running_total": 13
                },
                {
                    "number": 2,
                    "rolls": [3],
                    "completed": false,
                    "score": 3,
                    "running_total": 16
                }
            ]
        })
    );

    let back: GameSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snap);
}
