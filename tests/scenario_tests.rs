// tests/scenario_tests.rs
//
// Сквозные сценарии одной партии:
//  A) NewGame("alice") → Waiting, 1 игрок, владелец alice
//  B) JoinGame("bob") → 2 игрока, цвета разные
//  C) StartGame не владельцем → Unauthorized; владельцем → Started
//  D) 2 игрока, 4 штриха по очереди → Voting на 4-м
//  E) alice против bob, bob против alice → Over, по одному голосу
//  F) штрих не в свой ход → NotYourTurn, журнал не меняется

mod common;

use std::collections::BTreeSet;

use drawvote_engine::domain::GameStage;
use drawvote_engine::ErrorKind;

use common::{line, make_registry};

#[test]
fn scenario_a_new_game_has_single_owner_in_waiting() {
    let (registry, notifier) = make_registry(1);

    let snapshot = registry.new_game("alice", None).unwrap();

    assert_eq!(snapshot.stage, GameStage::Waiting);
    assert_eq!(snapshot.owner, "alice");
    assert_eq!(snapshot.players.len(), 1);
    assert_eq!(snapshot.players["alice"].color, "darkgreen");
    assert_eq!(snapshot.players["alice"].votes, 0);
    assert_eq!(snapshot.players["alice"].voted_against, "");
    assert_eq!(snapshot.turn_index, 0);
    assert!(snapshot.strokes.is_empty());
    assert!(snapshot.id < 10_000);

    // NewGame ничего не рассылает.
    assert_eq!(notifier.publish_count(), 0);
    assert_eq!(registry.snapshot(snapshot.id), Some(snapshot));
}

#[test]
fn scenario_b_join_adds_player_with_distinct_color() {
    let (registry, notifier) = make_registry(2);
    let id = registry.new_game("alice", None).unwrap().id;

    let snapshot = registry.join_game(id, "bob", None).unwrap();

    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.players["bob"].color, "darkblue");
    assert_ne!(snapshot.players["alice"].color, snapshot.players["bob"].color);
    assert_eq!(snapshot.turn_order, vec!["alice", "bob"]);

    assert_eq!(notifier.publish_count(), 1);
    assert_eq!(notifier.last_published().as_deref(), Some(&snapshot));
}

#[test]
fn scenario_c_only_owner_can_start() {
    let (registry, _) = make_registry(3);
    let id = registry.new_game("alice", None).unwrap().id;
    registry.join_game(id, "bob", None).unwrap();

    let err = registry.start_game(id, "bob").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(registry.stage(id), Some(GameStage::Waiting));

    registry.start_game(id, "alice").unwrap();
    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.stage, GameStage::Started);
    assert_eq!(snapshot.turn_index, 0);

    let order: BTreeSet<_> = snapshot.turn_order.iter().cloned().collect();
    let expected: BTreeSet<_> = ["alice", "bob"].iter().map(|s| s.to_string()).collect();
    assert_eq!(snapshot.turn_order.len(), 2);
    assert_eq!(order, expected);
}

#[test]
fn scenario_d_fourth_stroke_opens_voting() {
    let (registry, notifier) = make_registry(4);
    let id = common::started_game(&registry, "alice", &["bob"]);
    let publishes_before = notifier.publish_count();

    for turn in 0..4 {
        let current = registry.current_turn(id).expect("ход должен быть");
        registry.draw_stroke(id, &current, line(turn)).unwrap();

        let expected = if turn < 3 { GameStage::Started } else { GameStage::Voting };
        assert_eq!(registry.stage(id), Some(expected), "после штриха {turn}");
    }

    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.strokes.len(), 4);
    assert_eq!(snapshot.turn_index, 4);
    // Рассылка на каждый штрих, включая тот, что перевёл в Voting.
    assert_eq!(notifier.publish_count() - publishes_before, 4);
    assert_eq!(
        notifier.last_published().map(|s| s.stage),
        Some(GameStage::Voting)
    );
}

#[test]
fn scenario_e_everyone_votes_and_game_ends() {
    let (registry, _) = make_registry(5);
    let id = common::started_game(&registry, "alice", &["bob"]);
    common::draw_until_voting(&registry, id);

    registry.vote_against(id, "alice", "bob").unwrap();
    assert_eq!(registry.stage(id), Some(GameStage::Voting));

    registry.vote_against(id, "bob", "alice").unwrap();

    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.stage, GameStage::Over);
    assert_eq!(snapshot.players["alice"].votes, 1);
    assert_eq!(snapshot.players["bob"].votes, 1);
    assert_eq!(snapshot.players["alice"].voted_against, "bob");
    assert_eq!(snapshot.players["bob"].voted_against, "alice");
}

#[test]
fn scenario_f_out_of_turn_stroke_is_rejected_without_side_effects() {
    let (registry, notifier) = make_registry(6);
    let id = common::started_game(&registry, "alice", &["bob"]);

    let current = registry.current_turn(id).unwrap();
    let other = if current == "alice" { "bob" } else { "alice" };
    let publishes_before = notifier.publish_count();

    let err = registry.draw_stroke(id, other, line(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotYourTurn);

    let snapshot = registry.snapshot(id).unwrap();
    assert!(snapshot.strokes.is_empty());
    assert_eq!(snapshot.turn_index, 0);
    assert_eq!(notifier.publish_count(), publishes_before);
}

#[test]
fn over_game_rejects_every_action() {
    let (registry, notifier) = make_registry(7);
    let id = common::started_game(&registry, "alice", &["bob"]);
    common::draw_until_voting(&registry, id);
    registry.vote_against(id, "alice", "bob").unwrap();
    registry.vote_against(id, "bob", "bob").unwrap();
    assert_eq!(registry.stage(id), Some(GameStage::Over));
    let publishes_before = notifier.publish_count();

    let errors = [
        registry.join_game(id, "alice", None).unwrap_err(),
        registry.join_game(id, "carol", None).unwrap_err(),
        registry.start_game(id, "alice").unwrap_err(),
        registry.draw_stroke(id, "alice", line(1)).unwrap_err(),
        registry.vote_against(id, "alice", "bob").unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::InvalidStage, "{err}");
    }
    assert_eq!(notifier.publish_count(), publishes_before);

    // Чтение по-прежнему работает.
    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.players["bob"].votes, 2);
    assert_eq!(snapshot.players["alice"].votes, 0);
}
