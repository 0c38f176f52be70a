//! Property-based tests for the pattern models.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use patternbook::behavioral::command::{
    Clipboard, Command, CopyCommand, CutCommand, Editor, Invoker, PasteCommand, SharedClipboard,
};
use patternbook::behavioral::memento::{Caretaker, Originator};
use patternbook::behavioral::state::{AudioPlayer, PlayerState, State};
use patternbook::structural::composite::Node;
use patternbook::structural::flyweight::Forest;
use proptest::prelude::*;

fn make_command(op: u8, clipboard: &SharedClipboard) -> Box<dyn Command> {
    match op {
        0 => Box::new(CutCommand::new(clipboard.clone())),
        1 => Box::new(CopyCommand::new(clipboard.clone())),
        _ => Box::new(PasteCommand::new(clipboard.clone())),
    }
}

fn press(player: &mut AudioPlayer, button: u8) -> String {
    match button {
        0 => player.lock(),
        1 => player.play(),
        2 => player.next(),
        _ => player.previous(),
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3usize) -> PlayerState {
        PlayerState::ALL[variant]
    }
}

proptest! {
    #[test]
    fn undoing_everything_restores_original_text(
        text in "[a-zA-Z !]{0,20}",
        ops in prop::collection::vec(0..3u8, 0..12),
    ) {
        let clipboard = Clipboard::shared();
        let mut invoker = Invoker::new(Editor::new(text.clone()));
        for op in &ops {
            invoker.execute(make_command(*op, &clipboard));
        }
        prop_assert_eq!(invoker.history_len(), ops.len());

        while invoker.undo() {}
        prop_assert_eq!(invoker.editor().text(), text.as_str());
    }

    #[test]
    fn undo_reverts_exactly_one_command(
        text in "[a-z]{1,10}",
        ops in prop::collection::vec(0..3u8, 1..8),
    ) {
        let clipboard = Clipboard::shared();
        let mut invoker = Invoker::new(Editor::new(text));
        let (last, earlier) = ops.split_last().unwrap();
        for op in earlier {
            invoker.execute(make_command(*op, &clipboard));
        }
        let before_last = invoker.editor().text().to_string();

        invoker.execute(make_command(*last, &clipboard));
        invoker.undo();
        prop_assert_eq!(invoker.editor().text(), before_last.as_str());
    }

    #[test]
    fn k_undos_land_k_snapshots_back(
        states in prop::collection::vec("[a-z]{1,6}", 2..10),
        k in 1usize..9,
    ) {
        let k = k.min(states.len() - 1);
        let mut originator = Originator::new(states[0].clone());
        let mut caretaker = Caretaker::new();
        for state in &states {
            originator.set_state(state.clone());
            caretaker.backup(&originator);
        }

        for _ in 0..k {
            prop_assert!(caretaker.undo(&mut originator).is_ok());
        }
        prop_assert_eq!(originator.state(), states[states.len() - 1 - k].as_str());
        prop_assert_eq!(caretaker.len(), states.len() - k);
    }

    #[test]
    fn player_log_is_a_connected_path(buttons in prop::collection::vec(0..4u8, 0..40)) {
        let mut player = AudioPlayer::new();
        for button in buttons {
            press(&mut player, button);
            prop_assert!(PlayerState::ALL.contains(&player.state()));
            prop_assert!(player.current_track().is_some());
        }

        let records = player.transitions().records();
        for pair in records.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(last) = records.last() {
            prop_assert_eq!(last.to, player.state());
        }
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert!(!state.is_final());
    }

    #[test]
    fn directory_size_is_sum_of_files(sizes in prop::collection::vec(0u64..10_000, 0..20)) {
        let files: Vec<Node> = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| Node::file(format!("f{}", i), *size))
            .collect();
        let tree = Node::dir("root", vec![Node::dir("nested", files)]);

        prop_assert_eq!(tree.size(), sizes.iter().sum::<u64>());
        prop_assert_eq!(tree.count_files(), sizes.len());
    }

    #[test]
    fn forest_never_duplicates_types(kinds in prop::collection::vec(0..4usize, 1..50)) {
        let names = ["Oak", "Birch", "Pine", "Maple"];
        let mut forest = Forest::new();
        for (i, kind) in kinds.iter().enumerate() {
            forest.plant(i as i32, 0, names[*kind], "green", "bark");
        }

        let mut distinct = kinds.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(forest.tree_count(), kinds.len());
        prop_assert_eq!(forest.type_count(), distinct.len());
    }
}
