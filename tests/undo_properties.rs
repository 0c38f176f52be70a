//! The undo cluster's documented behaviour, checked end to end.

use patternbook::behavioral::command::{
    Clipboard, CopyCommand, CutCommand, Editor, Invoker, PasteCommand,
};
use patternbook::behavioral::memento::{Caretaker, CaretakerError, Originator};
use patternbook::behavioral::state::{AudioPlayer, PlayerState};

#[test]
fn cut_copy_paste_then_undo() {
    let clipboard = Clipboard::shared();
    let mut invoker = Invoker::new(Editor::new("Hello World!"));

    invoker.execute(Box::new(CutCommand::new(clipboard.clone())));
    invoker.execute(Box::new(CopyCommand::new(clipboard.clone())));
    invoker.execute(Box::new(PasteCommand::new(clipboard.clone())));
    assert_eq!(invoker.editor().text(), "Hello WorldHello World");

    assert!(invoker.undo());
    assert_eq!(invoker.editor().text(), "Hello World");
}

#[test]
fn clipboard_is_shared_between_commands() {
    let clipboard = Clipboard::shared();
    let mut first = Invoker::new(Editor::new("abc"));
    let mut second = Invoker::new(Editor::new("xyz"));

    first.execute(Box::new(CopyCommand::new(clipboard.clone())));
    second.execute(Box::new(PasteCommand::new(clipboard.clone())));
    assert_eq!(second.editor().text(), "xyzabc");
}

#[test]
fn three_backups_two_undos_restore_two_steps_back() {
    let mut originator = Originator::new("first");
    let mut caretaker = Caretaker::new();

    caretaker.backup(&originator);
    originator.set_state("second");
    caretaker.backup(&originator);
    originator.set_state("third");
    caretaker.backup(&originator);

    caretaker.undo(&mut originator).unwrap();
    caretaker.undo(&mut originator).unwrap();
    assert_eq!(originator.state(), "first");
    assert_eq!(caretaker.len(), 1);
}

#[test]
fn single_undo_lands_on_earlier_snapshot_not_discarded_one() {
    let mut originator = Originator::new("saved");
    let mut caretaker = Caretaker::new();
    caretaker.backup(&originator);
    originator.set_state("latest");
    caretaker.backup(&originator);
    originator.set_state("unsaved edit");

    caretaker.undo(&mut originator).unwrap();
    assert_eq!(originator.state(), "saved");
}

#[test]
fn caretaker_errors_once_history_is_exhausted() {
    let mut originator = Originator::new("only");
    let mut caretaker = Caretaker::new();
    caretaker.backup(&originator);

    assert!(matches!(
        caretaker.undo(&mut originator),
        Err(CaretakerError::NothingToRestore { .. })
    ));
    assert_eq!(caretaker.undo(&mut originator), Err(CaretakerError::Empty));
    assert_eq!(originator.state(), "only");
}

#[test]
fn player_cycles_through_every_state() {
    let mut player = AudioPlayer::new();
    let mut seen = vec![player.state()];

    player.play();
    seen.push(player.state());
    player.lock();
    seen.push(player.state());
    player.play();
    seen.push(player.state());

    assert_eq!(
        seen,
        vec![
            PlayerState::Ready,
            PlayerState::Playing,
            PlayerState::Locked,
            PlayerState::Ready
        ]
    );
}
