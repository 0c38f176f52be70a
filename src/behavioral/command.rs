//! Command pattern: reversible text-editing actions.
//!
//! Each command captures a single action (cut, copy, paste) against an
//! [`Editor`] and a [`Clipboard`] shared between commands. The [`Invoker`]
//! runs commands and keeps them in order so the most recent one can be undone.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Clipboard shared by reference among command objects.
pub type SharedClipboard = Rc<RefCell<Clipboard>>;

/// Single mutable string; empty by default, never absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: String,
}

impl Clipboard {
    /// Create an empty clipboard wrapped for sharing.
    pub fn shared() -> SharedClipboard {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Command receiver: a plain text buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    text: String,
}

impl Editor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A reversible action against an [`Editor`].
///
/// Implementations snapshot the editor text right before `execute` so that
/// `undo` can put it back.
pub trait Command {
    /// Short name used in history listings.
    fn name(&self) -> &str;

    fn execute(&mut self, editor: &mut Editor);

    /// Restore the text captured by the last `execute`. No-op if the command
    /// never ran.
    fn undo(&mut self, editor: &mut Editor);
}

fn restore(backup: &mut Option<String>, editor: &mut Editor) {
    if let Some(text) = backup.take() {
        editor.text = text;
    }
}

/// Removes the last character of the text and places it on the clipboard.
pub struct CutCommand {
    clipboard: SharedClipboard,
    backup: Option<String>,
}

impl CutCommand {
    pub fn new(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            backup: None,
        }
    }
}

impl Command for CutCommand {
    fn name(&self) -> &str {
        "cut"
    }

    fn execute(&mut self, editor: &mut Editor) {
        self.backup = Some(editor.text.clone());
        let cut = editor.text.pop().map(String::from).unwrap_or_default();
        debug!(cut = %cut, "cut executed");
        self.clipboard.borrow_mut().set(cut);
    }

    fn undo(&mut self, editor: &mut Editor) {
        restore(&mut self.backup, editor);
    }
}

/// Copies the whole text to the clipboard. Leaves the text untouched.
pub struct CopyCommand {
    clipboard: SharedClipboard,
    backup: Option<String>,
}

impl CopyCommand {
    pub fn new(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            backup: None,
        }
    }
}

impl Command for CopyCommand {
    fn name(&self) -> &str {
        "copy"
    }

    fn execute(&mut self, editor: &mut Editor) {
        self.backup = Some(editor.text.clone());
        debug!(len = editor.text.len(), "copy executed");
        self.clipboard.borrow_mut().set(editor.text.clone());
    }

    fn undo(&mut self, editor: &mut Editor) {
        restore(&mut self.backup, editor);
    }
}

/// Appends the clipboard content to the text.
pub struct PasteCommand {
    clipboard: SharedClipboard,
    backup: Option<String>,
}

impl PasteCommand {
    pub fn new(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            backup: None,
        }
    }
}

impl Command for PasteCommand {
    fn name(&self) -> &str {
        "paste"
    }

    fn execute(&mut self, editor: &mut Editor) {
        self.backup = Some(editor.text.clone());
        let clipboard = self.clipboard.borrow();
        editor.text.push_str(clipboard.content());
        debug!(pasted = clipboard.content(), "paste executed");
    }

    fn undo(&mut self, editor: &mut Editor) {
        restore(&mut self.backup, editor);
    }
}

/// Runs commands against its editor and keeps them for undo.
pub struct Invoker {
    editor: Editor,
    history: Vec<Box<dyn Command>>,
}

impl Invoker {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            history: Vec::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Execute the command and append it to the history.
    pub fn execute(&mut self, mut command: Box<dyn Command>) {
        command.execute(&mut self.editor);
        debug!(command = command.name(), text = %self.editor.text, "command recorded");
        self.history.push(command);
    }

    /// Undo the most recent command. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo(&mut self.editor);
                debug!(command = command.name(), text = %self.editor.text, "command undone");
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_names(&self) -> Vec<&str> {
        self.history.iter().map(|c| c.name()).collect()
    }
}
