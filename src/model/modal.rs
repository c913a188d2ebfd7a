//! Modal overlays shown on top of the review screen

/// A modal overlay; only the topmost one receives key events
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Path prompt for importing a selection file
    ImportPath,
    /// Blocking notice for a failed import, dismissed with Enter/Esc
    ImportFailed { message: String },
}

#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Push `modal` unless it is already on top, in which case close it
    pub fn toggle(&mut self, modal: Modal) {
        if self.top() == Some(&modal) {
            self.stack.pop();
        } else {
            self.stack.push(modal);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
