//! CV download modal lifecycle.
//!
//! Pure decision core for the modal: open/closed state, the remembered
//! pre-open focus target, and the open-cycle stamp used to drop download
//! completions that outlive the dialog. The DOM layer owns the actual
//! focus calls and listeners; this struct only decides.
//!
//! Generic over the focus handle `F` (an `HtmlElement` in the app) so the
//! whole lifecycle tests natively.

/// Whether the dialog is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Closed,
}

/// Stamp tied to one open cycle. A download attempt captures one at click
/// time; its completion is only applied if the stamp still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStamp(u64);

/// State machine for one modal dialog.
///
/// Focus memory is recorded once per open and consumed exactly once on the
/// first close of that cycle; every later close is a no-op.
#[derive(Debug)]
pub struct ModalController<F> {
    state: DialogState,
    focus_memory: Option<F>,
    cycle: u64,
}

impl<F> Default for ModalController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ModalController<F> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            focus_memory: None,
            cycle: 0,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Open the dialog, remembering the control that had focus.
    ///
    /// Opening while already open re-records focus memory; the displaced
    /// handle is returned so the caller can drop it explicitly.
    pub fn open(&mut self, prev_focus: Option<F>) -> Option<F> {
        self.state = DialogState::Open;
        self.cycle += 1;
        std::mem::replace(&mut self.focus_memory, prev_focus)
    }

    /// Close the dialog, yielding the focus target to restore.
    ///
    /// Idempotent: closing an already-closed dialog changes nothing and
    /// restores nothing.
    pub fn close(&mut self) -> Option<F> {
        self.state = DialogState::Closed;
        self.focus_memory.take()
    }

    /// Stamp for a download attempt started now.
    pub fn stamp(&self) -> CycleStamp {
        CycleStamp(self.cycle)
    }

    /// Whether a completion stamped with `stamp` may still act. False once
    /// the dialog was closed or reopened after the attempt started.
    pub fn accepts(&self, stamp: CycleStamp) -> bool {
        self.is_open() && stamp.0 == self.cycle
    }

    /// Focus trap decision: while open, focus landing outside the dialog
    /// subtree must be redirected back inside.
    pub fn should_redirect_focus(&self, target_inside_dialog: bool) -> bool {
        self.is_open() && !target_inside_dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_sequences_track_last_call() {
        let mut m: ModalController<u32> = ModalController::new();
        assert_eq!(m.state(), DialogState::Closed);

        m.open(Some(1));
        assert_eq!(m.state(), DialogState::Open);
        m.open(Some(2));
        assert_eq!(m.state(), DialogState::Open);
        m.close();
        assert_eq!(m.state(), DialogState::Closed);
        m.open(Some(3));
        m.close();
        m.close();
        assert_eq!(m.state(), DialogState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut m: ModalController<u32> = ModalController::new();
        m.open(Some(7));
        assert_eq!(m.close(), Some(7));
        assert_eq!(m.close(), None);
        assert_eq!(m.state(), DialogState::Closed);
    }

    #[test]
    fn test_focus_restored_to_trigger() {
        let mut m: ModalController<&'static str> = ModalController::new();
        m.open(Some("trigger"));
        assert_eq!(m.close(), Some("trigger"));
    }

    #[test]
    fn test_double_open_overwrites_focus_memory() {
        let mut m: ModalController<u32> = ModalController::new();
        assert_eq!(m.open(Some(1)), None);
        assert_eq!(m.open(Some(2)), Some(1));
        assert_eq!(m.close(), Some(2));
    }

    #[test]
    fn test_open_without_focused_element() {
        let mut m: ModalController<u32> = ModalController::new();
        m.open(None);
        assert_eq!(m.close(), None);
    }

    #[test]
    fn test_focus_trap_redirects_only_outside_targets_while_open() {
        let mut m: ModalController<u32> = ModalController::new();
        assert!(!m.should_redirect_focus(false));
        m.open(None);
        assert!(m.should_redirect_focus(false));
        assert!(!m.should_redirect_focus(true));
        m.close();
        assert!(!m.should_redirect_focus(false));
    }

    #[test]
    fn test_stamp_valid_only_within_same_open_cycle() {
        let mut m: ModalController<u32> = ModalController::new();
        m.open(None);
        let stamp = m.stamp();
        assert!(m.accepts(stamp));

        m.close();
        assert!(!m.accepts(stamp));

        // Reopening starts a new cycle; the old stamp stays dead.
        m.open(None);
        assert!(!m.accepts(stamp));
        assert!(m.accepts(m.stamp()));
    }
}
