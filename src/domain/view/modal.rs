/// Host capability for suppressing and restoring page scroll. The page-wide
/// scroll flag is the only shared global this layer touches, so it is only
/// ever held through [`ScrollGuard`].
pub trait ScrollLock {
    fn suppress(&self);
    fn restore(&self);
}

impl<L: ScrollLock + ?Sized> ScrollLock for std::rc::Rc<L> {
    fn suppress(&self) {
        (**self).suppress()
    }

    fn restore(&self) {
        (**self).restore()
    }
}

/// Holds page scroll suppressed until dropped; restores exactly once.
struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    fn hold(lock: L) -> Self {
        lock.suppress();
        ScrollGuard { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.restore();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { src: String, alt: String },
}

/// Where a pointer activation landed while the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed background region around the image.
    Backdrop,
    /// The enlarged image itself; activation must not bubble into a dismiss.
    Image,
}

/// The single image-preview overlay. At most one image is shown at a time:
/// opening while already open replaces the displayed image rather than
/// stacking, and the scroll lock acquired on first open is released exactly
/// once on close or teardown.
pub struct ModalViewer<L: ScrollLock + Clone> {
    lock: L,
    state: ModalState,
    guard: Option<ScrollGuard<L>>,
}

impl<L: ScrollLock + Clone> ModalViewer<L> {
    pub fn new(lock: L) -> Self {
        ModalViewer {
            lock,
            state: ModalState::Closed,
            guard: None,
        }
    }

    /// Shows `src` enlarged. Replaces the current image when already open;
    /// the scroll lock is not re-acquired in that case.
    pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        if self.guard.is_none() {
            self.guard = Some(ScrollGuard::hold(self.lock.clone()));
        }
        self.state = ModalState::Open {
            src: src.into(),
            alt: alt.into(),
        };
    }

    /// Dismisses the overlay and restores page scroll. Idempotent.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.guard = None;
    }

    /// Explicit close-control activation.
    pub fn close_control(&mut self) {
        self.close();
    }

    /// Cancel key input. Only meaningful while open; a stray key press with
    /// the overlay closed is a no-op.
    pub fn cancel_key(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    /// Pointer activation inside the overlay. The backdrop dismisses; the
    /// image itself does not.
    pub fn pointer_activation(&mut self, target: PointerTarget) {
        if target == PointerTarget::Backdrop {
            self.close();
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// The image currently shown, if any.
    pub fn current_image(&self) -> Option<(&str, &str)> {
        match &self.state {
            ModalState::Open { src, alt } => Some((src.as_str(), alt.as_str())),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct CountingLock {
        suppressed: Rc<Cell<u32>>,
        restored: Rc<Cell<u32>>,
    }

    impl ScrollLock for CountingLock {
        fn suppress(&self) {
            self.suppressed.set(self.suppressed.get() + 1);
        }

        fn restore(&self) {
            self.restored.set(self.restored.get() + 1);
        }
    }

    fn viewer() -> (ModalViewer<CountingLock>, CountingLock) {
        let lock = CountingLock::default();
        (ModalViewer::new(lock.clone()), lock)
    }

    #[test]
    fn open_then_open_replaces_image_without_stacking() {
        let (mut modal, lock) = viewer();
        modal.open("/assets/a.png", "first");
        modal.open("/assets/b.png", "second");

        assert_eq!(modal.current_image(), Some(("/assets/b.png", "second")));
        assert_eq!(lock.suppressed.get(), 1);
        assert_eq!(lock.restored.get(), 0);
    }

    #[test]
    fn double_close_restores_scroll_exactly_once() {
        let (mut modal, lock) = viewer();
        modal.open("/assets/a.png", "doc");
        modal.close();
        modal.close();

        assert_eq!(*modal.state(), ModalState::Closed);
        assert_eq!(lock.restored.get(), 1);
    }

    #[test]
    fn close_while_closed_is_a_noop() {
        let (mut modal, lock) = viewer();
        modal.close();
        assert_eq!(lock.suppressed.get(), 0);
        assert_eq!(lock.restored.get(), 0);
    }

    #[test]
    fn cancel_key_dismisses_only_while_open() {
        let (mut modal, lock) = viewer();
        modal.cancel_key();
        assert_eq!(lock.restored.get(), 0);

        modal.open("/assets/a.png", "doc");
        modal.cancel_key();
        assert!(!modal.is_open());
        assert_eq!(lock.restored.get(), 1);
    }

    #[test]
    fn image_activation_does_not_dismiss_but_backdrop_does() {
        let (mut modal, lock) = viewer();
        modal.open("/assets/a.png", "doc");

        modal.pointer_activation(PointerTarget::Image);
        assert!(modal.is_open());

        modal.pointer_activation(PointerTarget::Backdrop);
        assert!(!modal.is_open());
        assert_eq!(lock.restored.get(), 1);
    }

    #[test]
    fn close_control_dismisses() {
        let (mut modal, _lock) = viewer();
        modal.open("/assets/a.png", "doc");
        modal.close_control();
        assert_eq!(*modal.state(), ModalState::Closed);
    }

    #[test]
    fn teardown_while_open_restores_scroll() {
        let lock = CountingLock::default();
        {
            let mut modal = ModalViewer::new(lock.clone());
            modal.open("/assets/a.png", "doc");
        }
        assert_eq!(lock.suppressed.get(), 1);
        assert_eq!(lock.restored.get(), 1);
    }

    #[test]
    fn reopen_after_close_acquires_a_fresh_lock() {
        let (mut modal, lock) = viewer();
        modal.open("/assets/a.png", "doc");
        modal.close();
        modal.open("/assets/b.png", "doc");

        assert_eq!(lock.suppressed.get(), 2);
        assert_eq!(lock.restored.get(), 1);
    }
}
