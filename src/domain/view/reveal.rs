use std::fmt;
use std::rc::Rc;

/// Identifies one content block subject to reveal animation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Detection tuning for the visibility subscription. The bottom margin pulls
/// the detection region's lower edge inward so a block reveals slightly
/// before it reaches the bottom of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the block's area that must enter the viewport.
    pub threshold: f32,
    /// Inward margin applied to the bottom edge of the detection region.
    pub bottom_margin: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: 0.10,
            bottom_margin: 0.10,
        }
    }
}

/// Host capability for viewport-intersection callbacks. Injected so the
/// reveal state machine can run against a fake that fires synchronously.
pub trait VisibilityObserver {
    fn observe(&self, block: &BlockId, options: &RevealOptions);
    fn unobserve(&self, block: &BlockId);
}

impl<O: VisibilityObserver + ?Sized> VisibilityObserver for Rc<O> {
    fn observe(&self, block: &BlockId, options: &RevealOptions) {
        (**self).observe(block, options)
    }

    fn unobserve(&self, block: &BlockId) {
        (**self).unobserve(block)
    }
}

/// Observer for hosts without a visibility-detection primitive; a controller
/// attached through it reveals immediately instead of staying hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl VisibilityObserver for NullObserver {
    fn observe(&self, _block: &BlockId, _options: &RevealOptions) {}

    fn unobserve(&self, _block: &BlockId) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    /// Terminal. A revealed block stays revealed even if scrolled back out.
    Revealed,
}

/// Per-block reveal state machine: `Pending → Revealed`, exactly once.
///
/// The visibility subscription is released on the first successful
/// transition or on drop, whichever comes first, so repeated callbacks and
/// remounts can never double-fire the reveal effect.
pub struct RevealController<O: VisibilityObserver> {
    block: BlockId,
    options: RevealOptions,
    observer: Option<O>,
    state: RevealState,
    observing: bool,
}

impl<O: VisibilityObserver> RevealController<O> {
    pub fn new(block: BlockId, observer: O) -> Self {
        Self::with_options(block, observer, RevealOptions::default())
    }

    pub fn with_options(block: BlockId, observer: O, options: RevealOptions) -> Self {
        RevealController {
            block,
            options,
            observer: Some(observer),
            state: RevealState::Pending,
            observing: false,
        }
    }

    /// Registers the block for visibility observation. Idempotent: calling
    /// it again while already observing or already revealed is a no-op.
    /// Without an observer capability the block fails open to `Revealed`.
    pub fn attach(&mut self) {
        if self.state == RevealState::Revealed || self.observing {
            return;
        }
        match &self.observer {
            Some(observer) => {
                observer.observe(&self.block, &self.options);
                self.observing = true;
            }
            None => {
                self.state = RevealState::Revealed;
            }
        }
    }

    /// Visibility callback. Transitions to `Revealed` when the visible
    /// fraction reaches the configured threshold; returns whether this call
    /// performed the transition. The subscription is released on the first
    /// transition, so a second callback can never re-fire.
    pub fn on_intersection(&mut self, visible_fraction: f32) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        if visible_fraction < self.options.threshold {
            return false;
        }
        self.state = RevealState::Revealed;
        self.release();
        true
    }

    /// Releases the visibility subscription without revealing. Used on
    /// teardown of the owning view; safe to call at any time.
    pub fn detach(&mut self) {
        self.release();
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn block(&self) -> &BlockId {
        &self.block
    }

    fn release(&mut self) {
        if self.observing {
            if let Some(observer) = &self.observer {
                observer.unobserve(&self.block);
            }
            self.observing = false;
        }
    }
}

impl RevealController<NullObserver> {
    /// Controller for a host with no visibility primitive at all; `attach`
    /// reveals the block immediately.
    pub fn fail_open(block: BlockId) -> Self {
        RevealController {
            block,
            options: RevealOptions::default(),
            observer: None,
            state: RevealState::Pending,
            observing: false,
        }
    }
}

impl<O: VisibilityObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.release();
    }
}
