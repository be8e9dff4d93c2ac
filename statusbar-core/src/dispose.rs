// statusbar-core/src/dispose.rs

/// A single cleanup action that runs at most once.
///
/// Every operation on the strip that acquires resources hands one of these
/// back to the caller; invoking it past the first time is a no-op.
pub struct Disposer {
    action: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A disposer with nothing to release.
    pub fn noop() -> Self {
        Self { action: None }
    }

    /// Run the cleanup action if it has not run yet.
    pub fn dispose(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.action.is_none()
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Ordered collection of cleanup actions owned by one component.
///
/// Actions are released in reverse acquisition order. Disposing an empty or
/// already-disposed bag is a no-op, and dropping the bag releases whatever
/// is still held.
#[derive(Default)]
pub struct DisposeBag {
    actions: Vec<Box<dyn FnOnce()>>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl FnOnce() + 'static) {
        self.actions.push(Box::new(action));
    }

    /// Release all held actions, most recently acquired first.
    pub fn dispose(&mut self) {
        while let Some(action) = self.actions.pop() {
            action();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}
