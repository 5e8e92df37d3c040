/// Cancellable one-shot timer primitive.
///
/// Implementations must treat cancelling an already-fired handle as a no-op;
/// the debouncer keeps the handle of a timer that may have fired.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Trailing-edge debouncer for free-text input.
///
/// Each new input value cancels the pending commit and restarts the full
/// delay, so the commit callback only ever sees the latest value, and only
/// after the delay has elapsed with no newer input. At most one timer is
/// outstanding at a time.
pub struct Debouncer<S: Scheduler> {
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Feeds one keystroke's value; `commit` runs after the delay unless a
    /// newer value arrives first.
    pub fn input(
        &mut self,
        scheduler: &mut S,
        value: String,
        commit: impl FnOnce(String) + 'static,
    ) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.pending = Some(
            scheduler.schedule(self.delay_ms, Box::new(move || commit(value))),
        );
    }

    /// Drops any pending commit without firing it
    pub fn cancel(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}
