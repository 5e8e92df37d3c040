use gloo_timers::callback::Timeout;
use shared::Scheduler;

/// Browser-backed timer scheduler driving the shared debouncer.
///
/// Cancelling a handle whose timeout already fired clears a dead timer id,
/// which the browser treats as a no-op, so the scheduler meets the trait's
/// stale-handle requirement.
#[derive(Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, move || callback())
    }

    fn cancel(&mut self, handle: Timeout) {
        handle.cancel();
    }
}
