//! Transient "composing" indicator shown after a submission.
//!
//! The indicator is cleared by a timer task that posts
//! [`Event::ComposingElapsed`] back into the event channel. Each activation
//! gets a new generation, so a late event from a replaced timer is ignored.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::event::Event;

/// Composing indicator state.
#[derive(Debug)]
pub struct ComposingIndicator {
    delay: Duration,
    generation: u64,
    active: bool,
    timer: Option<JoinHandle<()>>,
    /// Spinner frame, advanced on ticks while active.
    frame: usize,
}

impl ComposingIndicator {
    /// Create an inactive indicator that clears `delay` after activation.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            active: false,
            timer: None,
            frame: 0,
        }
    }

    /// Whether the indicator is showing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Generation of the most recent activation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current spinner frame.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Show the indicator and (re)start the clear timer.
    ///
    /// Requires a tokio runtime; without one the indicator stays hidden.
    pub fn activate(&mut self, notifier: &UnboundedSender<Event>) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime, composing indicator not shown");
            return;
        };

        self.cancel_timer();

        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let notifier = notifier.clone();

        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = notifier.send(Event::ComposingElapsed(generation));
        }));
        self.active = true;
        self.frame = 0;

        debug!(generation, ?delay, "Composing timer scheduled");
    }

    /// Handle a timer expiry. Returns `true` if the indicator was cleared.
    pub fn elapsed(&mut self, generation: u64) -> bool {
        if !self.active || generation != self.generation {
            debug!(generation, current = self.generation, "Ignoring stale composing timer");
            return false;
        }
        self.active = false;
        self.timer = None;
        debug!(generation, "Composing indicator cleared");
        true
    }

    /// Advance the spinner.
    pub fn tick(&mut self) {
        if self.active {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for ComposingIndicator {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(1000);

    #[tokio::test(start_paused = true)]
    async fn test_timer_posts_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut indicator = ComposingIndicator::new(DELAY);

        indicator.activate(&tx);
        assert!(indicator.is_active());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        let Some(Event::ComposingElapsed(generation)) = rx.recv().await else {
            panic!("expected composing event");
        };
        assert_eq!(generation, 1);
        assert!(indicator.elapsed(generation));
        assert!(!indicator.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivation_ignores_old_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut indicator = ComposingIndicator::new(DELAY);

        indicator.activate(&tx);
        tokio::time::sleep(Duration::from_millis(600)).await;
        indicator.activate(&tx);
        assert_eq!(indicator.generation(), 2);

        // The first timer was aborted and a late event for it is ignored
        assert!(!indicator.elapsed(1));
        assert!(indicator.is_active());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());

        let Some(Event::ComposingElapsed(generation)) = rx.recv().await else {
            panic!("expected composing event");
        };
        assert_eq!(generation, 2);
        assert!(indicator.elapsed(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut indicator = ComposingIndicator::new(DELAY);
        indicator.activate(&tx);
        drop(indicator);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_activate_without_runtime_stays_hidden() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut indicator = ComposingIndicator::new(DELAY);
        indicator.activate(&tx);
        assert!(!indicator.is_active());
    }

    #[test]
    fn test_reactivation_without_runtime_keeps_running_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let mut indicator = ComposingIndicator::new(DELAY);
        runtime.block_on(async { indicator.activate(&tx) });
        assert!(indicator.is_active());

        // Outside the runtime the existing timer must survive to clear the indicator
        indicator.activate(&tx);
        assert!(indicator.is_active());
        assert_eq!(indicator.generation(), 1);

        let event = runtime.block_on(async { rx.recv().await });
        let Some(Event::ComposingElapsed(generation)) = event else {
            panic!("expected composing event");
        };
        assert!(indicator.elapsed(generation));
        assert!(!indicator.is_active());
    }

    #[tokio::test]
    async fn test_tick_only_spins_while_active() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut indicator = ComposingIndicator::new(DELAY);
        indicator.tick();
        assert_eq!(indicator.frame(), 0);

        indicator.activate(&tx);
        indicator.tick();
        indicator.tick();
        assert_eq!(indicator.frame(), 2);
    }
}
