/// Shared on/off switch for CSV logging
///
/// Flipped by the key handler, read by the poll loop once per cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LoggingToggle(Arc<AtomicBool>);

impl LoggingToggle {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }

    /// Flip the switch, returning the new state
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_state() {
        let toggle = LoggingToggle::new(false);
        assert!(toggle.toggle());
        assert!(toggle.is_enabled());
        assert!(!toggle.toggle());
        assert!(!toggle.is_enabled());
    }

    #[test]
    fn test_clones_share_state() {
        let ui_side = LoggingToggle::new(true);
        let poller_side = ui_side.clone();
        ui_side.set(false);
        assert!(!poller_side.is_enabled());
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let toggle = LoggingToggle::new(false);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = toggle.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        t.toggle();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // 8000 flips is an even count
        assert!(!toggle.is_enabled());
    }
}
