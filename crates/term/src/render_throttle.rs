//! Skip redraws when nothing visible changed.
//!
//! The board only changes on input, timer ticks and message expiry, so most
//! frames at the poll rate would redraw an identical screen. A periodic
//! refresh still goes out to repair terminals that lost output.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Render on the first frame, on any fingerprint change, or once the
    /// refresh interval has passed.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(prev) if prev != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
