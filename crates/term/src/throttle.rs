//! Frame throttling for the clock loop.
//!
//! The loop wakes on every tick and on every input event, but a frame only
//! needs to be flushed when something visible changed.

/// Decides whether a freshly sampled frame should be drawn.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    min_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    last_size: (u16, u16),
    has_rendered: bool,
}

impl FrameThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            last_size: (0, 0),
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders on the first call, whenever the fingerprint or the viewport
    /// size changes, and otherwise at most once per `min_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, size: (u16, u16)) -> bool {
        let changed = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || size != self.last_size
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_interval_ms;

        if changed {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            self.last_size = size;
        }
        changed
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
