// web_app/model/counter.rs - Stepped counter animation
//
// Interpolates a displayed number from 0 to a target over a fixed duration.
// The first frame timestamp becomes the start time; later frames report the
// value for their elapsed time until progress reaches 1.

/// Default duration of the stats counters, in milliseconds
pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Progress fraction in `[0, 1]` at `timestamp_ms`
    pub fn progress(&mut self, timestamp_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((timestamp_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value to display for a frame, and whether the animation is finished
    pub fn frame(&mut self, timestamp_ms: f64) -> (u64, bool) {
        let progress = self.progress(timestamp_ms);
        let value = (self.target as f64 * progress).floor() as u64;
        (value, progress >= 1.0)
    }
}

/// Format with comma thousands separators ("50000" -> "50,000")
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
