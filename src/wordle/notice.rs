/// A message shown for a limited time, measured on the frame clock.
#[derive(Debug, PartialEq, Clone)]
pub struct Notice {
    text: String,
    remaining: f32,
}

impl Notice {
    pub fn new<S: Into<String>>(text: S, seconds: f32) -> Notice {
        Notice {
            text: text.into(),
            remaining: seconds,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Counts `elapsed` seconds down. Returns `false` once the notice has expired.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        self.remaining -= elapsed;
        self.remaining > 0.0
    }
}
