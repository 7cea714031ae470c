use crate::readout::color::format_color;

/// One line of readout output: the pixel under the cursor (or the locked
/// one), its sampled color when available, and whether the lock is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub pixel: Option<(u32, u32)>,
    pub color: Option<u32>,
    pub locked: bool,
}

impl Readout {
    pub const EMPTY: Self = Self {
        pixel: None,
        color: None,
        locked: false,
    };

    /// Render the status line. `"x: -, y: -"` when no pixel is resolved;
    /// the color part is omitted when sampling failed; `" (locked)"` is
    /// appended while the lock is held.
    pub fn text(&self) -> String {
        let Some((px, py)) = self.pixel else {
            return "x: -, y: -".to_string();
        };
        let color_part = self
            .color
            .map(|argb| format!(" {}", format_color(argb)))
            .unwrap_or_default();
        let lock_part = if self.locked { " (locked)" } else { "" };
        format!("x: {px}, y: {py}{color_part}{lock_part}")
    }
}

/// Hover/lock state for one attachment.
///
/// `Tracking` follows the cursor; `toggle_lock` freezes the last observation
/// until toggled again. Invariant: `locked` implies `locked_pixel` is set —
/// locking with nothing observed yet is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingState {
    last_pixel: Option<(u32, u32)>,
    last_color: Option<u32>,
    locked: bool,
    locked_pixel: Option<(u32, u32)>,
    locked_color: Option<u32>,
}

impl TrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Feed one pointer observation and get the readout to display.
    ///
    /// While locked the observation is ignored entirely; the frozen readout
    /// is re-emitted. A `None` pixel emits the empty readout but keeps the
    /// last known observation, which only the lock transition consumes.
    pub fn observe(&mut self, pixel: Option<(u32, u32)>, color: Option<u32>) -> Readout {
        if self.locked {
            return self.readout();
        }
        match pixel {
            Some(p) => {
                self.last_pixel = Some(p);
                self.last_color = color;
                Readout {
                    pixel: Some(p),
                    color,
                    locked: false,
                }
            }
            None => Readout::EMPTY,
        }
    }

    /// Toggle the lock. Returns `true` when the lock is held afterwards.
    pub fn toggle_lock(&mut self) -> bool {
        if self.locked {
            self.locked = false;
            self.locked_pixel = None;
            self.locked_color = None;
        } else if let Some(pixel) = self.last_pixel {
            self.locked = true;
            self.locked_pixel = Some(pixel);
            self.locked_color = self.last_color;
        }
        self.locked
    }

    /// The readout for the current state without feeding an observation.
    pub fn readout(&self) -> Readout {
        if self.locked {
            Readout {
                pixel: self.locked_pixel,
                color: self.locked_color,
                locked: true,
            }
        } else {
            Readout {
                pixel: self.last_pixel,
                color: self.last_color,
                locked: false,
            }
        }
    }

    /// Full reset, used on detach. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
