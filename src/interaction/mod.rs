use serde::{Deserialize, Serialize};

/// Raw single-pointer touch event in content pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchEvent {
    Pressed { x: f64 },
    Moved { x: f64 },
    Released,
}

/// Pinch gesture sample as reported by the host scale recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchEvent {
    /// Per-event scale factor already computed by the recognizer.
    pub scale_factor: f64,
    /// True while the recognizer considers the two-finger gesture active.
    pub in_progress: bool,
}

/// Transient touch-interaction state.
///
/// `last_touch_x` is `None` between drags so a legitimate touch at pixel 0
/// is not mistaken for "no active touch".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    last_touch_x: Option<f64>,
    scale_active: bool,
    scrollable: bool,
    scalable: bool,
}

impl GestureState {
    #[must_use]
    pub fn is_scrollable(self) -> bool {
        self.scrollable
    }

    #[must_use]
    pub fn is_scalable(self) -> bool {
        self.scalable
    }

    /// True iff a touch drag is in flight (a move has been seen since the
    /// last press or release).
    #[must_use]
    pub fn is_user_interacting(self) -> bool {
        self.last_touch_x.is_some()
    }

    #[must_use]
    pub fn is_scale_active(self) -> bool {
        self.scale_active
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    /// Enabling scale support forces scroll support on: a scalable chart
    /// without scrolling would trap the user in a zoomed window.
    pub fn set_scalable(&mut self, scalable: bool) {
        self.scalable = scalable;
        if scalable {
            self.scrollable = true;
        }
    }

    pub fn set_scale_active(&mut self, active: bool) {
        self.scale_active = active;
    }

    /// Advances the touch lifecycle and returns the drag pixel delta to pan
    /// by, if this event produced one.
    ///
    /// A press resets the recorded coordinate, so the first move after it
    /// only records a position; every following move yields a delta.
    pub fn on_touch(&mut self, event: TouchEvent) -> Option<f64> {
        match event {
            TouchEvent::Pressed { .. } => {
                self.last_touch_x = None;
                None
            }
            TouchEvent::Moved { x } => {
                let delta = self.last_touch_x.map(|previous| x - previous);
                self.last_touch_x = Some(x);
                delta
            }
            TouchEvent::Released => {
                self.last_touch_x = None;
                None
            }
        }
    }
}
