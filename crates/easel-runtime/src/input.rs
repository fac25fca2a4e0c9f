//! Platform-neutral input events.
//!
//! The web bridge converts DOM `KeyboardEvent`/`MouseEvent`s into these so
//! game code never touches the browser API.

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A key press or release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// `KeyboardEvent.key`, e.g. `"ArrowRight"` or `"a"`.
    pub key: String,
    /// `KeyboardEvent.code`, the physical key, e.g. `"KeyA"`.
    pub code: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            code: String::new(),
            modifiers: Modifiers::default(),
        }
    }
}

/// Which mouse button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A mouse press or move, in unscaled canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub offset_x: f64,
    pub offset_y: f64,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            button: MouseButton::Primary,
            modifiers: Modifiers::default(),
        }
    }

    /// Position in drawing coordinates under a one-shot `scale`.
    pub fn scaled_position(&self, scale: f64) -> (f64, f64) {
        (self.offset_x / scale, self.offset_y / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_position_divides_offsets() {
        let e = MouseEvent::new(300.0, 101.0);
        assert_eq!(e.scaled_position(2.0), (150.0, 50.5));
        assert_eq!(e.scaled_position(1.0), (300.0, 101.0));
    }

    #[test]
    fn dom_buttons_map() {
        assert_eq!(MouseButton::from_dom(0), MouseButton::Primary);
        assert_eq!(MouseButton::from_dom(2), MouseButton::Secondary);
        assert_eq!(MouseButton::from_dom(4), MouseButton::Other(4));
    }
}
