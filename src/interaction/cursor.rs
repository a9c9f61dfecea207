use super::card::Pointer;

/// Diameter of the trailing dot in pixels.
pub const DOT_SIZE: f64 = 8.0;

/// Visual mode of the custom cursor ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Default,
    Clicked,
    Link,
    Hidden,
}

/// Raw pointer flags collected from document events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub position: Pointer,
    pub pressed: bool,
    pub over_link: bool,
    pub outside: bool,
}

impl CursorState {
    /// Hidden wins over pressed, pressed over link hover.
    pub fn mode(&self) -> CursorMode {
        if self.outside {
            CursorMode::Hidden
        } else if self.pressed {
            CursorMode::Clicked
        } else if self.over_link {
            CursorMode::Link
        } else {
            CursorMode::Default
        }
    }

    pub fn ring(&self) -> RingGeometry {
        RingGeometry::for_mode(self.mode(), self.position)
    }

    /// Top-left corner of the dot, centred on the pointer.
    pub fn dot_origin(&self) -> Pointer {
        Pointer::new(
            self.position.x - DOT_SIZE / 2.0,
            self.position.y - DOT_SIZE / 2.0,
        )
    }
}

/// Placement of the cursor ring, with the ring centred on the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl RingGeometry {
    pub fn for_mode(mode: CursorMode, at: Pointer) -> Self {
        let (size, opacity) = match mode {
            CursorMode::Default => (32.0, 1.0),
            CursorMode::Clicked => (28.0, 1.0),
            CursorMode::Link => (48.0, 1.0),
            CursorMode::Hidden => (32.0, 0.0),
        };
        Self {
            x: at.x - size / 2.0,
            y: at.y - size / 2.0,
            size,
            opacity,
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px); width: {size}px; height: {size}px; opacity: {}",
            self.x,
            self.y,
            self.opacity,
            size = self.size,
        )
    }
}
