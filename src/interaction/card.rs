use std::time::Duration;

/// Degrees of rotation when the pointer sits on the card's edge.
pub const TILT_MULTIPLIER: f64 = 10.0;

/// Viewports matching this query get the compact card and no tilt.
pub const SMALL_VIEWPORT_QUERY: &str = "(max-width: 768px)";

/// Card size in CSS pixels as `(width, height)`.
pub const CARD_SIZE_DESKTOP: (u32, u32) = (480, 260);
pub const CARD_SIZE_COMPACT: (u32, u32) = (320, 220);

/// Which face of the business card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipState {
    /// Identity card.
    #[default]
    Front,
    /// Navigation menu.
    Back,
}

impl FlipState {
    pub fn toggled(self) -> FlipState {
        match self {
            FlipState::Front => FlipState::Back,
            FlipState::Back => FlipState::Front,
        }
    }
}

/// Length of one face's exit or entrance rotation.
pub const FLIP_DURATION: Duration = Duration::from_millis(600);

/// What the card is rendering during a flip.
///
/// A click first rotates the current face out; the other face is only
/// mounted once that exit has finished, so the two never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// A face is at rest. `entered` is false until the first flip, so the
    /// initial render does not animate.
    Showing { face: FlipState, entered: bool },
    /// `face` is rotating out.
    Exiting { face: FlipState },
}

impl Default for CardFace {
    fn default() -> Self {
        CardFace::Showing {
            face: FlipState::default(),
            entered: false,
        }
    }
}

impl CardFace {
    /// The face currently mounted.
    pub fn face(&self) -> FlipState {
        match self {
            CardFace::Showing { face, .. } | CardFace::Exiting { face } => *face,
        }
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self, CardFace::Exiting { .. })
    }

    /// Whether the mounted face should play its entrance rotation.
    pub fn is_entering(&self) -> bool {
        matches!(self, CardFace::Showing { entered: true, .. })
    }

    /// Start a flip. Returns `None` while a face is already exiting, so
    /// clicks during the exit are ignored.
    pub fn begin_flip(self) -> Option<CardFace> {
        match self {
            CardFace::Showing { face, .. } => Some(CardFace::Exiting { face }),
            CardFace::Exiting { .. } => None,
        }
    }

    /// Finish the exit and mount the other face.
    pub fn finish_exit(self) -> CardFace {
        match self {
            CardFace::Exiting { face } => CardFace::Showing {
                face: face.toggled(),
                entered: true,
            },
            showing => showing,
        }
    }
}

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The card's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn center(&self) -> Pointer {
        Pointer::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation in degrees around the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const ZERO: Tilt = Tilt { x: 0.0, y: 0.0 };

    pub fn to_css(&self) -> String {
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", self.x, self.y)
    }
}

/// Tilt the card towards the pointer.
///
/// Rotation is linear in the pointer's offset from the card centre, scaled by
/// the card size so the edges reach [`TILT_MULTIPLIER`] degrees. Returns
/// [`Tilt::ZERO`] when the card has not been measured yet, has no area, or the
/// viewport is small.
pub fn compute_tilt(pointer: Pointer, rect: Option<CardRect>, small_viewport: bool) -> Tilt {
    let Some(rect) = rect else {
        return Tilt::ZERO;
    };
    if small_viewport || rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::ZERO;
    }

    let center = rect.center();
    Tilt {
        x: (center.y - pointer.y) / rect.height * TILT_MULTIPLIER,
        y: (pointer.x - center.x) / rect.width * TILT_MULTIPLIER,
    }
}

pub fn card_size(small_viewport: bool) -> (u32, u32) {
    if small_viewport {
        CARD_SIZE_COMPACT
    } else {
        CARD_SIZE_DESKTOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_rect() -> CardRect {
        CardRect {
            left: 100.0,
            top: 50.0,
            width: 480.0,
            height: 260.0,
        }
    }

    #[test]
    fn test_flip_toggles_between_two_faces() {
        let mut state = FlipState::default();
        assert_eq!(state, FlipState::Front);
        state = state.toggled();
        assert_eq!(state, FlipState::Back);
        state = state.toggled();
        assert_eq!(state, FlipState::Front);
    }

    #[test]
    fn test_flip_exits_before_entering() {
        let card = CardFace::default();
        assert_eq!(card.face(), FlipState::Front);
        assert!(!card.is_entering(), "first render must not animate");

        // Front rotates out while still mounted
        let card = card.begin_flip().unwrap();
        assert_eq!(card, CardFace::Exiting { face: FlipState::Front });
        assert_eq!(card.face(), FlipState::Front);
        assert!(card.is_exiting());

        // Then the back face enters
        let card = card.finish_exit();
        assert_eq!(card.face(), FlipState::Back);
        assert!(card.is_entering());
        assert!(!card.is_exiting());

        let card = card.begin_flip().unwrap().finish_exit();
        assert_eq!(card.face(), FlipState::Front);
    }

    #[test]
    fn test_clicks_during_exit_are_ignored() {
        let exiting = CardFace::default().begin_flip().unwrap();
        assert_eq!(exiting.begin_flip(), None);
    }

    #[test]
    fn test_finish_exit_without_exit_is_no_op() {
        let card = CardFace::default();
        assert_eq!(card.finish_exit(), card);
    }

    #[test]
    fn test_tilt_zero_at_center() {
        let rect = desktop_rect();
        let tilt = compute_tilt(rect.center(), Some(rect), false);
        assert_eq!(tilt, Tilt::ZERO);
    }

    #[test]
    fn test_tilt_at_edges() {
        let rect = desktop_rect();
        // Right edge, vertically centred
        let tilt = compute_tilt(Pointer::new(580.0, 180.0), Some(rect), false);
        assert!((tilt.y - 5.0).abs() < 1e-9, "got {:?}", tilt);
        assert!(tilt.x.abs() < 1e-9);

        // Top edge, horizontally centred: card leans back
        let tilt = compute_tilt(Pointer::new(340.0, 50.0), Some(rect), false);
        assert!((tilt.x - 5.0).abs() < 1e-9, "got {:?}", tilt);
        assert!(tilt.y.abs() < 1e-9);
    }

    #[test]
    fn test_tilt_is_linear_in_offset() {
        let rect = desktop_rect();
        let center = rect.center();
        let near = compute_tilt(Pointer::new(center.x + 24.0, center.y), Some(rect), false);
        let far = compute_tilt(Pointer::new(center.x + 48.0, center.y), Some(rect), false);
        assert!((far.y - 2.0 * near.y).abs() < 1e-9);
    }

    #[test]
    fn test_small_viewport_never_tilts() {
        let rect = desktop_rect();
        for (x, y) in [(0.0, 0.0), (580.0, 310.0), (-1000.0, 4000.0), (340.0, 180.0)] {
            assert_eq!(
                compute_tilt(Pointer::new(x, y), Some(rect), true),
                Tilt::ZERO,
                "pointer ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn test_unmeasured_or_empty_card_does_not_tilt() {
        assert_eq!(compute_tilt(Pointer::new(10.0, 10.0), None, false), Tilt::ZERO);
        let empty = CardRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        let tilt = compute_tilt(Pointer::new(10.0, 10.0), Some(empty), false);
        assert_eq!(tilt, Tilt::ZERO);
    }

    #[test]
    fn test_tilt_css() {
        let tilt = Tilt { x: 1.5, y: -2.25 };
        assert_eq!(tilt.to_css(), "rotateX(1.50deg) rotateY(-2.25deg)");
    }

    #[test]
    fn test_card_size() {
        assert_eq!(card_size(false), (480, 260));
        assert_eq!(card_size(true), (320, 220));
    }
}
