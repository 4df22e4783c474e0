use std::fmt;

pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;

/// Horizontal extent of a container as reported by live layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Divider position as a percentage of the container width, always in `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position(f64);

impl Position {
    pub const START: Position = Position(POSITION_MIN);
    pub const END: Position = Position(POSITION_MAX);

    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::START;
        }
        Self(percent.clamp(POSITION_MIN, POSITION_MAX))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn offset_css(self) -> String {
        format!("{}%", self.0)
    }

    pub fn clip_polygon(self) -> ClipPolygon {
        ClipPolygon::reveal_to(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

pub fn compute_position(pointer_x: f64, bounds: Bounds) -> Position {
    if !bounds.width.is_finite() || bounds.width <= 0.0 {
        return Position::START;
    }
    let relative_x = pointer_x - bounds.left;
    Position::new(relative_x / bounds.width * 100.0)
}

/// Visible region of the "after" layer, in percent of its own box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPolygon {
    pub vertices: [(f64, f64); 4],
}

impl ClipPolygon {
    pub fn reveal_to(position: Position) -> Self {
        let x = position.percent();
        Self {
            vertices: [
                (POSITION_MIN, POSITION_MIN),
                (x, POSITION_MIN),
                (x, POSITION_MAX),
                (POSITION_MIN, POSITION_MAX),
            ],
        }
    }
}

impl fmt::Display for ClipPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("polygon(")?;
        for (index, (x, y)) in self.vertices.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}% {y}%")?;
        }
        f.write_str(")")
    }
}
