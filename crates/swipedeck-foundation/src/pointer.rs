use swipedeck_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample delivered by the host, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_millis: u64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_millis: u64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_millis,
        }
    }

    pub fn down(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerEventKind::Down, position, 0)
    }

    pub fn moved(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerEventKind::Move, position, 0)
    }

    pub fn up(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerEventKind::Up, position, 0)
    }

    pub fn cancel(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, 0)
    }

    pub fn at(mut self, uptime_millis: u64) -> Self {
        self.uptime_millis = uptime_millis;
        self
    }
}
