use crate::Point;

/// Transform applied to a card when it is drawn.
///
/// Rotation is expressed in degrees around the layer's center, positive
/// values rotate clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation_z: f32,
}

impl GraphicsLayer {
    pub fn translated(offset: Point) -> Self {
        Self {
            translation_x: offset.x,
            translation_y: offset.y,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_z = degrees;
        self
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
        }
    }
}
