use iced::{Degrees, Padding, Point, Radians, Rectangle, Transformation};

use crate::viewport::{SafeArea, Viewport};

/// Scale of the content panel while the menu is open.
pub const OPEN_SCALE: f32 = 0.8;
/// Horizontal panel offset, as a fraction of the window width.
pub const OPEN_OFFSET_RATIO: f32 = 0.5;
/// Rotation about the vertical axis while open with 3D enabled.
pub const OPEN_YAW: Degrees = Degrees(-32.0);
pub const OPEN_CORNER_RADIUS: f32 = 12.0;
pub const OPEN_SHADOW_BLUR: f32 = 14.0;
pub const SHADOW_ALPHA: f32 = 0.6;

/// Visual state of the content panel at some point of the transition.
///
/// `progress` runs from `0.0` (closed) to `1.0` (open); every property is a
/// linear blend between the two end states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub scale: f32,
    pub offset_x: f32,
    pub yaw: Degrees,
    pub corner_radius: f32,
    pub shadow_blur: f32,
    /// Inset applied to the panel frame. Grows to the safe area when open.
    pub frame_inset: SafeArea,
    /// Padding between the panel frame and the content.
    pub content_padding: Padding,
}

impl PanelGeometry {
    pub fn closed(viewport: Viewport) -> Self {
        Self::at(0.0, viewport, false)
    }

    pub fn open(viewport: Viewport, enable_3d: bool) -> Self {
        Self::at(1.0, viewport, enable_3d)
    }

    pub fn at(progress: f32, viewport: Viewport, enable_3d: bool) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let yaw = if enable_3d { OPEN_YAW.0 } else { 0.0 };
        let safe_area = viewport.safe_area;

        Self {
            scale: lerp(1.0, OPEN_SCALE, progress),
            offset_x: viewport.width * OPEN_OFFSET_RATIO * progress,
            yaw: Degrees(yaw * progress),
            corner_radius: OPEN_CORNER_RADIUS * progress,
            shadow_blur: OPEN_SHADOW_BLUR * progress,
            frame_inset: safe_area.scale(progress),
            content_padding: Padding {
                top: safe_area.top * (1.0 - progress),
                bottom: safe_area.bottom * (1.0 - progress),
                left: 0.0,
                right: 0.0,
            },
        }
    }

    /// Uniform scale after projecting the yaw onto the screen plane.
    ///
    /// The renderer only supports 2D affine transformations, so the turn
    /// about the vertical axis shows up as foreshortening.
    pub fn projected_scale(&self) -> f32 {
        let yaw = Radians::from(self.yaw);
        self.scale * yaw.0.cos().abs()
    }

    /// Panel frame inside `bounds`, before projection.
    pub fn frame(&self, bounds: Rectangle) -> Rectangle {
        let inset = self.frame_inset;
        Rectangle {
            x: bounds.x + inset.left,
            y: bounds.y + inset.top,
            width: (bounds.width - inset.left - inset.right).max(0.0),
            height: (bounds.height - inset.top - inset.bottom).max(0.0),
        }
    }

    /// Transformation applied when drawing a panel with the given `frame`.
    pub fn transformation(&self, frame: Rectangle) -> Transformation {
        let scale = self.projected_scale();
        let center = frame.center();
        Transformation::translate(
            (1.0 - scale) * center.x + self.offset_x,
            (1.0 - scale) * center.y,
        ) * Transformation::scale(scale)
    }

    /// On-screen rectangle covered by the panel.
    pub fn project(&self, frame: Rectangle) -> Rectangle {
        let scale = self.projected_scale();
        let center = frame.center();
        let width = frame.width * scale;
        let height = frame.height * scale;
        Rectangle {
            x: center.x - width / 2.0 + self.offset_x,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Map an on-screen point back into the untransformed panel space.
    pub fn unproject(&self, frame: Rectangle, point: Point) -> Point {
        let scale = self.projected_scale();
        if scale <= f32::EPSILON {
            return frame.center();
        }
        let center = frame.center();
        Point::new(
            (point.x - self.offset_x - (1.0 - scale) * center.x) / scale,
            (point.y - (1.0 - scale) * center.y) / scale,
        )
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
