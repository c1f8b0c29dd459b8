//! Window metrics used to place the content panel.
//!
//! The side menu never reaches into a global window registry. Instead it asks
//! an injected [`ViewportMetrics`] provider for the host window size and its
//! safe-area insets. When the provider knows nothing about the window, the
//! layout silently falls back to the device screen size.

use iced::{Size, window};

/// Screen size assumed when no window has been observed yet.
pub const FALLBACK_SCREEN_SIZE: Size = Size::new(1024.0, 768.0);

/// Insets of the region obscured by device chrome (notches, bars).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeArea {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl SafeArea {
    pub const ZERO: SafeArea = SafeArea {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }

    /// Scale every inset by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
            left: self.left * factor,
        }
    }
}

/// Metrics of a resolved host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub size: Size,
    pub safe_area: SafeArea,
}

/// Geometry inputs after fallback resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub safe_area: SafeArea,
}

/// Capability that reports host window metrics.
pub trait ViewportMetrics {
    /// Metrics of the host window, if one is known.
    fn window(&self) -> Option<WindowMetrics>;

    /// Device-level screen size used when no window is known.
    fn screen_size(&self) -> Size {
        FALLBACK_SCREEN_SIZE
    }

    /// Observe a window lifecycle event.
    fn observe(&mut self, _event: &window::Event) {}
}

/// Resolve the viewport, degrading to the screen size when needed.
pub fn resolve(metrics: &dyn ViewportMetrics) -> Viewport {
    match metrics.window() {
        Some(window) => Viewport {
            width: window.size.width,
            safe_area: window.safe_area,
        },
        None => Viewport {
            width: metrics.screen_size().width,
            safe_area: SafeArea::ZERO,
        },
    }
}

/// Default provider that follows the host window through its events.
#[derive(Debug, Clone, Default)]
pub struct WindowTracker {
    size: Option<Size>,
    safe_area: SafeArea,
    screen_size: Option<Size>,
}

impl WindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report fixed safe-area insets for the tracked window.
    pub fn with_safe_area(mut self, safe_area: SafeArea) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Seed the window size before the first window event arrives.
    ///
    /// Hosts pass the size they open their window with, so the first frame
    /// is laid out for the real window.
    pub fn with_window_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Override the fallback screen size.
    pub fn with_screen_size(mut self, size: Size) -> Self {
        self.screen_size = Some(size);
        self
    }
}

impl ViewportMetrics for WindowTracker {
    fn window(&self) -> Option<WindowMetrics> {
        self.size.map(|size| WindowMetrics {
            size,
            safe_area: self.safe_area,
        })
    }

    fn screen_size(&self) -> Size {
        self.screen_size.unwrap_or(FALLBACK_SCREEN_SIZE)
    }

    fn observe(&mut self, event: &window::Event) {
        match event {
            window::Event::Opened { size, .. }
            | window::Event::Resized(size) => {
                self.size = Some(*size);
            },
            window::Event::Closed => {
                self.size = None;
            },
            _ => {},
        }
    }
}
