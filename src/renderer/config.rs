//! Per-call options for responsive markup generation

/// Options for one render call
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Added to the viewBox width before computing the aspect ratio
    pub offset_x: f64,

    /// Added to the viewBox height before computing the aspect ratio
    pub offset_y: f64,

    /// Replaces the effective width entirely when set
    pub width: Option<f64>,

    /// Replaces the effective height entirely when set
    pub height: Option<f64>,

    /// Extra CSS classes for the wrapper, space separated
    pub class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            width: None,
            height: None,
            class: String::new(),
        }
    }
}

impl RenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width offset
    pub fn with_offset_x(mut self, offset: f64) -> Self {
        self.offset_x = offset;
        self
    }

    /// Set the height offset
    pub fn with_offset_y(mut self, offset: f64) -> Self {
        self.offset_y = offset;
        self
    }

    /// Override the effective width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the effective height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the extra wrapper classes
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}
