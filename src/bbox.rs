use serde_derive::{Deserialize, Serialize};

/// Axis-aligned sign annotation in left-top-width-height pixel format,
/// tagged with the sign id and the file name of the frame it belongs to.
///
/// No range checks are made: zero or negative sizes are stored as given.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    id: i32,
    frame_label: String,
}

impl BoundingBox {
    #[inline]
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        id: i32,
        frame_label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            id,
            frame_label: frame_label.into(),
        }
    }

    /// Zeroed box with an empty frame label, same as `Default`
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Overwrites every field, including the id and the frame label.
    pub fn set_box(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        id: i32,
        frame_label: impl Into<String>,
    ) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self.id = id;
        self.frame_label = frame_label.into();
    }

    #[inline(always)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// File name with extension, e.g. `001875.jpg`
    #[inline(always)]
    pub fn frame_label(&self) -> &str {
        &self.frame_label
    }
}
