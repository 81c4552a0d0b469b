//! Geometry, font and wrapping parameters of a generated document.
//!
//! One immutable [`DocumentConfig`] is passed by reference through layout,
//! content encoding and graph building. Nothing reads process-wide state.

/// Parameters shared by all pipeline stages. Lengths are in PDF user space
/// units (1/72 inch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    pub page_width: i32,
    pub page_height: i32,
    pub margin_left: i32,
    pub margin_top: i32,
    pub line_height: i32,
    pub font_size: i32,
    /// Maximum number of characters of a display line.
    pub max_line_chars: usize,
    /// Name of one of the standard Type1 fonts.
    pub base_font: String,
    /// Name the content streams use to select the font.
    pub font_resource: String,
}

impl Default for DocumentConfig {
    /// A4 portrait, Helvetica 10 on a 14 unit grid, 100 characters per line.
    fn default() -> Self {
        Self {
            page_width: 595,
            page_height: 842,
            margin_left: 50,
            margin_top: 50,
            line_height: 14,
            font_size: 10,
            max_line_chars: 100,
            base_font: "Helvetica".to_string(),
            font_resource: "F1".to_string(),
        }
    }
}

impl DocumentConfig {
    pub fn with_page_size(mut self, width: i32, height: i32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_margins(mut self, left: i32, top: i32) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self
    }

    pub fn with_line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_font_size(mut self, font_size: i32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_max_line_chars(mut self, max_line_chars: usize) -> Self {
        self.max_line_chars = max_line_chars;
        self
    }

    pub fn with_base_font(mut self, base_font: impl Into<String>) -> Self {
        self.base_font = base_font.into();
        self
    }

    /// Display lines per page: `(page_height - 2 * margin_top) / line_height`,
    /// rounded down. Never less than one.
    pub fn page_capacity(&self) -> usize {
        if self.line_height <= 0 {
            return 1;
        }
        self.margin_top
            .checked_mul(2)
            .and_then(|margins| self.page_height.checked_sub(margins))
            .and_then(|usable| usize::try_from(usable / self.line_height).ok())
            .unwrap_or(0)
            .max(1)
    }

    /// Baseline of the first line, top left of the text area.
    pub fn text_origin(&self) -> (i32, i32) {
        (self.margin_left, self.page_height.saturating_sub(self.margin_top))
    }

    pub fn media_box(&self) -> [i32; 4] {
        [0, 0, self.page_width, self.page_height]
    }
}
