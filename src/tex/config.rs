//! Configuration for TeX document assembly

/// Configuration options for the generated document
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Raster format the compiler converts to, e.g. `"png"`
    ///
    /// When set, the document class carries a `convert` option that makes
    /// the compiler emit `\jobname.<ext>` next to the PDF. Conversion
    /// requires the compiler to run with shell escape enabled.
    pub convert_to: Option<String>,

    /// Distance from the root to the branch ring
    pub level_one_distance: String,

    /// Distance from each branch to its leaf ring
    pub level_two_distance: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            convert_to: Some("png".to_string()),
            level_one_distance: "5cm".to_string(),
            level_two_distance: "3cm".to_string(),
        }
    }
}

impl DocumentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raster conversion format
    pub fn with_convert_to(mut self, ext: impl Into<String>) -> Self {
        self.convert_to = Some(ext.into());
        self
    }

    /// Disable raster conversion; the compiler stops at the PDF
    pub fn without_conversion(mut self) -> Self {
        self.convert_to = None;
        self
    }

    /// Set the level distances
    pub fn with_level_distances(
        mut self,
        level_one: impl Into<String>,
        level_two: impl Into<String>,
    ) -> Self {
        self.level_one_distance = level_one.into();
        self.level_two_distance = level_two.into();
        self
    }

    /// Whether compiling this document needs shell escape
    pub fn shell_escape(&self) -> bool {
        self.convert_to.is_some()
    }
}
