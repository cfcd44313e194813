//! Configuration for the conversion pipeline

/// Object name fragments whose rows never become completion items.
pub const DEFAULT_EXCLUDED_OBJECTS: [&str; 2] = ["Array", "ColorSpace"];

/// Configuration for converting an Arlington TSV into completion JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Rows whose `Object` contains any of these (case-sensitive) are dropped
    pub excluded_objects: Vec<String>,

    /// ID given to the first emitted completion item (0 is treated as 1)
    pub first_id: u64,

    /// Spaces per indentation level in the written JSON
    pub indent: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            excluded_objects: DEFAULT_EXCLUDED_OBJECTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            first_id: 1,
            indent: 2,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Debug, Default)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    /// Replace the excluded object patterns
    pub fn excluded_objects<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excluded_objects = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the first completion ID (IDs below 1 are raised to 1)
    pub fn first_id(mut self, id: u64) -> Self {
        self.config.first_id = id.max(1);
        self
    }

    /// Set the JSON indentation width
    pub fn indent(mut self, width: usize) -> Self {
        self.config.indent = width;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
