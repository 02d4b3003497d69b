//! Shared configuration loader for the literate toolchain.
//!
//! `defaults/literate.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`LiterateConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use literate_analysis::{NavigationOptions, TooltipOptions, ViewOptions};
use literate_babel::{MarkdownOptions, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/literate.default.toml");

/// Top-level configuration consumed by literate applications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiterateConfig {
    pub render: RenderOptions,
    pub markdown: MarkdownOptions,
    pub navigation: NavigationOptions,
    pub tooltip: TooltipOptions,
}

impl LiterateConfig {
    /// The subset a [`literate_analysis::LiterateView`] needs.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            render: self.render.clone(),
            navigation: self.navigation.clone(),
            tooltip: self.tooltip.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `render.fallback_title` from the command line.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LiterateConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LiterateConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use literate_analysis::tooltip::Corner;
    use literate_analysis::Axis;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_type_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render, RenderOptions::default());
        assert_eq!(config.markdown, MarkdownOptions::default());
        assert_eq!(config.navigation, NavigationOptions::default());
        assert_eq!(config.tooltip, TooltipOptions::default());
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("navigation.axis", "both")
            .expect("override to apply")
            .set_override("navigation.scroll_duration_ms", 50)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.navigation.axis, Axis::Both);
        assert_eq!(config.navigation.scroll_duration_ms, 50);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[render]\nsource_selector = \"#listing\"\n\n[tooltip.position]\ntooltip = \"top-left\""
        )
        .unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();

        assert_eq!(config.render.source_selector, "#listing");
        assert_eq!(config.render.comment_class, "comment");
        assert_eq!(config.tooltip.position.tooltip, Corner::TopLeft);
        assert_eq!(config.tooltip.position.target, Corner::TopMiddle);
    }

    #[test]
    fn optional_file_may_be_absent() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/literate.toml")
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn required_file_must_exist() {
        let config = Loader::new().with_file("/nonexistent/literate.toml").build();
        assert!(config.is_err());
    }

    #[test]
    fn unknown_axis_is_rejected() {
        let config = Loader::new()
            .set_override("navigation.axis", "diagonal")
            .unwrap()
            .build();
        assert!(config.is_err());
    }
}
