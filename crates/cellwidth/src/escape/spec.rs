//! Escape configuration.
//!
//! An [`EscapeSpec`] decides which codepoints are rewritten into visible text,
//! what happens to invalid UTF-8, which tab size lines are measured with, and
//! which width table is used. Build one in code with [`EscapeSpec::builder`]
//! or load it from YAML/JSON through [`EscapeConfig`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tabs::{TabStops, DEFAULT_TAB_SIZE};
use crate::width::WidthProfile;

/// Treatment of byte sequences that are not valid UTF-8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidUtf8 {
    /// Each invalid byte becomes `\xNN`.
    #[default]
    Hex,
    /// Each invalid sequence becomes U+FFFD.
    Replace,
}

/// Validated escape configuration.
///
/// Substitution is a single left-to-right pass keyed by codepoint. Each
/// codepoint is looked up once and its replacement is emitted verbatim, so
/// replacements never overlap and are never escaped again. Lookup order:
///
/// 1. explicit mappings added with [`EscapeSpecBuilder::escape`],
/// 2. control characters other than `\t`, when [`controls`](Self::controls)
///    is on: `\r \a \b \v \f` by name, everything else as `\xNN` (below
///    U+0080) or `\uNNNN`,
/// 3. everything else is copied as-is.
///
/// # Example
///
/// ```rust
/// use cellwidth::EscapeSpec;
///
/// let spec = EscapeSpec::builder()
///     .tab_size(4)
///     .escape('\\', "\\\\")
///     .build()
///     .unwrap();
///
/// let value = spec.escape(b"a\\b\r", 0);
/// assert_eq!(value.as_str(), "a\\\\b\\r");
/// assert_eq!(value.width(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeSpec {
    tab_stops: TabStops,
    mappings: BTreeMap<char, String>,
    controls: bool,
    invalid_utf8: InvalidUtf8,
    widths: WidthProfile,
}

impl Default for EscapeSpec {
    fn default() -> Self {
        EscapeSpec {
            tab_stops: TabStops::default(),
            mappings: BTreeMap::new(),
            controls: true,
            invalid_utf8: InvalidUtf8::default(),
            widths: WidthProfile::default(),
        }
    }
}

impl EscapeSpec {
    pub fn builder() -> EscapeSpecBuilder {
        EscapeSpecBuilder::default()
    }

    /// A spec that substitutes nothing in valid UTF-8 input.
    ///
    /// Escaping output that was already escaped with this spec is a no-op.
    pub fn none() -> Self {
        EscapeSpec {
            controls: false,
            ..Default::default()
        }
    }

    /// Parses a YAML escape configuration.
    ///
    /// ```rust
    /// use cellwidth::EscapeSpec;
    ///
    /// let spec = EscapeSpec::from_yaml(r#"
    /// tab_size: 4
    /// widths: cjk
    /// escapes:
    ///   "\\": "\\\\"
    /// "#).unwrap();
    /// assert_eq!(spec.tab_size(), 4);
    /// assert_eq!(spec.mapping('\\'), Some("\\\\"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed YAML and
    /// [`Error::InvalidConfiguration`] for rejected values.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: EscapeConfig = serde_yaml::from_str(yaml)?;
        EscapeSpec::try_from(config)
    }

    /// Parses a JSON escape configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON and
    /// [`Error::InvalidConfiguration`] for rejected values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EscapeConfig = serde_json::from_str(json)?;
        EscapeSpec::try_from(config)
    }

    pub fn tab_size(&self) -> usize {
        self.tab_stops.size()
    }

    pub fn tab_stops(&self) -> TabStops {
        self.tab_stops
    }

    /// Whether control characters are rewritten.
    pub fn controls(&self) -> bool {
        self.controls
    }

    pub fn invalid_utf8(&self) -> InvalidUtf8 {
        self.invalid_utf8
    }

    pub fn widths(&self) -> WidthProfile {
        self.widths
    }

    /// Explicit replacement configured for `c`, if any.
    pub fn mapping(&self, c: char) -> Option<&str> {
        self.mappings.get(&c).map(String::as_str)
    }

    /// Converts back into its serializable form.
    pub fn to_config(&self) -> EscapeConfig {
        EscapeConfig {
            tab_size: self.tab_size(),
            controls: self.controls,
            invalid_utf8: self.invalid_utf8,
            widths: self.widths,
            escapes: self
                .mappings
                .iter()
                .map(|(c, text)| (c.to_string(), text.clone()))
                .collect(),
        }
    }
}

/// Builder for [`EscapeSpec`].
///
/// Starts from the defaults: tab size 8, control escaping on, invalid bytes
/// as `\xNN`, standard widths, no explicit mappings.
#[derive(Clone, Debug)]
pub struct EscapeSpecBuilder {
    tab_size: usize,
    mappings: BTreeMap<char, String>,
    controls: bool,
    invalid_utf8: InvalidUtf8,
    widths: WidthProfile,
}

impl Default for EscapeSpecBuilder {
    fn default() -> Self {
        EscapeSpecBuilder {
            tab_size: DEFAULT_TAB_SIZE,
            mappings: BTreeMap::new(),
            controls: true,
            invalid_utf8: InvalidUtf8::default(),
            widths: WidthProfile::default(),
        }
    }
}

impl EscapeSpecBuilder {
    /// Set the tab size. Zero is rejected by [`build`](Self::build).
    pub fn tab_size(mut self, size: usize) -> Self {
        self.tab_size = size;
        self
    }

    /// Replace every `c` with `text`. A later call for the same `c` wins.
    pub fn escape(mut self, c: char, text: impl Into<String>) -> Self {
        self.mappings.insert(c, text.into());
        self
    }

    /// Toggle rewriting of control characters.
    pub fn controls(mut self, enabled: bool) -> Self {
        self.controls = enabled;
        self
    }

    pub fn invalid_utf8(mut self, mode: InvalidUtf8) -> Self {
        self.invalid_utf8 = mode;
        self
    }

    pub fn widths(mut self, profile: WidthProfile) -> Self {
        self.widths = profile;
        self
    }

    /// Validates and builds the spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the tab size is zero,
    /// when `\n` is mapped (lines are split before escaping), or when a
    /// replacement contains a tab, newline or other control character.
    pub fn build(self) -> Result<EscapeSpec> {
        let tab_stops = TabStops::new(self.tab_size)?;

        for (c, text) in &self.mappings {
            if *c == '\n' {
                return Err(reject("newline cannot be escaped".to_string()));
            }
            if text.chars().any(char::is_control) {
                return Err(reject(format!(
                    "replacement for {c:?} contains a control character: {text:?}"
                )));
            }
        }

        Ok(EscapeSpec {
            tab_stops,
            mappings: self.mappings,
            controls: self.controls,
            invalid_utf8: self.invalid_utf8,
            widths: self.widths,
        })
    }
}

fn reject(msg: String) -> Error {
    tracing::debug!(%msg, "rejected escape configuration");
    Error::InvalidConfiguration(msg)
}

/// Serializable escape configuration.
///
/// Missing fields take the [`EscapeSpec::default`] values. Keys of
/// `escapes` must be exactly one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EscapeConfig {
    pub tab_size: usize,
    pub controls: bool,
    pub invalid_utf8: InvalidUtf8,
    pub widths: WidthProfile,
    pub escapes: BTreeMap<String, String>,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        EscapeSpec::default().to_config()
    }
}

impl TryFrom<EscapeConfig> for EscapeSpec {
    type Error = Error;

    fn try_from(config: EscapeConfig) -> Result<Self> {
        let mut builder = EscapeSpec::builder()
            .tab_size(config.tab_size)
            .controls(config.controls)
            .invalid_utf8(config.invalid_utf8)
            .widths(config.widths);

        for (key, text) in config.escapes {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(reject(format!(
                        "escape key must be a single character, got {key:?}"
                    )));
                }
            };
            builder = builder.escape(c, text);
        }

        builder.build()
    }
}
