//! Delimiter and prefix settings for variable expansion.

use bon::bon;

use crate::error::Error;

/// Key prefix marking an entry as a variable.
pub const DEFAULT_VARIABLE_PREFIX: &str = "variables.";

/// Opening part of a variable token.
pub const DEFAULT_OPENING_DELIMITER: &str = "${";

/// Closing part of a variable token.
pub const DEFAULT_CLOSING_DELIMITER: &str = "}";

/// Immutable settings for [`expand_variables`](super::expand_variables).
///
/// All three strings are guaranteed non-blank.
///
/// # Example
///
/// ```
/// use polyglot::ExpanderSettings;
///
/// let settings = ExpanderSettings::builder()
///     .variable_prefix("var.")
///     .build()
///     .unwrap();
/// assert_eq!(settings.variable_prefix(), "var.");
/// assert_eq!(settings.opening_delimiter(), "${");
/// assert_eq!(settings.closing_delimiter(), "}");
///
/// assert!(ExpanderSettings::builder().opening_delimiter("  ").build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderSettings {
    variable_prefix: String,
    opening_delimiter: String,
    closing_delimiter: String,
}

impl ExpanderSettings {
    /// Closing delimiter shipped by older releases of the settings type.
    ///
    /// Files written against it use tokens like `${name$}`. It is never the
    /// default; select it explicitly through the builder.
    pub const LEGACY_CLOSING_DELIMITER: &'static str = "$}";
}

#[bon]
impl ExpanderSettings {
    #[builder]
    pub fn new(
        #[builder(into, default = DEFAULT_VARIABLE_PREFIX.to_owned())] variable_prefix: String,
        #[builder(into, default = DEFAULT_OPENING_DELIMITER.to_owned())] opening_delimiter: String,
        #[builder(into, default = DEFAULT_CLOSING_DELIMITER.to_owned())] closing_delimiter: String,
    ) -> Result<Self, Error> {
        require_non_blank("variable prefix", &variable_prefix)?;
        require_non_blank("opening delimiter", &opening_delimiter)?;
        require_non_blank("closing delimiter", &closing_delimiter)?;
        Ok(Self {
            variable_prefix,
            opening_delimiter,
            closing_delimiter,
        })
    }

    pub fn variable_prefix(&self) -> &str {
        &self.variable_prefix
    }

    pub fn opening_delimiter(&self) -> &str {
        &self.opening_delimiter
    }

    pub fn closing_delimiter(&self) -> &str {
        &self.closing_delimiter
    }

    /// The token a variable named `name` is searched for as.
    pub fn token(&self, name: &str) -> String {
        format!("{}{name}{}", self.opening_delimiter, self.closing_delimiter)
    }
}

impl Default for ExpanderSettings {
    fn default() -> Self {
        Self {
            variable_prefix: DEFAULT_VARIABLE_PREFIX.to_owned(),
            opening_delimiter: DEFAULT_OPENING_DELIMITER.to_owned(),
            closing_delimiter: DEFAULT_CLOSING_DELIMITER.to_owned(),
        }
    }
}

pub(crate) fn require_non_blank(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::BlankSetting { name });
    }
    Ok(())
}
