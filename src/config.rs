use crate::error::SplitError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Field delimiter of the source file. Single ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const SEMICOLON: Delimiter = Delimiter(b';');
    pub const COMMA: Delimiter = Delimiter(b',');
    pub const TAB: Delimiter = Delimiter(b'\t');
    pub const PIPE: Delimiter = Delimiter(b'|');

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::SEMICOLON
    }
}

impl FromStr for Delimiter {
    type Err = SplitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\\t" | "tab" => Ok(Delimiter::TAB),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() && c != '\n' && c != '\r' && c != '"' => {
                        Ok(Delimiter(c as u8))
                    }
                    _ => Err(SplitError::Config(format!(
                        "Invalid delimiter: {:?} (expected a single ASCII character)",
                        s
                    ))),
                }
            }
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => write!(f, "\\t"),
            b => write!(f, "{}", b as char),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub source: PathBuf,
    pub delimiter: Delimiter,
    /// Maximum archive size in megabytes (1 MB = 1,048,576 bytes). Not checked
    /// here; callers must pass a positive value.
    pub max_size_mb: f64,
    pub show_progress: bool,
    pub verify: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            delimiter: Delimiter::default(),
            max_size_mb: 10.0,
            show_progress: true,
            verify: false,
        }
    }
}

impl SplitConfig {
    pub fn new(source: impl Into<PathBuf>, max_size_mb: f64) -> Self {
        Self {
            source: source.into(),
            max_size_mb,
            ..Default::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Rejects limits the splitting arithmetic cannot work with.
    pub fn validate(&self) -> Result<(), SplitError> {
        if !self.max_size_mb.is_finite() || self.max_size_mb <= 0.0 {
            return Err(SplitError::Config(format!(
                "Maximum size must be a positive number of megabytes, got {}",
                self.max_size_mb
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::SEMICOLON);
        assert_eq!(",".parse::<Delimiter>().unwrap(), Delimiter::COMMA);
        assert_eq!("\\t".parse::<Delimiter>().unwrap(), Delimiter::TAB);
        assert_eq!("\t".parse::<Delimiter>().unwrap(), Delimiter::TAB);
        assert_eq!("|".parse::<Delimiter>().unwrap(), Delimiter::PIPE);
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(matches!("".parse::<Delimiter>(), Err(SplitError::Config(_))));
        assert!(matches!(";;".parse::<Delimiter>(), Err(SplitError::Config(_))));
        assert!(matches!("é".parse::<Delimiter>(), Err(SplitError::Config(_))));
        assert!(matches!("\"".parse::<Delimiter>(), Err(SplitError::Config(_))));
    }

    #[test]
    fn test_delimiter_display() {
        assert_eq!(Delimiter::TAB.to_string(), "\\t");
        assert_eq!(Delimiter::SEMICOLON.to_string(), ";");
    }

    #[test]
    fn test_config_builder() {
        let config = SplitConfig::new("data.csv", 2.5)
            .with_delimiter(Delimiter::COMMA)
            .with_progress(false)
            .with_verify(true);

        assert_eq!(config.source, PathBuf::from("data.csv"));
        assert_eq!(config.delimiter, Delimiter::COMMA);
        assert_eq!(config.max_size_mb, 2.5);
        assert!(!config.show_progress);
        assert!(config.verify);
    }

    #[test]
    fn test_validate_max_size() {
        assert!(SplitConfig::new("a.csv", 1.0).validate().is_ok());
        assert!(SplitConfig::new("a.csv", 0.0).validate().is_err());
        assert!(SplitConfig::new("a.csv", -3.0).validate().is_err());
        assert!(SplitConfig::new("a.csv", f64::NAN).validate().is_err());
        assert!(SplitConfig::new("a.csv", f64::INFINITY).validate().is_err());
    }
}
