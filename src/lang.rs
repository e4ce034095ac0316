use std::fmt;
use std::str::FromStr;

const DEFAULT_CODE: &str = "ja";
const MAX_CODE_LEN: usize = 12;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LangError {
    #[error("language code must not be empty")]
    Empty,

    #[error("invalid language code '{0}': use letters, digits and '-' (e.g. 'ja', 'zh-CN')")]
    Invalid(String),
}

/// Target language code passed to the translation backend. Defaults to Japanese.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang(String);

impl Lang {
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self(DEFAULT_CODE.to_string())
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(LangError::Empty);
        }
        let valid = code.len() <= MAX_CODE_LEN
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !code.starts_with('-')
            && !code.ends_with('-');
        if !valid {
            return Err(LangError::Invalid(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
