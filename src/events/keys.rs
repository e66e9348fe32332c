//! Key names used in configuration files.
//!
//! Delimiter keys are written as names (`"enter"`, `"tab"`, `"space"`, ...)
//! or as a single literal character such as `","`.

use crossterm::event::KeyCode;
use thiserror::Error;

/// A key name that does not map to a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name '{0}'")]
pub struct KeyNameError(pub String);

/// Parse a configured key name.
pub fn parse_key_name(name: &str) -> Result<KeyCode, KeyNameError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match name.trim().to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "comma" => Ok(KeyCode::Char(',')),
        "semicolon" => Ok(KeyCode::Char(';')),
        _ => Err(KeyNameError(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(parse_key_name("enter"), Ok(KeyCode::Enter));
        assert_eq!(parse_key_name("Tab"), Ok(KeyCode::Tab));
        assert_eq!(parse_key_name("space"), Ok(KeyCode::Char(' ')));
        assert_eq!(parse_key_name("comma"), Ok(KeyCode::Char(',')));
        assert_eq!(parse_key_name("Escape"), Ok(KeyCode::Esc));
    }

    #[test]
    fn test_single_character() {
        assert_eq!(parse_key_name(","), Ok(KeyCode::Char(',')));
        assert_eq!(parse_key_name("T"), Ok(KeyCode::Char('T')));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            parse_key_name("hyper"),
            Err(KeyNameError("hyper".to_string()))
        );
        assert!(parse_key_name("").is_err());
    }
}
