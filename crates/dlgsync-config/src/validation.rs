//! Config validation.

use crate::schema::DlgsyncConfig;
use dlgsync_common::ConfigError;

/// Longest accepted button label, in characters.
pub const MAX_LABEL_LEN: usize = 64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DlgsyncConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_label(&mut errors, "labels.ok", &config.labels.ok);
    validate_label(&mut errors, "labels.cancel", &config.labels.cancel);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_label(errors: &mut Vec<String>, field: &str, label: &str) {
    if label.trim().is_empty() {
        errors.push(format!("{field} must not be empty"));
    }
    if label.contains(['\n', '\r']) {
        errors.push(format!("{field} must be a single line"));
    }
    let len = label.chars().count();
    if len > MAX_LABEL_LEN {
        errors.push(format!("{field} is {len} characters, max {MAX_LABEL_LEN}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DlgsyncConfig::default()).is_ok());
    }

    #[test]
    fn empty_label_rejected() {
        let mut config = DlgsyncConfig::default();
        config.labels.ok = "   ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("labels.ok must not be empty"));
    }

    #[test]
    fn multiline_label_rejected() {
        let mut config = DlgsyncConfig::default();
        config.labels.cancel = "Can\ncel".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("labels.cancel must be a single line"));
    }

    #[test]
    fn overlong_label_rejected() {
        let mut config = DlgsyncConfig::default();
        config.labels.ok = "x".repeat(MAX_LABEL_LEN + 1);
        assert!(validate(&config).is_err());

        config.labels.ok = "x".repeat(MAX_LABEL_LEN);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn errors_are_collected() {
        let mut config = DlgsyncConfig::default();
        config.labels.ok = String::new();
        config.labels.cancel = String::new();
        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("labels.ok"));
        assert!(msg.contains("labels.cancel"));
    }
}
