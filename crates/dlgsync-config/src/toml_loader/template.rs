/// Default config file content. Every setting is commented out.
pub(super) fn default_config_toml() -> &'static str {
    r#"# dlgsync configuration
# Only override what you want to change -- missing fields use defaults.

[labels]
# ok = "Done"
# cancel = "Cancel"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"#
}
