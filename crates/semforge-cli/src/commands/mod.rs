//! Command handlers.
//!
//! One module per subcommand.  Each exposes an `execute` function taking its
//! parsed arguments plus the shared [`crate::config::AppConfig`] and
//! [`crate::output::OutputManager`].

pub mod completions;
pub mod generate;
pub mod init;
pub mod show;

use crate::config::AppConfig;

/// Resolve the launcher prefix: an explicit `--launcher` flag wins over the
/// configured default.  The flag value is split on whitespace so users can
/// pass multi-word prefixes like `"/opt/slicer/Slicer --launch"`.
pub(crate) fn resolve_launcher(flag: Option<&str>, config: &AppConfig) -> Vec<String> {
    match flag {
        Some(raw) => raw.split_whitespace().map(str::to_string).collect(),
        None => config.batch.launcher.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_split_on_whitespace() {
        let config = AppConfig::default();
        let launcher = resolve_launcher(Some("/opt/slicer/Slicer --launch"), &config);
        assert_eq!(launcher, vec!["/opt/slicer/Slicer", "--launch"]);
    }

    #[test]
    fn config_supplies_the_fallback() {
        let mut config = AppConfig::default();
        config.batch.launcher = vec!["nice".into(), "-n".into(), "10".into()];
        assert_eq!(resolve_launcher(None, &config), config.batch.launcher);
    }

    #[test]
    fn empty_flag_yields_empty_prefix() {
        let mut config = AppConfig::default();
        config.batch.launcher = vec!["ignored".into()];
        assert!(resolve_launcher(Some(""), &config).is_empty());
    }
}
