/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use crate::error::ReportError;
    use crate::types::OutputFormat;
    use serde_json::{Value, json};
    use std::path::PathBuf;

    fn args(labels: Option<bool>) -> CliArgs {
        CliArgs {
            input: "findings.json".to_string(),
            output: PathBuf::from("-"),
            format: OutputFormat::Text,
            labels,
            rule_sets: vec!["R1".to_string()],
        }
    }

    #[test]
    fn test_show_labels_unset() {
        let context = ReportContext::new();
        assert_eq!(context.show_labels().unwrap(), None);
    }

    #[test]
    fn test_show_labels_explicit_values() {
        let mut context = ReportContext::new();
        context.set(SHOW_LABELS_KEY, Value::Bool(true));
        assert_eq!(context.show_labels().unwrap(), Some(true));

        context.set(SHOW_LABELS_KEY, Value::Bool(false));
        assert_eq!(context.show_labels().unwrap(), Some(false));
    }

    #[test]
    fn test_show_labels_wrong_type_is_context_error() {
        let mut context = ReportContext::new();
        context.set(SHOW_LABELS_KEY, json!({"nested": true}));

        let err = context.show_labels().unwrap_err();
        assert!(matches!(err, ReportError::Context { .. }));
        assert!(err.to_string().contains("show-labels"));
    }

    #[test]
    fn test_cli_flag_wins_over_env() {
        let options = build_render_options_with_env(&args(Some(false)), Some("true".to_string())).unwrap();
        assert_eq!(options.label_mode, Some(false));
    }

    #[test]
    fn test_env_used_when_flag_absent() {
        for (raw, expected) in [("true", Some(true)), ("YES", Some(true)), ("0", Some(false)), ("", None)] {
            let options = build_render_options_with_env(&args(None), Some(raw.to_string())).unwrap();
            assert_eq!(options.label_mode, expected, "env value {:?}", raw);
        }
    }

    #[test]
    fn test_malformed_env_fails_resolution() {
        let err = build_render_options_with_env(&args(None), Some("sometimes".to_string())).unwrap_err();
        assert!(matches!(err, ReportError::Context { .. }));
    }

    #[test]
    fn test_options_carry_cli_settings() {
        let options = build_render_options_with_env(&args(None), None).unwrap();

        assert_eq!(options.input, "findings.json");
        assert_eq!(options.output, PathBuf::from("-"));
        assert_eq!(options.format, OutputFormat::Text);
        assert_eq!(options.label_mode, None);
        assert_eq!(options.rule_sets, vec!["R1".to_string()]);
    }
}
