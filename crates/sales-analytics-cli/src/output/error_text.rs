use sales_analytics_core::AnalyticsError;

pub fn render_error(error: &AnalyticsError) -> String {
    let mut lines = vec![
        "The sales pipeline could not finish.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use sales_analytics_core::AnalyticsError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = AnalyticsError::new(
            "invalid_argument",
            "bad input",
            vec!["run sales-analytics --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("The sales pipeline could not finish."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run sales-analytics --help"));
    }

    #[test]
    fn falls_back_to_retry_step() {
        let error = AnalyticsError::internal_serialization("boom");
        let rendered = render_error(&error);
        assert!(rendered.ends_with("  1. Retry the command."));
    }
}
