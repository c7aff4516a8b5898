use chrono::Local;
use sales_analytics_core::commands::analyze::{self, AnalyzeOptions};
use sales_analytics_core::commands::run::{self, RunOptions};
use sales_analytics_core::{AnalyticsResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> AnalyticsResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Run {
            input,
            catalog,
            region,
            enriched_out,
            report_out,
            json: _,
        } => run::run(RunOptions {
            input: input.clone(),
            catalog: catalog.clone(),
            region: region.clone(),
            enriched_output: enriched_out.clone(),
            report_output: report_out.clone(),
            home_override: None,
            generated_at: Some(Local::now().naive_local()),
        }),
        Commands::Analyze {
            input,
            region,
            top,
            threshold,
            json: _,
        } => analyze::run(AnalyzeOptions {
            input: input.clone(),
            region: region.clone(),
            top_n: *top,
            low_performer_threshold: *threshold,
            home_override: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn analyze_dispatches_with_missing_input() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let input = dir.path().join("absent.txt");
            let input = input.to_string_lossy().to_string();
            let parsed = parse_from(["sales-analytics", "analyze", "--input", input.as_str()]);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                let response = dispatch(&cli);
                assert!(response.is_ok());
                if let Ok(success) = response {
                    assert_eq!(success.command, "analyze");
                    assert_eq!(success.data["ingest"]["lines_read"], 0);
                }
            }
        }
    }

    #[test]
    fn analyze_with_zero_top_is_invalid_argument() {
        let parsed = parse_from(["sales-analytics", "analyze", "--top", "0"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }
}
