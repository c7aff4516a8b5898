use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extended help shown after `sales-analytics run --help`.
pub const RUN_AFTER_HELP: &str = "\
Input format:
  One record per line, eight pipe-separated fields, no header:
    TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region
  Example:
    T001|2024-12-01|P101|Laptop|2|45,000|C001|North

  Lines with the wrong field count, an ID without its `T`/`P` prefix, an empty
  customer or region, or a non-positive quantity or price are skipped and counted.

Outputs:
  Enriched data  pipe-separated copy of every kept record plus
                 API_Category|API_Brand|API_Rating|API_Match
  Report         fixed-layout text report with every section present

Paths:
  Relative paths resolve against $SALES_ANALYTICS_HOME when it is set,
  otherwise against the current directory.
";

#[derive(Debug, Parser)]
#[command(name = "sales-analytics")]
#[command(about = "Clean, analyze and report on pipe-delimited sales data")]
#[command(version)]
pub struct Cli {
    /// Log pipeline progress to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Clean and enrich the sales file, then write the enriched data and the report
    #[command(after_long_help = RUN_AFTER_HELP)]
    Run {
        /// Sales data file (default: data/sales_data.txt)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Product catalog JSON file shaped like {"products": [...]}
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Keep only records from this region (case-insensitive)
        #[arg(long)]
        region: Option<String>,
        /// Enriched data destination (default: data/enriched_sales_data.txt)
        #[arg(long)]
        enriched_out: Option<PathBuf>,
        /// Report destination (default: output/sales_report.txt)
        #[arg(long)]
        report_out: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Compute every analytic for the sales file without writing anything
    Analyze {
        /// Sales data file (default: data/sales_data.txt)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Keep only records from this region (case-insensitive)
        #[arg(long)]
        region: Option<String>,
        /// Number of top products to list
        #[arg(long)]
        top: Option<usize>,
        /// Products sold fewer times than this are low performers
        #[arg(long)]
        threshold: Option<i64>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 8] = [
            vec!["sales-analytics", "run"],
            vec!["sales-analytics", "run", "--json"],
            vec!["sales-analytics", "run", "--input", "sales.txt", "--region", "North"],
            vec![
                "sales-analytics",
                "run",
                "--catalog",
                "catalog.json",
                "--enriched-out",
                "out/enriched.txt",
                "--report-out",
                "out/report.txt",
            ],
            vec!["sales-analytics", "analyze"],
            vec!["sales-analytics", "analyze", "--top", "3", "--threshold", "20"],
            vec!["sales-analytics", "analyze", "--json", "--verbose"],
            vec!["sales-analytics", "--verbose", "run"],
        ];

        for args in cases {
            let parsed = parse_from(args.clone());
            assert!(parsed.is_ok(), "{args:?}");
        }
    }

    #[test]
    fn run_flags_land_in_fields() {
        let parsed = parse_from([
            "sales-analytics",
            "run",
            "--input",
            "in.txt",
            "--region",
            "south",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(!cli.verbose);
            match cli.command {
                Commands::Run {
                    input,
                    region,
                    json,
                    catalog,
                    ..
                } => {
                    assert_eq!(input, Some(PathBuf::from("in.txt")));
                    assert_eq!(region.as_deref(), Some("south"));
                    assert!(json);
                    assert!(catalog.is_none());
                }
                Commands::Analyze { .. } => panic!("expected run"),
            }
        }
    }

    #[test]
    fn rejects_non_numeric_top() {
        let parsed = parse_from(["sales-analytics", "analyze", "--top", "many"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let parsed = parse_from(["sales-analytics", "report"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::InvalidSubcommand);
        }
    }
}
