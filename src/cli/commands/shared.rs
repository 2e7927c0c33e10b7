//! Shared components for CLI commands

use crate::cli::args::Args;
use anyhow::Result;
use clap::CommandFactory;
use colored::*;
use std::io::{self, Write};
use tracing::debug;

/// Set up structured logging on stderr.
///
/// `RUST_LOG` wins over the `-v` / `-q` flags when set.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adlist_builder={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Write the top-level help text, used when no subcommand is given
pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    Args::command().write_help(out)?;
    writeln!(out)
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!("\n{}", title.bright_green().bold());
    println!("{}", "━".repeat(title.chars().count().max(24)));
}

/// Print one `label: value` line
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("   • {}: {}", label, value.to_string().bright_white().bold());
}

/// Human-readable duration from milliseconds
pub fn format_duration_ms(ms: u128) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_help_lists_subcommands() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ad-list"));
        assert!(text.contains("email-list"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_write_help_reports_io_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(write_help(&mut Closed).is_err());
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
    }
}
