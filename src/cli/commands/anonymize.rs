//! Anonymize command implementation
//!
//! Pseudonymizes addresses given on the command line, or one per line on stdin,
//! with the configured secret. Handy for rewriting existing access logs so they
//! correlate with what the live interceptor reports.

use crate::anonymization::ClientIpResolver;
use crate::config::load_config;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

/// Output format for anonymized addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One address per line
    Text,
    /// One JSON object per line
    Json,
}

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Addresses to anonymize (reads stdin when omitted)
    pub addresses: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Anonymize even if anonymization.enabled is false
    #[arg(long)]
    pub force: bool,

    /// Print the original address next to its pseudonym
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Serialize)]
struct AnonymizedAddress<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    original: Option<&'a str>,
    pseudonymized: &'a str,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.execute_with(config_path, stdin.lock(), &mut stdout.lock())
    }

    /// Execute against an explicit input and output instead of stdin/stdout
    pub fn execute_with<R: BufRead, W: Write>(
        &self,
        config_path: &str,
        input: R,
        out: &mut W,
    ) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let mut settings = config.anonymization;
        if self.force {
            settings.enabled = true;
        }
        if !settings.is_active() {
            eprintln!("⚠️  Anonymization is not active; addresses are printed unchanged");
        }

        let resolver = ClientIpResolver::fixed(settings);

        let count = if self.addresses.is_empty() {
            self.rewrite_lines(&resolver, input, out)?
        } else {
            for address in &self.addresses {
                writeln!(out, "{}", self.render(address, &resolver.resolve(address))?)?;
            }
            self.addresses.len()
        };
        out.flush()?;

        tracing::debug!(count, "Anonymized addresses");
        Ok(0)
    }

    /// Rewrite one address per input line.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily so a single bad line
    /// cannot abort a partially written run.
    fn rewrite_lines<R: BufRead, W: Write>(
        &self,
        resolver: &ClientIpResolver,
        mut input: R,
        out: &mut W,
    ) -> anyhow::Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0usize;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            count += 1;

            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                tracing::warn!(line = count, "Input line is not valid UTF-8; decoded lossily");
            }
            writeln!(out, "{}", self.render(&line, &resolver.resolve(&line))?)?;
        }

        Ok(count)
    }

    /// Render one output line
    fn render(&self, original: &str, pseudonymized: &str) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Text if self.reveal => Ok(format!("{original}\t{pseudonymized}")),
            OutputFormat::Text => Ok(pseudonymized.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&AnonymizedAddress {
                original: self.reveal.then_some(original),
                pseudonymized,
            })?),
        }
    }
}
