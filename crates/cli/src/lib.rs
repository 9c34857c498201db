//! `taxid` command: check, format and complete CPF/CNPJ numbers.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use brenoerp_taxid::{
    TaxId, TaxIdError, TaxIdKind, complete_cnpj, complete_cpf, format_cnpj, format_cpf, normalize,
};

#[derive(Debug, Parser)]
#[command(name = "taxid")]
#[command(about = "Validate and format Brazilian CPF/CNPJ numbers")]
pub struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate each value; exits non-zero if any is invalid
    Check {
        #[arg(long, value_enum, default_value_t = KindArg::Auto)]
        kind: KindArg,

        /// Print one JSON object per value
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Apply the canonical mask (no checksum verification)
    Format {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Append check digits to a 9-digit (CPF) or 12-digit (CNPJ) base
    Complete { base: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Auto,
    Cpf,
    Cnpj,
}

impl KindArg {
    fn kind(self) -> Option<TaxIdKind> {
        match self {
            KindArg::Auto => None,
            KindArg::Cpf => Some(TaxIdKind::Cpf),
            KindArg::Cnpj => Some(TaxIdKind::Cnpj),
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckReport {
    input: String,
    kind: Option<TaxIdKind>,
    valid: bool,
    formatted: Option<String>,
    reason: Option<String>,
}

fn check(value: &str, kind: KindArg) -> CheckReport {
    let parsed = match kind.kind() {
        Some(kind) => TaxId::parse_as(kind, value),
        None => TaxId::parse(value),
    };

    match parsed {
        Ok(tax_id) => CheckReport {
            input: value.to_string(),
            kind: Some(tax_id.kind()),
            valid: true,
            formatted: Some(tax_id.to_string()),
            reason: None,
        },
        Err(err) => CheckReport {
            input: value.to_string(),
            kind: kind.kind().or_else(|| TaxIdKind::detect(value)),
            valid: false,
            formatted: None,
            reason: Some(err.to_string()),
        },
    }
}

fn format_any(value: &str) -> String {
    match TaxIdKind::detect(value) {
        Some(TaxIdKind::Cpf) => format_cpf(value),
        Some(TaxIdKind::Cnpj) => format_cnpj(value),
        None => normalize(value),
    }
}

fn complete(base: &str) -> Result<TaxId, TaxIdError> {
    let len = normalize(base).len();
    if len == TaxIdKind::Cnpj.expected_len() - 2 {
        complete_cnpj(base).map(TaxId::from)
    } else {
        complete_cpf(base).map(TaxId::from)
    }
}

/// Execute `cli`, writing results to `out`.
///
/// Returns `Ok(false)` when at least one checked value was invalid.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<bool> {
    match &cli.command {
        Command::Check { kind, json, values } => {
            let mut all_valid = true;
            for value in values {
                let report = check(value, *kind);
                tracing::debug!(valid = report.valid, kind = ?report.kind, "checked value");
                all_valid &= report.valid;

                if *json {
                    serde_json::to_writer(&mut *out, &report).context("writing JSON report")?;
                    writeln!(out)?;
                } else {
                    let kind = report.kind.map_or_else(|| "?".to_string(), |k| k.to_string());
                    match (&report.formatted, &report.reason) {
                        (Some(formatted), _) => writeln!(out, "{formatted}\t{kind}\tvalid")?,
                        (None, reason) => writeln!(
                            out,
                            "{}\t{kind}\tinvalid: {}",
                            report.input,
                            reason.as_deref().unwrap_or("unknown")
                        )?,
                    }
                }
            }
            Ok(all_valid)
        }
        Command::Format { values } => {
            for value in values {
                writeln!(out, "{}", format_any(value))?;
            }
            Ok(true)
        }
        Command::Complete { base } => {
            let tax_id = complete(base).with_context(|| "cannot complete base digits")?;
            writeln!(out, "{tax_id}")?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (anyhow::Result<bool>, String) {
        let cli = Cli::try_parse_from(std::iter::once("taxid").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_prints_formatted_valid_values() {
        let (result, out) = run_args(&["check", "12345678909", "11222333000181"]);
        assert!(result.unwrap());
        assert_eq!(
            out,
            "123.456.789-09\tCPF\tvalid\n11.222.333/0001-81\tCNPJ\tvalid\n"
        );
    }

    #[test]
    fn check_reports_invalid_with_reason() {
        let (result, out) = run_args(&["check", "11.222.333/0001-44"]);
        assert!(!result.unwrap());
        assert_eq!(
            out,
            "11.222.333/0001-44\tCNPJ\tinvalid: CNPJ check digits do not match\n"
        );
    }

    #[test]
    fn check_with_forced_kind() {
        let (result, out) = run_args(&["check", "--kind", "cpf", "11222333000181"]);
        assert!(!result.unwrap());
        assert!(out.contains("expected 11 digits for a CPF"), "{out}");
    }

    #[test]
    fn check_json_lines() {
        let (result, out) = run_args(&["check", "--json", "123.456.789-09", "x"]);
        assert!(!result.unwrap());

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["valid"], true);
        assert_eq!(lines[0]["kind"], "cpf");
        assert_eq!(lines[1]["valid"], false);
        assert_eq!(lines[1]["kind"], serde_json::Value::Null);
    }

    #[test]
    fn format_masks_by_length() {
        let (result, out) = run_args(&["format", "12345678909", "11222333000181", "12-3"]);
        assert!(result.unwrap());
        assert_eq!(out, "123.456.789-09\n11.222.333/0001-81\n123\n");
    }

    #[test]
    fn complete_infers_kind_from_base_length() {
        let (_, out) = run_args(&["complete", "123456789"]);
        assert_eq!(out, "123.456.789-09\n");

        let (_, out) = run_args(&["complete", "11.222.333/0001"]);
        assert_eq!(out, "11.222.333/0001-81\n");

        let (result, _) = run_args(&["complete", "12"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_requires_a_value() {
        assert!(Cli::try_parse_from(["taxid", "check"]).is_err());
    }
}
