use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use unibase::{
    decode_all, transcode, truncate_utf8_to_byte_size, Ascii, CodePoint, Encoding, EncodingKind,
    Utf16, Utf32, Utf8,
};
use unibase_contracts::{
    UNIBASE_ERROR_REPORT_SCHEMA_VERSION, UNIBASE_INSPECT_REPORT_SCHEMA_VERSION,
    UNIBASE_TRANSCODE_REPORT_SCHEMA_VERSION, UNIBASE_TRUNCATE_REPORT_SCHEMA_VERSION,
};

mod units;

use units::{decode_units, encode_units, parse_endian, Endian, WireUnit};

const EXIT_FAILURE: u8 = 2;
const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "unibase")]
#[command(about = "Transcode, truncate and inspect Unicode text files.", long_about = None)]
struct Cli {
    /// Suppress the stderr summary (also: UNIBASE_QUIET=1).
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a file between ASCII, UTF-8, UTF-16 and UTF-32.
    Transcode {
        #[arg(long, value_enum)]
        from: EncodingKind,
        #[arg(long, value_enum)]
        to: EncodingKind,
        /// Byte order of UTF-16/UTF-32 input and output.
        #[arg(long, value_parser = parse_endian, default_value = "le")]
        endian: Endian,
        #[arg(long)]
        r#in: PathBuf,
        /// Where to write the converted units; omitted means report only.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Exit with status 3 if any input code point was invalid.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Cut UTF-8 to a byte budget without splitting a character.
    Truncate {
        #[arg(long)]
        bytes: usize,
        #[arg(long)]
        r#in: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List every code point of a file with its offset and validity.
    Inspect {
        #[arg(long, value_enum)]
        encoding: EncodingKind,
        #[arg(long, value_parser = parse_endian, default_value = "le")]
        endian: Endian,
        #[arg(long)]
        r#in: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct TranscodeReport {
    schema_version: &'static str,
    from: EncodingKind,
    to: EncodingKind,
    endian: Endian,
    input_units: usize,
    output_units: usize,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct TruncateReport {
    schema_version: &'static str,
    input_bytes: usize,
    budget: usize,
    output_bytes: usize,
    truncated: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    schema_version: &'static str,
    encoding: EncodingKind,
    units: usize,
    code_points: Vec<InspectEntry>,
    valid_count: usize,
    invalid_count: usize,
}

#[derive(Debug, Serialize)]
struct InspectEntry {
    offset: usize,
    code_point: CodePoint,
    valid: bool,
    character: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    schema_version: &'static str,
    error: String,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            let report = ErrorReport {
                schema_version: UNIBASE_ERROR_REPORT_SCHEMA_VERSION,
                error: format!("{err:#}"),
            };
            if let Ok(json) = serde_json::to_string(&report) {
                println!("{json}");
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let quiet = cli.quiet || env_bool("UNIBASE_QUIET");
    match cli.command {
        Command::Transcode {
            from,
            to,
            endian,
            r#in,
            out,
            strict,
        } => cmd_transcode(from, to, endian, &r#in, out.as_deref(), strict, quiet),
        Command::Truncate { bytes, r#in, out } => {
            cmd_truncate(bytes, &r#in, out.as_deref(), quiet)
        }
        Command::Inspect {
            encoding,
            endian,
            r#in,
        } => cmd_inspect(encoding, endian, &r#in, quiet),
    }
}

fn env_bool(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "yes"))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read input: {}", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write output: {}", path.display()))
}

fn print_report<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

// Binds a local type alias to the `Encoding` marker for a runtime kind.
macro_rules! with_encoding {
    ($kind:expr, $E:ident => $body:expr) => {
        match $kind {
            EncodingKind::Ascii => {
                type $E = Ascii;
                $body
            }
            EncodingKind::Utf8 => {
                type $E = Utf8;
                $body
            }
            EncodingKind::Utf16 => {
                type $E = Utf16;
                $body
            }
            EncodingKind::Utf32 => {
                type $E = Utf32;
                $body
            }
        }
    };
}

struct Transcoded {
    bytes: Vec<u8>,
    input_units: usize,
    output_units: usize,
    valid: bool,
}

fn transcode_bytes<S, D>(input: &[u8], endian: Endian) -> Result<Transcoded>
where
    S: Encoding,
    D: Encoding,
    S::Unit: WireUnit,
    D::Unit: WireUnit,
{
    let src: Vec<S::Unit> = decode_units(input, endian)
        .with_context(|| format!("decode {} input", S::NAME))?;
    let (dest, valid) = transcode::<S, D>(&src);
    Ok(Transcoded {
        bytes: encode_units(&dest, endian),
        input_units: src.len(),
        output_units: dest.len(),
        valid,
    })
}

fn cmd_transcode(
    from: EncodingKind,
    to: EncodingKind,
    endian: Endian,
    in_path: &Path,
    out_path: Option<&Path>,
    strict: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let input = read_input(in_path)?;
    let result = with_encoding!(from, S => with_encoding!(to, D => transcode_bytes::<S, D>(&input, endian)))?;

    if let Some(out_path) = out_path {
        write_output(out_path, &result.bytes)?;
    }

    print_report(&TranscodeReport {
        schema_version: UNIBASE_TRANSCODE_REPORT_SCHEMA_VERSION,
        from,
        to,
        endian,
        input_units: result.input_units,
        output_units: result.output_units,
        valid: result.valid,
    })?;

    if !quiet {
        eprintln!(
            "transcode {} -> {} ({}): {} units -> {} units{}",
            from.as_str(),
            to.as_str(),
            endian.as_str(),
            result.input_units,
            result.output_units,
            if result.valid { "" } else { ", replaced invalid input" }
        );
    }

    if strict && !result.valid {
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_truncate(
    budget: usize,
    in_path: &Path,
    out_path: Option<&Path>,
    quiet: bool,
) -> Result<ExitCode> {
    let input = read_input(in_path)?;
    let output = truncate_utf8_to_byte_size(&input, budget);

    if let Some(out_path) = out_path {
        write_output(out_path, output)?;
    }

    print_report(&TruncateReport {
        schema_version: UNIBASE_TRUNCATE_REPORT_SCHEMA_VERSION,
        input_bytes: input.len(),
        budget,
        output_bytes: output.len(),
        truncated: output.len() != input.len(),
    })?;

    if !quiet {
        eprintln!(
            "truncate: {} bytes -> {} bytes (budget {budget})",
            input.len(),
            output.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn inspect_units<E>(input: &[u8], endian: Endian) -> Result<(usize, Vec<InspectEntry>)>
where
    E: Encoding,
    E::Unit: WireUnit,
{
    let src: Vec<E::Unit> = decode_units(input, endian)
        .with_context(|| format!("decode {} input", E::NAME))?;
    let entries = decode_all::<E>(&src)
        .map(|(offset, decoded)| InspectEntry {
            offset,
            code_point: decoded.code_point,
            valid: decoded.valid,
            character: decoded
                .valid
                .then(|| decoded.code_point.to_char())
                .flatten()
                .map(String::from),
        })
        .collect();
    Ok((src.len(), entries))
}

fn cmd_inspect(
    encoding: EncodingKind,
    endian: Endian,
    in_path: &Path,
    quiet: bool,
) -> Result<ExitCode> {
    let input = read_input(in_path)?;
    let (units, code_points) = with_encoding!(encoding, E => inspect_units::<E>(&input, endian))?;
    let invalid_count = code_points.iter().filter(|e| !e.valid).count();

    let report = InspectReport {
        schema_version: UNIBASE_INSPECT_REPORT_SCHEMA_VERSION,
        encoding,
        units,
        valid_count: code_points.len() - invalid_count,
        invalid_count,
        code_points,
    };
    print_report(&report)?;

    if !quiet {
        eprintln!(
            "inspect {}: {} units, {} code points, {} invalid",
            encoding.as_str(),
            units,
            report.code_points.len(),
            invalid_count
        );
    }
    Ok(ExitCode::SUCCESS)
}
