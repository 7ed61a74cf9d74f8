use clap::Parser;
use env_logger::Env;
use qr_matrix::{ECLevel, MaskPattern, QrEncoder, QrMatrix};
use std::io::{IsTerminal, Read};
use std::process::ExitCode;

/// Largest payload read from a pipe
const STDIN_LIMIT: u64 = 64 * 1024;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Print the QR Code module grid for a text")]
struct Cli {
    /// Text to encode; words are joined with a space. Read from stdin when omitted
    text: Vec<String>,

    /// Error correction level (L, M, Q or H)
    #[arg(short, long, default_value = "M")]
    ec_level: ECLevel,

    /// Encode the scheme and host of http(s) URLs as alphanumeric
    #[arg(short = 'u', long = "url")]
    url: bool,

    /// Force a mask pattern (0-7) instead of searching
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..8))]
    mask: Option<u8>,

    /// Log the chosen version, mask and penalty
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();

    match run(&cli) {
        Ok(symbol) => {
            print_grid(&symbol);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("qrtool: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<QrMatrix, Box<dyn std::error::Error>> {
    let text = read_text(cli)?;
    let mut encoder = QrEncoder::new()
        .ec_level(cli.ec_level)
        .optimize_for_url(cli.url);
    if let Some(mask) = cli.mask.and_then(MaskPattern::from_bits) {
        encoder = encoder.mask(mask);
    }

    let symbol = encoder.encode(text.as_str())?;
    log::info!(
        "version {} ({}x{}), level {}, mask {}, penalty {}",
        symbol.version,
        symbol.size(),
        symbol.size(),
        symbol.error_correction,
        symbol.mask_pattern.index(),
        symbol.penalty
    );
    Ok(symbol)
}

fn read_text(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err("no text given (pass it as an argument or pipe it on stdin)".into());
    }
    let mut text = String::new();
    stdin.lock().take(STDIN_LIMIT).read_to_string(&mut text)?;
    Ok(text.trim().to_string())
}

fn print_grid(symbol: &QrMatrix) {
    for row in symbol.to_rows() {
        let line: String = row.iter().map(|&m| if m == 1 { '1' } else { '0' }).collect();
        println!("{line}");
    }
}
