//! `xorpar` - encode data with XOR parity and exercise single-chunk recovery

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use xorpar::args::{parse_args, CliConfig, InputSource};
use xorpar::codec::{decode, encode, recover_chunk, recover_parity, EncodedSet};
use xorpar::reporters::{CodecReporter, ConsoleReporter, SilentReporter};
use xorpar::stripe::{Loss, Stripe};
use xorpar::verify::{verify_encoded, VerifyConfig};

/// Data used by `interactive` when stdin supplies an empty first line
const DEFAULT_DEMO_DATA: &str = "HELLO WORLD";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("recover", sub_matches)) => handle_recover(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("verify", sub_matches)) => handle_verify(sub_matches),
        Some(("interactive", sub_matches)) => handle_interactive(sub_matches),
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified"),
    }
}

fn make_reporter(config: &CliConfig) -> Box<dyn CodecReporter> {
    if config.quiet {
        Box::new(SilentReporter::new())
    } else {
        Box::new(ConsoleReporter::new(config.format))
    }
}

/// Read the configured input and encode it
fn load_and_encode(config: &CliConfig) -> Result<(Vec<u8>, EncodedSet)> {
    let data = config
        .input
        .read()
        .with_context(|| format!("Failed to read input from {:?}", config.input))?;
    let encoded = encode_checked(config, &data)?;
    Ok((data, encoded))
}

fn encode_checked(config: &CliConfig, data: &[u8]) -> Result<EncodedSet> {
    anyhow::ensure!(
        config.chunks_within_limit(),
        "Chunk count {} exceeds the limit of {} (raise it with --max-chunks)",
        config.chunks,
        config.max_chunks
    );
    encode(data, config.chunks).context("Encoding failed")
}

fn handle_encode(matches: &clap::ArgMatches) -> Result<()> {
    let config = CliConfig::from_args(matches);
    let reporter = make_reporter(&config);
    let (data, encoded) = load_and_encode(&config)?;
    reporter.report_encoding(&encoded, &data);
    Ok(())
}

fn handle_recover(matches: &clap::ArgMatches) -> Result<()> {
    let config = CliConfig::from_args(matches);
    let reporter = make_reporter(&config);
    let (data, encoded) = load_and_encode(&config)?;
    reporter.report_encoding(&encoded, &data);

    if matches.get_flag("parity") {
        let stripe = Stripe::from_encoded(&encoded).lose(Loss::Parity)?;
        let recovered = recover_parity(&stripe)?;
        reporter.report_parity_recovery(&encoded, &recovered);
        anyhow::ensure!(
            recovered == encoded.parity_chunk(),
            "Recomputed parity does not match"
        );
        return Ok(());
    }

    let raw_index = matches
        .get_one::<i64>("lost")
        .copied()
        .context("--lost or --parity is required")?;
    let index = encoded.resolve_index(raw_index)?;
    let recovered = recover_chunk(&encoded, index)?;
    reporter.report_recovery(&encoded, index, &recovered);
    anyhow::ensure!(
        recovered == encoded.data_chunks()[index],
        "Recovered chunk {} does not match",
        index
    );
    Ok(())
}

fn handle_decode(matches: &clap::ArgMatches) -> Result<()> {
    let config = CliConfig::from_args(matches);
    let (data, encoded) = load_and_encode(&config)?;
    let decoded = decode(&encoded, data.len())?;

    if config.quiet {
        // Raw bytes only, for piping
        let mut stdout = io::stdout().lock();
        stdout.write_all(&decoded)?;
        stdout.flush()?;
    } else {
        let reporter = make_reporter(&config);
        reporter.report_encoding(&encoded, &data);
        println!();
        reporter.report_decoded(&decoded);
    }
    anyhow::ensure!(decoded == data, "Decoded data does not match the input");
    Ok(())
}

fn handle_verify(matches: &clap::ArgMatches) -> Result<()> {
    let config = CliConfig::from_args(matches);
    let verify_config = VerifyConfig::from_args(matches);
    let reporter = make_reporter(&config);
    let (data, encoded) = load_and_encode(&config)?;

    let report = verify_encoded(&encoded, &data, &verify_config)?;
    reporter.report_verification(&report);
    anyhow::ensure!(
        report.is_success(),
        "Verification failed for chunks {:?}",
        report.failed_indices()
    );
    Ok(())
}

fn handle_interactive(matches: &clap::ArgMatches) -> Result<()> {
    let config = CliConfig::from_args(matches);
    let reporter = make_reporter(&config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Stdin carries both the data (first line) and the indices that follow
    let data = match &config.input {
        InputSource::Stdin => {
            let line = lines.next().transpose()?.unwrap_or_default();
            let line = line.trim();
            if line.is_empty() {
                DEFAULT_DEMO_DATA.as_bytes().to_vec()
            } else {
                line.as_bytes().to_vec()
            }
        }
        source => source
            .read()
            .with_context(|| format!("Failed to read input from {:?}", source))?,
    };
    let encoded = encode_checked(&config, &data)?;
    reporter.report_encoding(&encoded, &data);

    for index in 0..encoded.num_chunks() {
        let recovered = recover_chunk(&encoded, index)?;
        reporter.report_recovery(&encoded, index, &recovered);
    }

    let last = encoded.num_chunks() - 1;
    loop {
        if !config.quiet {
            print!(
                "\nWhich chunk would you like to simulate losing? (0-{}, or 'q' to quit): ",
                last
            );
            io::stdout().flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let choice = line.trim();
        if choice == "q" || choice == "quit" {
            break;
        }

        let resolved = choice
            .parse::<i64>()
            .map_err(anyhow::Error::from)
            .and_then(|raw| encoded.resolve_index(raw).map_err(anyhow::Error::from));
        match resolved {
            Ok(index) => {
                let recovered = recover_chunk(&encoded, index)?;
                reporter.report_recovery(&encoded, index, &recovered);
            }
            Err(e) => reporter.report_error(&format!(
                "Invalid choice {:?} ({}). Enter a number between 0 and {}.",
                choice, e, last
            )),
        }
    }

    reporter.report_complete("\nXOR parity recovers any single lost chunk.");
    Ok(())
}
