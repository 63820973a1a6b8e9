//! Interactive chainlog driver.
//!
//! Reads payload lines from stdin, appends each to the chain, and lists
//! the full chain after every append. On exit (the `q` sentinel or EOF)
//! the chain is verified and exported to [`SNAPSHOT_PATH`] in one shot.
//!
//! Log output goes to stderr so stdout stays free for the record listing.
//! A failed export surfaces through `main`'s error return and a non-zero
//! exit status; nothing else in the loop can fail.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use chainlog_core::{Chain, ChainHealth, Clock, Record};
use chainlog_snapshot::write_snapshot;

/// Fixed export destination; there are no CLI flags.
const SNAPSHOT_PATH: &str = "chain.json";

/// Input line that ends collection without being appended.
const QUIT_SENTINEL: &str = "q";

fn main() -> Result<()> {
    init_logging();

    let mut chain = Chain::new();
    tracing::info!("chain created");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter payload for the next record (or '{QUIT_SENTINEL}' to quit): ");
        io::stdout().flush().context("flush prompt")?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line.context("read payload line")?;
        let payload = line.trim();
        if payload == QUIT_SENTINEL {
            break;
        }

        let record = chain.append(payload);
        tracing::info!(index = record.index, "record appended");
        list_records(&chain);
    }

    match chain.verify() {
        ChainHealth::Valid => {
            tracing::info!(records = chain.len(), "chain verified");
        }
        ChainHealth::Invalid { index, fault } => {
            tracing::error!(index, %fault, "chain failed verification");
        }
    }

    write_snapshot(SNAPSHOT_PATH, chain.records())
        .with_context(|| format!("save snapshot to {SNAPSHOT_PATH}"))?;
    tracing::info!(path = SNAPSHOT_PATH, records = chain.len(), "snapshot saved");

    Ok(())
}

/// Initialize the tracing subscriber: `RUST_LOG` overrides the `info`
/// default, output to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print every record to stdout, one field per line.
fn list_records<C: Clock>(chain: &Chain<C>) {
    for record in chain {
        // Trailing newline leaves a blank line between records.
        println!("{}\n", render_record(record));
    }
}

/// Render one record for the console listing.
fn render_record(record: &Record) -> String {
    format!(
        "Index:       {}\nTimestamp:   {}\nPayload:     {}\nPrev digest: {}\nDigest:      {}",
        record.index,
        record.timestamp,
        record.payload,
        record.prev_digest.map(|d| d.to_hex()).unwrap_or_default(),
        record.digest.to_hex(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_genesis() {
        let genesis = Record::genesis(1736870400000);
        let rendered = render_record(&genesis);

        assert!(rendered.contains("Index:       0"));
        assert!(rendered.contains("Timestamp:   1736870400000"));
        assert!(rendered.contains("Payload:     Genesis Block"));
        assert!(rendered.contains("Prev digest: \n"));
        assert!(rendered.contains(&format!("Digest:      {}", genesis.digest.to_hex())));
    }

    #[test]
    fn test_render_appended_record() {
        let genesis = Record::genesis(1736870400000);
        let record = Record::next(&genesis, "alpha", 1736870400001);
        let rendered = render_record(&record);

        assert!(rendered.contains("Payload:     alpha"));
        assert!(rendered.contains(&format!("Prev digest: {}", genesis.digest.to_hex())));
    }
}
