//! Print every declaration read from stdin.
//!
//!     echo 'color: red; ??? margin: 0' | RUST_LOG=trace cargo run --example stdin_scan

use std::io::Read;

use cssdecl_core::Scanner;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let mut scanner = Scanner::new(&input);
    for decl in scanner.by_ref() {
        println!("{}\t{}", decl.position(), decl);
    }
    eprintln!("skipped {} bytes", scanner.skipped_bytes());
    Ok(())
}
