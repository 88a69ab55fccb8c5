//! taskpad entry point
//!
//! Everything lives in the `cli` module; this file only hands control to
//! it and turns a startup error into a stderr line and a non-zero exit.

use taskpad::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
