//! `tygen` binary entrypoint. All logic lives in the `tygen-cli` crate.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(tygen_cli::run_cli(args));
}
