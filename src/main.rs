mod cli;

fn main() {
    // Run the CLI
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
