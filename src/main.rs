fn main() {
    if let Err(err) = codenamer::cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
