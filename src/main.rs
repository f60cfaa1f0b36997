fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = mediashelf::logging::init_logging() {
        eprintln!("mediashelf: failed to initialize logging: {e}");
    }

    mediashelf::runtime::run()
}
