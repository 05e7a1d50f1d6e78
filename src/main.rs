fn main() {
    if let Err(err) = cell_narrow::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
