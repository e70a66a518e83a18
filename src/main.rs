fn main() {
    if let Err(err) = simple_badges::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
