fn main() {
    std::process::exit(gnd_cli::run_cli());
}
