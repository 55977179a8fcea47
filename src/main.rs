use jpg2png::cli;

fn main() {
    std::process::exit(cli::run());
}
