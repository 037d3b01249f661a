fn main() {
    initscript::app::cli::run();
}
