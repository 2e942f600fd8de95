fn main() {
    appasm::app::cli::run();
}
