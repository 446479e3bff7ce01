fn main() {
    daykit::app::cli::run();
}
