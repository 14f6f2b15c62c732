fn main() {
    ebookgen::app::cli::run();
}
