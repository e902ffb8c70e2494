fn main() {
    neowatch::run();
}
