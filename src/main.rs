fn main() {
    equilibrium_sim::app::run();
}
