fn main() {
    dioxus::launch(studio_mocks::App);
}
