fn main() {
    dioxus::launch(tuneseek_web::App);
}
