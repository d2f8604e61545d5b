use folio_web::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
