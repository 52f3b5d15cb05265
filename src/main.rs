use dasher::app::App;

fn main() {
    let app = App::new().unwrap_or_else(|err| {
        eprintln!("{err}");
        panic!("app could not be initialized")
    });

    app.run();
}
