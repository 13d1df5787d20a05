use {palettecss::app::PaletteApp, std::process, tracing::error};

fn main() {
    if let Err(e) = PaletteApp::init().and_then(PaletteApp::run) {
        error!("Application error: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
