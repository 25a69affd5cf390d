//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            // product images are streamed through the server so the
            // browser never talks to the catalog service directly
            .route(
                "/_product_image/{file_name}",
                axum::routing::get(backend::server_extra::product_image::product_image),
            ))
    });
}
