//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route("/_download_notes/{file_id}", axum::routing::get(backend::server_extra::download_notes::download_notes))
            .layer(axum::middleware::from_fn(|request: Request, next: Next| async move {
                let path = request.uri().path().to_string();
                let res = next.run(request).await;
                if res.status().is_server_error() {
                    dioxus::logger::tracing::warn!("{path}: {}", res.status());
                }
                res
            })))
    });
}
