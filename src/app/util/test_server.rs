use std::net::TcpListener;

use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base url.
pub fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read test listener address");

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .expect("failed to adopt test listener")
            .serve(router.into_make_service())
            .await
            .expect("test server failed");
    });

    format!("http://{}", addr)
}
