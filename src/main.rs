mod handlers;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    // PORT comes from the deployment environment, 8080 locally
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid port number");

    let app = Router::new()
        .route("/", get(handlers::index));

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
