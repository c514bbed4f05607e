use std::sync::Arc;

use ollama_chat::routes;
use ollama_chat::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState::new());

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .unwrap();

    println!("🚀 Ollama chat relay running at http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
