//! statusline-git CLI - debugging tool for status collection.
//!
//! Prints the collected record as JSON followed by the rendered line.

use std::env;
use std::path::PathBuf;

use statusline_git::{CommandRunner, Renderer, collect};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let record = collect(&CommandRunner::default(), &dir).await;

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize status: {}", e),
    }
    println!("{}", Renderer::default().render(record.as_ref()));
}
