//! Async boundary: convert a failing future into a chain and keep wrapping.
//!
//! Run with: `cargo run --example async_chain`

use std::time::Duration;

use goph_error::prelude_async::*;

async fn fetch_row(id: u64) -> Result<String, std::io::Error> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    if id == 0 {
        return Err(std::io::Error::other("row not found"));
    }
    Ok(format!("row-{id}"))
}

async fn load_user(id: u64) -> ChainResult<String> {
    from_async(|| fetch_row(id), format!("loading user {id}")).await
}

#[tokio::main]
async fn main() {
    for id in [1, 0] {
        match load_user(id).wrap_err("rendering profile").await {
            Ok(row) => println!("ok: {row}"),
            Err(err) => println!("failed:\n{}", err.message_stack()),
        }
    }
}
