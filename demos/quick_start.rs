//! Quick start: wrap errors layer by layer, then print the causal trace.
//!
//! Run with: `cargo run --example quick_start`

use goph_error::prelude::*;

struct Config {
    port: u16,
}

fn read_port(raw: &str) -> ChainResult<u16> {
    from(|| raw.trim().parse::<u16>(), "parsing port")
}

fn load_config(raw: &str) -> ChainResult<Config> {
    let port = read_port(raw).wrap_err("loading config")?;
    Ok(Config { port })
}

fn main() {
    match load_config("8080") {
        Ok(config) => println!("listening on port {}", config.port),
        Err(err) => eprintln!("{err:#}"),
    }

    match load_config("eighty") {
        Ok(config) => println!("listening on port {}", config.port),
        Err(err) => {
            println!("outermost: {err}");
            println!("root cause: {}", err.unwrap_all());
            println!("message stack:\n{}", err.message_stack());
        },
    }
}
