//! Child logger example
//!
//! Demonstrates per-component prefixes and tags, and that a child keeps the
//! appender it was created with when the parent is redirected.
//!
//! Run with: cargo run --example child_loggers

use rust_logx::prelude::*;
use rust_logx::{global, info};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Rust Logx - Child Loggers Example ===\n");

    global::set_appender(Arc::new(PooledAppender::new(ConsoleSink::stdout(), Flags::STD)));
    global::info("default logger ready");

    let http = global::child_with_tags("http", ["listener"]);
    let workers: Vec<_> = (0..3)
        .map(|id| {
            let worker = http.child_with_tags("worker", [id.to_string()]);
            thread::spawn(move || {
                for request in 0..2 {
                    info!(worker, "handled request {}", request);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let captured = MemorySink::new();
    global::set_appender(Arc::new(PooledAppender::new(captured.clone(), Flags::NONE)));
    global::info("this goes to memory");
    http.info("this child still writes to stdout");

    println!("\nCaptured by the new default appender:\n{}", captured.contents());
    println!("=== Example completed successfully! ===");
}
