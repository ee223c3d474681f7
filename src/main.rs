#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod catalog;
mod config;
mod contact;
mod counter;
mod cursor;
mod particles;
mod scroll;
mod stats;
mod telemetry;
mod theme;
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
