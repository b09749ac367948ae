//! Entry point for the WASM application

pub fn main() {
    prompto::run();
}
