//! Trunk entry point for the browser build.

fn main() {
    #[cfg(feature = "csr")]
    client::start();
}
