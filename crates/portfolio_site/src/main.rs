//! Binary entrypoint for the browser-hosted portfolio site.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    portfolio_site::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app` for wasm32 with the `csr` feature."
    );
}
