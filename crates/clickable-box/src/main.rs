#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Clickable box story catalog wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    clickable_box::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    use clickable_box::core::catalog::StoryCatalog;

    let catalog = StoryCatalog::bundled().map_err(io::Error::other)?;
    let mut stderr = io::stderr().lock();
    writeln!(
        stderr,
        "clickable-box renders in the browser only; serve the catalog with `trunk serve`."
    )?;
    writeln!(stderr, "bundled stories ({}):", catalog.stories.len())?;
    for story in &catalog.stories {
        writeln!(stderr, "  - {}", story.name)?;
    }
    Ok(())
}
