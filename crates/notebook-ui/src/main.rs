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
//! Notebook binary: mounts the app in the browser; native builds only explain how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    notebook_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io::Write;

    let hint = native_hint();
    if std::io::stderr().lock().write_all(hint.as_bytes()).is_err() {
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::from(2)
}

#[cfg(not(target_arch = "wasm32"))]
const fn native_hint() -> &'static str {
    "notebook-ui runs in the browser. Serve it with `trunk serve` from crates/notebook-ui.\n"
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native_hint;

    #[test]
    fn native_hint_points_at_trunk() {
        let hint = native_hint();
        assert!(hint.contains("trunk serve"));
        assert!(hint.ends_with('\n'));
    }
}
