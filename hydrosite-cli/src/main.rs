//! Entry point for the `hydrosite` command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
fn main() {
    if let Err(err) = hydrosite_cli::run() {
        eprintln!("hydrosite: {err}");
        std::process::exit(1);
    }
}
