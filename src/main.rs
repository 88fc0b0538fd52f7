//! Binary target built by `trunk` for the browser.

fn main() {
    #[cfg(feature = "csr")]
    dashboard_shell::start();

    #[cfg(not(feature = "csr"))]
    eprintln!("dashboard-shell runs in the browser; build it with `trunk serve --features csr`");
}
