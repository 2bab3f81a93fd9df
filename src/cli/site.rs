use crate::{config, info, warning};

/// Opens the public portfolio site in the default browser.
pub fn site() {
    let url = config::portfolio_site_url();
    info!("Opening {}", url);

    if let Err(e) = webbrowser::open(&url) {
        warning!("Failed to open browser: {}", e);
    }
}
