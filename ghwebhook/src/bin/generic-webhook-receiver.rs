use std::error::Error;

use ghwebhook::{server, webhook};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    ghwebhook::setup_log();

    let listening = server::serve(webhook::LISTEN, webhook::generic)?;
    info!(
        "server started on http://{}{}",
        listening.socket,
        webhook::WEBHOOK_PATH
    );
    // dropping `listening` joins the accept loop
    Ok(())
}
