use blossom_core::DecorationTicket;
use gloo::net::http::Request;
use serde::Deserialize;
use yew::{AttrValue, Callback};

#[derive(Debug, Deserialize)]
struct DecorationResponse {
    url: String,
}

async fn fetch_decoration(endpoint: &str) -> Result<String, gloo::net::Error> {
    let response = Request::get(endpoint).send().await?;
    if !response.ok() {
        return Err(gloo::net::Error::GlooError(format!(
            "{} answered {} {}",
            endpoint,
            response.status(),
            response.status_text()
        )));
    }
    let body: DecorationResponse = response.json().await?;
    Ok(body.url)
}

/// Fetches a decoration in the background and hands it to `on_fetched` with its ticket.
///
/// Failures are logged and dropped; there is no retry and no cancellation.
pub(crate) fn spawn_fetch(
    endpoint: AttrValue,
    ticket: DecorationTicket,
    on_fetched: Callback<(DecorationTicket, String)>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_decoration(&endpoint).await {
            Ok(url) => {
                log::trace!("decoration for cell {}: {}", ticket.index(), url);
                on_fetched.emit((ticket, url));
            }
            Err(err) => {
                log::warn!(
                    "could not fetch decoration for cell {}: {}",
                    ticket.index(),
                    err
                );
            }
        }
    });
}
