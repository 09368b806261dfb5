mod common;
mod pullrequest;
mod push;
mod watch;

pub use common::{Repository, User};
pub use pullrequest::{PullRequestAction, PullRequestEvent};
pub use push::PushEvent;
pub use watch::WatchEvent;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A webhook event, tagged with its concrete kind. Event types we do not
/// model parse to `Other` carrying the raw event name.
#[derive(Debug)]
pub enum Event {
    Push(PushEvent),
    PullRequest(PullRequestEvent),
    Watch(WatchEvent),
    Other(String),
}

/// The payload did not match the shape declared by the event type header.
#[derive(Debug, Error)]
#[error("could not parse {event} payload: {source}")]
pub struct ParseError {
    event: String,
    source: serde_json::Error,
}

/// Parses a raw webhook body against the event name taken from the
/// `X-Github-Event` header.
pub fn parse(event: &str, raw: &[u8]) -> Result<Event, ParseError> {
    Ok(match event {
        "push" => Event::Push(decode(event, raw)?),
        "pull_request" => Event::PullRequest(decode(event, raw)?),
        "watch" => Event::Watch(decode(event, raw)?),
        other => Event::Other(other.to_owned()),
    })
}

fn decode<T: DeserializeOwned>(event: &str, raw: &[u8]) -> Result<T, ParseError> {
    serde_json::from_slice(raw).map_err(|source| ParseError {
        event: event.to_owned(),
        source,
    })
}
