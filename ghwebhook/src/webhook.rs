use std::collections::HashMap;
use std::io::Read as _;

use hyper::server::{Request, Response};
use hyper::status::StatusCode;
use hyper::uri::RequestUri;
use tracing::{error, info, warn};

use crate::ghevent::{self, Event};

header! { (XGithubEvent, "X-Github-Event") => [String] }

/// Address both receivers bind.
pub const LISTEN: &str = "0.0.0.0:8080";

/// The single path both receivers serve.
pub const WEBHOOK_PATH: &str = "/webhook";

/// Handler for the generic receiver: decode the body as a string-keyed
/// JSON object and dump every top-level key to stdout.
pub fn generic(mut req: Request, mut res: Response) {
    if !matches_webhook_path(&req.uri) {
        *res.status_mut() = StatusCode::NotFound;
        return;
    }

    let mut raw = Vec::new();
    if req.read_to_end(&mut raw).is_err() {
        warn!("Failed to read body from client");
        *res.status_mut() = StatusCode::InternalServerError;
        return;
    }

    let payload = match serde_json::from_slice::<HashMap<String, serde_json::Value>>(&raw) {
        Ok(payload) => payload,
        Err(e) => {
            *res.status_mut() = StatusCode::InternalServerError;
            let _ = res.send(e.to_string().as_bytes());
            return;
        }
    };

    println!("got webhook payload:");
    for line in payload_lines(&payload) {
        println!("{line}");
    }
    // fall through with the default 200 and an empty body
}

/// Handler for the typed receiver: parse the event named by the
/// `X-Github-Event` header and announce repository stars.
pub fn typed(mut req: Request, mut res: Response) {
    if !matches_webhook_path(&req.uri) {
        *res.status_mut() = StatusCode::NotFound;
        return;
    }
    let hdr = req.headers.clone();

    let mut raw = Vec::new();
    if req.read_to_end(&mut raw).is_err() {
        warn!("Failed to read body from client");
        *res.status_mut() = StatusCode::InternalServerError;
        return;
    }

    let Some(XGithubEvent(event_type)) = hdr.get::<XGithubEvent>() else {
        warn!("Missing event type header");
        *res.status_mut() = StatusCode::BadRequest;
        let _ = res.send(b"Missing event type");
        return;
    };

    let event = match ghevent::parse(event_type, &raw) {
        Ok(event) => event,
        Err(e) => {
            error!("could not parse webhook: {e}");
            *res.status_mut() = StatusCode::BadRequest;
            let _ = res.send(e.to_string().as_bytes());
            return;
        }
    };

    match event {
        Event::Push(_) => {
            // a commit push, nothing to do with it yet
        }
        Event::PullRequest(_) => {
            // a pull request, nothing to do with it yet
        }
        Event::Watch(watch) => {
            if watch.starred() {
                match watch.starred_message() {
                    Some(line) => println!("{line}"),
                    None => warn!("starred watch event without sender or repository"),
                }
            }
        }
        Event::Other(name) => {
            info!("unknown event type {name}");
        }
    }
}

/// Matches on the path component only; a query string does not keep a
/// request from reaching the handler.
fn matches_webhook_path(uri: &RequestUri) -> bool {
    let uri = uri.to_string();
    let path = uri.split('?').next().unwrap_or("");
    path == WEBHOOK_PATH
}

/// One `key : value` line per top-level key. String values print without
/// their JSON quotes, everything else as JSON.
fn payload_lines(payload: &HashMap<String, serde_json::Value>) -> Vec<String> {
    payload
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("{key} : {s}"),
            other => format!("{key} : {other}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_path_match_ignores_query() {
        let uri = RequestUri::AbsolutePath("/webhook?delivery=1".to_owned());
        assert!(matches_webhook_path(&uri));

        let uri = RequestUri::AbsolutePath("/webhook".to_owned());
        assert!(matches_webhook_path(&uri));

        let uri = RequestUri::AbsolutePath("/elsewhere".to_owned());
        assert!(!matches_webhook_path(&uri));
    }

    #[test]
    fn test_payload_lines() {
        let payload = serde_json::from_str(r#"{"foo":"bar","n":42}"#).expect("valid JSON object");
        let mut lines = payload_lines(&payload);
        lines.sort();
        assert_eq!(lines, vec!["foo : bar".to_owned(), "n : 42".to_owned()]);
    }

    #[test]
    fn test_payload_lines_nested_value() {
        let payload =
            serde_json::from_str(r#"{"repository":{"full_name":"org/repo"}}"#).expect("valid JSON");
        assert_eq!(
            payload_lines(&payload),
            vec![r#"repository : {"full_name":"org/repo"}"#.to_owned()]
        );
    }
}
