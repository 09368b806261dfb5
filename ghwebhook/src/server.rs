use hyper::server::{Handler, Listening, Server};
use tracing::info;

/// Binds `listen` and serves `handler` on hyper's threaded server.
///
/// Dropping the returned [`Listening`] joins the accept loop, so a main
/// that holds it serves until the process is killed.
pub fn serve<H: Handler + 'static>(listen: &str, handler: H) -> hyper::Result<Listening> {
    let threads = std::thread::available_parallelism()
        .map(|x| x.get())
        .unwrap_or(1);
    info!("Will listen on {listen} with {threads} threads");
    Server::http(listen)?.handle_threads(handler, threads)
}
