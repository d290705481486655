//! A fixed-response HTTP server for loader tests.

use std::collections::HashMap;
use std::sync::Arc;
use tiny_http::{Response, Server, StatusCode};

/// Serves canned responses keyed by request path until dropped.
/// Binds to `127.0.0.1:0` (random port); unmatched paths get a 404.
pub(crate) struct TestServer {
    pub(crate) url: String,
    server: Arc<Server>,
    _handle: std::thread::JoinHandle<()>,
}

impl TestServer {
    pub(crate) fn start(routes: &[(&str, u16, &str)]) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("failed to bind test server"));
        let port = server.server_addr().to_ip().expect("not an IP addr").port();
        let url = format!("http://127.0.0.1:{port}");

        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(path, status, body)| ((*path).to_owned(), (*status, (*body).to_owned())))
            .collect();

        let srv = Arc::clone(&server);
        let handle = std::thread::spawn(move || {
            for request in srv.incoming_requests() {
                let response = match routes.get(request.url()) {
                    Some((status, body)) => {
                        Response::from_string(body.clone()).with_status_code(StatusCode(*status))
                    }
                    None => Response::from_string("not found").with_status_code(StatusCode(404)),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            url,
            server,
            _handle: handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.unblock();
    }
}
