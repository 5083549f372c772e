use google_sheets4::{hyper, hyper_rustls};

use crate::adapters::credentials::HttpClient;

/// HTTPS client shared by the Sheets hub and its authenticator.
pub fn http_client() -> HttpClient {
    hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .expect("failed to load native root certificates")
            .https_or_http()
            .enable_http1()
            .build(),
    )
}
