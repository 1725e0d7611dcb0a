//! Hosting of the compiled AvaliaAqui web client.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`, which is embedded into
//! the binary. Every request that no API route claims lands here: known asset
//! paths are served with their guessed MIME type, anything else gets the
//! client's `index.html` so the app can boot on any URL. When the client was
//! never built the API keeps working and this fallback says so.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static CLIENT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const CLIENT_MISSING: &str =
    "AvaliaAqui web client is not bundled. Run `trunk build` in frontend/ and rebuild the backend; \
     the /products and /evaluations API is available meanwhile.";

pub async fn process(req: HttpRequest) -> HttpResponse {
    serve_from(&CLIENT_DIR, req.path())
}

/// Maps a request path to the embedded file it names; `/` is the client entry page.
fn asset_path(request_path: &str) -> &str {
    match request_path.trim_start_matches('/') {
        "" => "index.html",
        path => path,
    }
}

fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = asset_path(request_path);

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    match dir.get_file("index.html") {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(CLIENT_MISSING),
    }
}
