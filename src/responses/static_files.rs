// responses/static_files.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::path::{Component, Path};

/// Content type from the file extension; unknown extensions are served as bytes.
pub fn content_type_for(path: &Path) -> mime::Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Serve `rel` from inside `root`. Anything that would leave `root` is a 404.
pub fn static_file(root: &Path, rel: &str) -> ResultResp {
    let rel = Path::new(rel);
    if rel.as_os_str().is_empty()
        || !rel.components().all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(ServerError::NotFound);
    }

    let path = root.join(rel);
    let bytes = std::fs::read(&path).map_err(|_| ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type_for(&path).as_ref())
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
