//! Socket URL derivation.

use url::Url;

use crate::TransportError;

/// Path segment the room server mounts its socket under.
const SOCKET_SEGMENT: &str = "ws/";

/// Derive the socket URL of a room from its page URL.
///
/// Appends the `ws/` segment to the page path and rewrites `http` to `ws` and
/// `https` to `wss`. Socket URLs are accepted as given apart from the path.
/// Query and fragment belong to the page and are dropped.
///
/// # Errors
///
/// Returns [`TransportError::InvalidUrl`] if the input does not parse or uses
/// any other scheme.
pub fn socket_url(page_url: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(page_url)
        .map_err(|e| TransportError::InvalidUrl(format!("{page_url}: {e}")))?;

    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(TransportError::InvalidUrl(format!("unsupported scheme {other:?}")));
        },
    };
    url.set_scheme(scheme)
        .map_err(|()| TransportError::InvalidUrl(format!("cannot switch to {scheme}")))?;

    let path = url.path();
    let path = if path.strip_suffix(SOCKET_SEGMENT).is_some_and(|rest| rest.ends_with('/')) {
        path.to_string()
    } else if path.ends_with('/') {
        format!("{path}{SOCKET_SEGMENT}")
    } else {
        format!("{path}/{SOCKET_SEGMENT}")
    };
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
