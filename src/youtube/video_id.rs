//! Video-id extraction from user-supplied URLs. Pure, no I/O.

use url::Url;

/// Extract a video id from a URL.
///
/// Recognizes three shapes:
///
/// - short-link host (`youtu.be/{id}`) — id is the first path segment
/// - long form — the `v` query parameter
/// - `/shorts/{id}` path segment
///
/// Any other shape (or an unparseable URL) yields `None`; the caller
/// treats that as a client input error, not a failure.
pub fn extract_video_id(video_url: &str) -> Option<String> {
    let parsed = Url::parse(video_url).ok()?;

    if parsed.host_str().is_some_and(|h| h.contains("youtu.be")) {
        return parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    if let Some((_, v)) = parsed.query_pairs().find(|(key, _)| key == "v") {
        if !v.is_empty() {
            return Some(v.into_owned());
        }
    }

    let mut segments = parsed.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "shorts" {
            return segments
                .next()
                .filter(|id| !id.is_empty())
                .map(str::to_string);
        }
    }

    None
}
