//! Request ID resolution.

use salvo::prelude::Response;
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuse the caller's request id when it is printable and reasonably short,
/// otherwise mint a v7 uuid.
pub(super) fn resolve_request_id(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|value| {
            !value.is_empty()
                && value.len() <= MAX_REQUEST_ID_LEN
                && value.bytes().all(|byte| byte.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::now_v7().to_string(), ToOwned::to_owned)
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    if let Err(source) = res.add_header(REQUEST_ID_HEADER, request_id, true) {
        warn!(request_id, "could not set request id response header: {source}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_incoming_id_is_kept() {
        assert_eq!(resolve_request_id(Some(" trace-42 ")), "trace-42");
    }

    #[test]
    fn blank_or_hostile_ids_are_replaced() {
        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);

        for incoming in [None, Some(""), Some("two words"), Some(long.as_str())] {
            let resolved = resolve_request_id(incoming);

            assert!(
                Uuid::parse_str(&resolved).is_ok(),
                "{incoming:?} resolved to {resolved:?}"
            );
        }
    }
}
