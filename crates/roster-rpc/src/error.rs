// crates/roster-rpc/src/error.rs
//
// Conversions between the RosterError taxonomy and tonic::Status, in both
// directions. The kind must survive a trip across the wire so the gateway
// can map it back to an HTTP status.

use tonic::{Code, Status};

use roster_core::RosterError;

/// Map a business error onto the gRPC status it travels as.
pub fn status_from_error(err: RosterError) -> Status {
    match err {
        RosterError::InvalidArgument(msg) => Status::invalid_argument(msg),
        RosterError::NotFound(msg) => Status::not_found(msg),
        RosterError::Unauthenticated(msg) => Status::unauthenticated(msg),
        RosterError::Internal(msg) => Status::internal(msg),
    }
}

/// Reconstruct a business error from a received gRPC status. Codes outside
/// the taxonomy collapse to Internal.
pub fn error_from_status(status: &Status) -> RosterError {
    let msg = status.message().to_string();
    match status.code() {
        Code::InvalidArgument => RosterError::InvalidArgument(msg),
        Code::NotFound => RosterError::NotFound(msg),
        Code::Unauthenticated => RosterError::Unauthenticated(msg),
        _ => RosterError::Internal(msg),
    }
}

#[cfg(test)]
mod tests {
    use roster_core::FailureKind;

    use super::*;

    #[test]
    fn test_kind_survives_round_trip() {
        let cases = [
            (RosterError::invalid_argument("a"), Code::InvalidArgument),
            (RosterError::not_found("b"), Code::NotFound),
            (RosterError::unauthenticated("c"), Code::Unauthenticated),
            (RosterError::internal("d"), Code::Internal),
        ];
        for (err, code) in cases {
            let kind = err.kind();
            let status = status_from_error(err);
            assert_eq!(status.code(), code);
            assert_eq!(error_from_status(&status).kind(), kind);
        }
    }

    #[test]
    fn test_unknown_code_collapses_to_internal() {
        let status = Status::unavailable("listener gone");
        assert_eq!(error_from_status(&status).kind(), FailureKind::Internal);
        assert_eq!(error_from_status(&status).message(), "listener gone");
    }
}
