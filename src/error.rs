//! Error types for layout construction and binding compilation.

use thiserror::Error;

/// Errors produced while building an abstract pipeline layout or compiling
/// it for a backend.
///
/// Malformed layouts (duplicate or out-of-range bindings) are rejected by the
/// descriptor builder, before any backend compiler runs. `LimitExceeded` is
/// the only failure a compiler itself can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// More bind groups were supplied than the layout can hold.
    #[error("too many bind groups: {count} supplied, capacity is {max}")]
    TooManyBindGroups { count: usize, max: usize },

    /// A binding slot index is outside the per-group capacity.
    #[error("binding slot {binding} in group {group} must be below the per-group capacity of {max}")]
    BindingOutOfRange { group: usize, binding: u32, max: u32 },

    /// Two entries in the same group use the same binding slot.
    #[error("duplicate binding slot {binding} in group {group}")]
    DuplicateBinding { group: usize, binding: u32 },

    /// The layout needs more bindings of one resource kind than the backend
    /// supports. No binding table is produced.
    #[error("too many {resource} bindings: layout uses {used}, backend limit is {limit}")]
    LimitExceeded {
        resource: &'static str,
        used: u32,
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::DuplicateBinding {
            group: 1,
            binding: 3,
        };
        assert_eq!(err.to_string(), "duplicate binding slot 3 in group 1");

        let err = BackendError::LimitExceeded {
            resource: "sampler",
            used: 17,
            limit: 16,
        };
        assert_eq!(
            err.to_string(),
            "too many sampler bindings: layout uses 17, backend limit is 16"
        );

        // A slot equal to the capacity is rejected too; the message must
        // read correctly for that boundary value.
        let err = BackendError::BindingOutOfRange {
            group: 0,
            binding: 16,
            max: 16,
        };
        assert_eq!(
            err.to_string(),
            "binding slot 16 in group 0 must be below the per-group capacity of 16"
        );
    }
}
