//! Exit code constants for the relnotes CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid config)
//! - 2: Template failure (unresolved placeholder path)
//! - 3: Remote failure (issue search or release service)
//! - 4: Release conflict (a release already exists for the tag)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a config file that cannot be loaded.
pub const USER_ERROR: i32 = 1;

/// Template failure: a placeholder path could not be resolved.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Remote failure: search request, release lookup or release creation failed.
pub const REMOTE_FAILURE: i32 = 3;

/// Release conflict: the computed tag already has a release.
pub const RELEASE_CONFLICT: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            TEMPLATE_FAILURE,
            REMOTE_FAILURE,
            RELEASE_CONFLICT,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn failures_are_non_zero() {
        for code in [USER_ERROR, TEMPLATE_FAILURE, REMOTE_FAILURE, RELEASE_CONFLICT] {
            assert_ne!(code, SUCCESS);
        }
    }
}
