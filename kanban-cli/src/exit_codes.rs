//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command failed
pub const EXIT_ERROR: i32 = 1;

/// User declined a confirmation prompt; nothing changed
pub const EXIT_DECLINED: i32 = 3;
