// Exit codes of the urlvault CLI, following the BSD sysexits convention where possible.

/// Command line usage error, invalid input or a failed operation
pub const USAGE: i32 = 64;

/// The URL is already stored in the vault
pub const DUP: i32 = 65;

/// Operation was cancelled by the user
pub const CANCEL: i32 = 130;
