//! Common constants for literal generation

/// Default soft limit on escaped characters per line fragment
pub const DEFAULT_LINE_LENGTH: usize = 100;

/// Printable characters that are still written as octal escapes
pub(crate) const FORCED_OCTAL: [u8; 3] = [
    b'?', // trigraph prefix
    b':', // digraph component
    b'%', // digraph component
];

/// Macro that guards the body-less declarations
pub(crate) const TOOLING_GUARD: &str = "__INTELLISENSE__";

/// Suffix appended to the identifier for the length declaration
pub(crate) const LEN_SUFFIX: &str = "_len";

/// Positional token selecting the process standard input
pub const STDIN_TOKEN: &str = "stdin";

/// Positional token selecting the process standard output
pub const STDOUT_TOKEN: &str = "stdout";
