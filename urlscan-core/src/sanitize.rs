/// ANSI SGR sequences the scanning tools are known to emit.
const BRIGHT_GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Strip the known ANSI color sequences and literal bracket characters from
/// raw tool output.
///
/// Escape sequences are removed before the brackets so that stripping `[`
/// does not leave half an escape sequence behind. Lossy and
/// tool-output-format-specific: a tool that changes its coloring scheme
/// silently stops being cleaned.
pub fn sanitize(text: &str) -> String {
    text.replace(BRIGHT_GREEN, "")
        .replace(RESET, "")
        .replace('[', "")
        .replace(']', "")
}
