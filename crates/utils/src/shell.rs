//! Cross-platform shell command utilities

/// Returns the shell program and the flag that makes it run a command string.
///
/// Returns (shell_program, shell_arg) where:
/// - Windows: ("cmd", "/C")
/// - Unix-like: ("/bin/sh", "-c")
///
/// Unlike an interactive terminal, step commands always go through the POSIX
/// `sh` so that a user's login shell cannot change how they are parsed.
pub fn get_shell_command() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn unix_uses_posix_sh() {
        assert_eq!(get_shell_command(), ("/bin/sh", "-c"));
    }

    #[test]
    #[cfg(windows)]
    fn windows_uses_cmd() {
        assert_eq!(get_shell_command(), ("cmd", "/C"));
    }
}
