use std::{fmt, process::ExitStatus};

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandExit {
    Code(i32),
    /// Terminated by a signal before it could report a code (Unix only).
    Signal(i32),
}

impl CommandExit {
    pub fn success(self) -> bool {
        matches!(self, CommandExit::Code(0))
    }

    /// The return code as reported for a child: signal N reads as `-N`.
    pub fn return_code(self) -> i32 {
        match self {
            CommandExit::Code(code) => code,
            CommandExit::Signal(signal) => -signal,
        }
    }

    /// The status this program should exit with to mirror the child.
    ///
    /// A negative return code wraps into the low byte, so signal N exits
    /// with `256 - N`.
    pub fn exit_code(self) -> i32 {
        match self {
            CommandExit::Code(code) => code,
            CommandExit::Signal(signal) => 256 - signal,
        }
    }
}

impl From<ExitStatus> for CommandExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return CommandExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return CommandExit::Signal(signal);
            }
        }

        CommandExit::Code(1)
    }
}

impl fmt::Display for CommandExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return code {}", self.return_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_code_zero_is_success() {
        assert!(CommandExit::Code(0).success());
        assert!(!CommandExit::Code(1).success());
        assert!(!CommandExit::Code(-1).success());
        assert!(!CommandExit::Signal(15).success());
    }

    #[test]
    fn signal_wraps_negative_return_code_into_exit_status() {
        assert_eq!(CommandExit::Signal(2).return_code(), -2);
        assert_eq!(CommandExit::Signal(2).exit_code(), 254);
        assert_eq!(CommandExit::Code(2).exit_code(), 2);
    }

    #[test]
    #[cfg(unix)]
    fn classifies_raw_wait_statuses() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) encodes a normal exit in the high byte and a signal in the low bits.
        assert_eq!(
            CommandExit::from(ExitStatus::from_raw(2 << 8)),
            CommandExit::Code(2)
        );
        assert_eq!(
            CommandExit::from(ExitStatus::from_raw(9)),
            CommandExit::Signal(9)
        );
    }

    #[test]
    fn display_reads_naturally_in_diagnostics() {
        assert_eq!(CommandExit::Code(2).to_string(), "return code 2");
        assert_eq!(CommandExit::Signal(9).to_string(), "return code -9");
    }
}
