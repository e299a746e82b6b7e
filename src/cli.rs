use std::{
    ffi::OsString,
    io::{self, Write},
    path::Path,
};

use log::debug;
use thiserror::Error;

use crate::decoder::decode;

const DEFAULT_PROGRAM: &str = "multitap";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: {program} \"<input>\"")]
    Usage { program: String },

    #[error("input is not valid UTF-8")]
    InvalidUnicode,

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Decodes the single input argument and writes the result plus a newline to `out`.
///
/// `args` includes the program name, as `std::env::args_os` yields it.
/// A closed output pipe counts as success.
pub fn run<I, W>(args: I, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned());

    let input = match (args.next(), args.next()) {
        (Some(input), None) => input,
        _ => return Err(CliError::Usage { program }),
    };
    let input = input.to_str().ok_or(CliError::InvalidUnicode)?;

    let output = decode(input);
    match writeln!(out, "{}", output).and_then(|_| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early: {}", err);
            Ok(())
        }
        result => result.map_err(CliError::from),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        ffi::OsString,
        io::{self, Write},
    };

    use super::{run, CliError};

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "writer failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_test() {
        let mut out = Vec::new();
        run(args(&["multitap", "8 8877744466*664#"]), &mut out).expect("Run failed");
        assert_eq!(out, b"TURING\n");
    }

    #[test]
    fn empty_argument_test() {
        let mut out = Vec::new();
        run(args(&["multitap", ""]), &mut out).expect("Run failed");
        assert_eq!(out, b"\n");
    }

    #[test]
    fn usage_test() {
        let mut out = Vec::new();

        let err = run(args(&["/usr/bin/multitap"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Usage { ref program } if program == "multitap"));
        assert_eq!(err.to_string(), "Usage: multitap \"<input>\"");

        let err = run(args(&["multitap", "2#", "3#"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Usage { .. }));

        let err = run(Vec::<OsString>::new(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Usage { ref program } if program == "multitap"));

        // Nothing decoded, nothing written
        assert!(out.is_empty());
    }

    #[test]
    fn broken_pipe_test() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(run(args(&["multitap", "33#"]), &mut out).is_ok());
    }

    #[test]
    fn write_failure_test() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = run(args(&["multitap", "33#"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn invalid_unicode_test() {
        use std::os::unix::ffi::OsStringExt;

        let mut out = Vec::new();
        let input = OsString::from_vec(vec![b'2', 0xff, b'#']);
        let err = run(vec![OsString::from("multitap"), input], &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidUnicode));
        assert!(out.is_empty());
    }
}
