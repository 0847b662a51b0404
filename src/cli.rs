use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser};

use crate::app::services::invert::AlphaPolicy;
use crate::app::services::t2s::Target;

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long, default_value = "warn", help = "Log level: off, error, warn, info, debug, trace")]
    pub log_level: String,
}

/// A converter command line: arguments to run with, or a usage line to print.
#[derive(Debug)]
pub enum Invocation<P> {
    Run(P),
    Usage(String),
}

/// Parse a converter command line.
///
/// A missing or unexpected argument becomes `Invocation::Usage`. Other clap
/// errors (bad option values, `--help`, `--version`) are returned as is.
pub fn parse_invocation_from<P, I, T>(args: I) -> Result<Invocation<P>, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Ok(Invocation::Run(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument) => {
            Ok(Invocation::Usage(P::command().render_usage().to_string()))
        }
        Err(e) => Err(e),
    }
}

/// `parse_invocation_from` over the process arguments; other clap errors exit.
pub fn parse_invocation<P: Parser>() -> Invocation<P> {
    parse_invocation_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

#[derive(Parser, Debug)]
#[command(name = "invimage", version, about = "Write the color complement of an image as PNG")]
pub struct InvertArgs {
    /// Image to read
    pub source: PathBuf,
    /// PNG file to write
    pub dest: PathBuf,
    #[arg(long, help = "Leave the alpha channel untouched")]
    pub keep_alpha: bool,
    #[command(flatten)]
    pub log: LogArgs,
}

impl InvertArgs {
    pub fn alpha_policy(&self) -> AlphaPolicy {
        if self.keep_alpha {
            AlphaPolicy::Preserve
        } else {
            AlphaPolicy::Invert
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "t2s", version, about = "Convert traditional Chinese text to simplified")]
pub struct ConvertArgs {
    /// UTF-8 text to read
    pub input: PathBuf,
    /// UTF-8 text to write
    pub output: PathBuf,
    #[arg(long, value_enum, default_value_t = Target::Hans, help = "Target script variant")]
    pub to: Target,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(name = "fd-icon", version, about = "Browse freedesktop icon names with their themed icons")]
pub struct IconBrowserArgs {
    #[arg(long, help = "Icon table to load (Name<TAB>Description, one header line)")]
    pub data: Option<PathBuf>,
    #[arg(long, help = "Icon theme to search instead of the desktop's")]
    pub theme: Option<String>,
    #[arg(long, help = "Settings file to use instead of the default location")]
    pub settings: Option<PathBuf>,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(name = "font-family", version, about = "Browse installed font families, each in its own font")]
pub struct FontBrowserArgs {
    #[arg(long, help = "Settings file to use instead of the default location")]
    pub settings: Option<PathBuf>,
    #[command(flatten)]
    pub log: LogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_args_positionals() {
        let args = InvertArgs::try_parse_from(["invimage", "a.png", "b.png"]).unwrap();
        assert_eq!(args.source, PathBuf::from("a.png"));
        assert_eq!(args.dest, PathBuf::from("b.png"));
        assert_eq!(args.alpha_policy(), AlphaPolicy::Invert);
        assert_eq!(args.log.log_level, "warn");
    }

    #[test]
    fn test_invert_args_keep_alpha() {
        let args = InvertArgs::try_parse_from(["invimage", "--keep-alpha", "a.png", "b.png"]).unwrap();
        assert_eq!(args.alpha_policy(), AlphaPolicy::Preserve);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(InvertArgs::try_parse_from(["invimage"]).is_err());
        assert!(InvertArgs::try_parse_from(["invimage", "a.png"]).is_err());
        assert!(InvertArgs::try_parse_from(["invimage", "a.png", "b.png", "c.png"]).is_err());
        assert!(ConvertArgs::try_parse_from(["t2s", "in.txt"]).is_err());
        assert!(ConvertArgs::try_parse_from(["t2s", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_arity_errors_become_usage() {
        for argv in [vec!["invimage"], vec!["invimage", "a.png"], vec!["invimage", "a.png", "b.png", "c.png"]] {
            match parse_invocation_from::<InvertArgs, _, _>(argv.clone()).unwrap() {
                Invocation::Usage(usage) => assert!(usage.starts_with("Usage: invimage"), "{argv:?}: {usage}"),
                Invocation::Run(args) => panic!("{argv:?} parsed as {args:?}"),
            }
        }
        assert!(matches!(
            parse_invocation_from::<ConvertArgs, _, _>(["t2s", "in.txt"]).unwrap(),
            Invocation::Usage(_)
        ));
    }

    #[test]
    fn test_valid_invocation_runs() {
        match parse_invocation_from::<ConvertArgs, _, _>(["t2s", "in.txt", "out.txt"]).unwrap() {
            Invocation::Run(args) => assert_eq!(args.output, PathBuf::from("out.txt")),
            Invocation::Usage(usage) => panic!("unexpected usage: {usage}"),
        }
    }

    #[test]
    fn test_bad_option_value_stays_an_error() {
        let err = parse_invocation_from::<ConvertArgs, _, _>(["t2s", "--to", "klingon", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_convert_args_target() {
        let args = ConvertArgs::try_parse_from(["t2s", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.to, Target::Hans);
        let args = ConvertArgs::try_parse_from(["t2s", "--to", "tw", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.to, Target::Tw);
    }

    #[test]
    fn test_browser_args_are_optional() {
        let args = IconBrowserArgs::try_parse_from(["fd-icon"]).unwrap();
        assert!(args.data.is_none());
        assert!(args.theme.is_none());
        let args = FontBrowserArgs::try_parse_from(["font-family", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log.log_level, "debug");
    }
}
