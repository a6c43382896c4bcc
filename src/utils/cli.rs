//! Command-line argument parsing and help for runa-ls.
//!
//! Short flags can be bundled (`-lah`). Everything after `--` is an operand.

use crate::config::ColorWhen;
use crate::core::SortMode;
use crate::error::{LsError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List(CliOptions),
    Help,
    Version,
}

/// Flags given on the command line. Unset flags defer to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub operands: Vec<String>,
    /// `-d`: list directories themselves, not their contents.
    pub list_dirs: bool,
    pub all: bool,
    pub almost_all: bool,
    pub only_hidden: bool,
    pub recursive: bool,
    pub sort: Option<SortMode>,
    pub reverse: bool,
    pub long: bool,
    pub human: bool,
    pub one_column: bool,
    pub by_lines: bool,
    pub wide: bool,
    pub inode: bool,
    pub color: Option<ColorWhen>,
}

pub fn handle_args() -> Result<CliAction> {
    parse_args(std::env::args().skip(1))
}

/// Parses the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            opts.operands.extend(args.by_ref());
            break;
        }
        if let Some(long) = arg.strip_prefix("--") {
            match long {
                "help" => return Ok(CliAction::Help),
                "version" => return Ok(CliAction::Version),
                "wide" => opts.wide = true,
                "color" => opts.color = Some(ColorWhen::Always),
                _ => {
                    let Some(when) = long.strip_prefix("color=") else {
                        return Err(LsError::UnknownOption(format!("--{}", long)));
                    };
                    let color = ColorWhen::from_name(when).ok_or_else(|| {
                        LsError::InvalidArgument {
                            option: "--color".to_string(),
                            value: when.to_string(),
                        }
                    })?;
                    opts.color = Some(color);
                }
            }
            continue;
        }
        if arg.len() > 1 && arg.starts_with('-') {
            for flag in arg[1..].chars() {
                apply_short(&mut opts, flag)?;
            }
            continue;
        }
        opts.operands.push(arg);
    }

    Ok(CliAction::List(opts))
}

fn apply_short(opts: &mut CliOptions, flag: char) -> Result<()> {
    match flag {
        'd' => opts.list_dirs = true,
        'a' => opts.all = true,
        'A' => {
            opts.all = true;
            opts.almost_all = true;
        }
        'O' => opts.only_hidden = true,
        'R' => opts.recursive = true,
        't' => opts.sort = Some(SortMode::ModTime),
        'S' => opts.sort = Some(SortMode::Size),
        'r' => opts.reverse = true,
        'l' => opts.long = true,
        'h' => opts.human = true,
        '1' => opts.one_column = true,
        'x' => opts.by_lines = true,
        'C' => opts.by_lines = false,
        'i' => opts.inode = true,
        _ => return Err(LsError::UnknownOption(format!("-{}", flag))),
    }
    Ok(())
}

pub fn print_version() {
    println!("rls {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"Usage: rls [OPTION]... [FILE]...
List information about the FILEs (the current directory by default).
Sort entries alphabetically unless a sort option is given.

OPTIONS:
  -a                  do not ignore entries starting with .
  -A                  do not list implied . and ..
  -d                  list directory entries instead of contents
  -t                  sort by modification time, newest first
  -S                  sort by file size, largest first
  -r                  reverse order while sorting
  -l                  use a long listing format
  -h                  with -l, print sizes and times in human readable format
  -R                  list subdirectories recursively
  -O                  only list entries starting with .
  -1                  list one file per line
  -x                  list entries by lines instead of by columns
  -C                  list entries by columns
  -i                  print the index number of each file
      --wide          fit the listing to the terminal height
      --color[=WHEN]  colorize the output; WHEN is 'always' (default),
                      'auto' or 'never'
      --help          display this help and exit
      --version       output version information and exit

ENVIRONMENT:
  RLS_CONFIG          Override the default config path
  RLS_LOG             Log filter for diagnostics (default: warn)
  LS_COLORS           Colour overrides, e.g. di=01;34:*.tar=01;31
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn options(args: &[&str]) -> CliOptions {
        match parse(args) {
            Ok(CliAction::List(opts)) => opts,
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn bundled_short_flags() {
        let opts = options(&["-lah", "src"]);
        assert!(opts.long && opts.all && opts.human);
        assert!(!opts.almost_all);
        assert_eq!(opts.operands, ["src"]);
    }

    #[test]
    fn last_sort_flag_wins() {
        assert_eq!(options(&["-tS"]).sort, Some(SortMode::Size));
        assert_eq!(options(&["-St"]).sort, Some(SortMode::ModTime));
        assert_eq!(options(&[]).sort, None);
    }

    #[test]
    fn color_variants() {
        assert_eq!(options(&["--color"]).color, Some(ColorWhen::Always));
        assert_eq!(options(&["--color=never"]).color, Some(ColorWhen::Never));
        assert_eq!(options(&["--color=auto"]).color, Some(ColorWhen::Auto));
        assert!(matches!(
            parse(&["--color=sometimes"]),
            Err(LsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn double_dash_ends_options() {
        let opts = options(&["-l", "--", "-weird", "--help"]);
        assert!(opts.long);
        assert_eq!(opts.operands, ["-weird", "--help"]);
    }

    #[test]
    fn lone_dash_is_an_operand() {
        assert_eq!(options(&["-"]).operands, ["-"]);
    }

    #[test]
    fn unknown_options_fail() {
        assert!(matches!(parse(&["-z"]), Err(LsError::UnknownOption(o)) if o == "-z"));
        assert!(matches!(parse(&["--bogus"]), Err(LsError::UnknownOption(_))));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["-l", "--help"]).ok(), Some(CliAction::Help));
        assert_eq!(parse(&["--version"]).ok(), Some(CliAction::Version));
    }
}
