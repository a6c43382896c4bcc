//! Listing orchestration for runa-ls.
//!
//! Turns command-line operands into render batches the way `ls` groups them:
//! non-directory operands first as one batch, then one batch per directory
//! with a `name:` header when several operands were given. A recursive
//! listing gathers everything under the operands into one batch.

use crate::config::Config;
use crate::core::{
    Entry, IdResolver, Painter, RenderConfig, Visibility, read_dir_entries, read_entry, render,
};
use crate::core::fm::join_display;
use crate::error::{LsError, Result};
use crate::utils::cli::CliOptions;

use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment facts the render settings depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub is_terminal: bool,
    pub width: usize,
    pub height: usize,
}

/// Combines command-line flags, the config file and the terminal into the
/// settings of a render call. Flags win over the config file.
pub fn build_render_config(cli: &CliOptions, config: &Config, term: Terminal) -> RenderConfig {
    let general = config.general();
    let color = cli.color.unwrap_or(general.color());
    let painter: Option<Arc<dyn Painter + Send + Sync>> = if color.enabled(term.is_terminal) {
        Some(Arc::new(config.ls_colors()))
    } else {
        None
    };

    RenderConfig {
        sort: cli.sort.unwrap_or(general.sort()),
        reverse: cli.reverse || general.reverse(),
        human_readable: cli.human || general.human_readable(),
        long_format: cli.long,
        one_column: cli.one_column || !term.is_terminal,
        by_lines: cli.by_lines || general.by_lines(),
        wide: cli.wide,
        show_inode: cli.inode || general.show_inode(),
        width: term.width,
        height: term.height,
        painter,
        ..RenderConfig::default()
    }
}

/// What to list and how to pick directory children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub list_dirs: bool,
    pub recursive: bool,
    pub visibility: Visibility,
}

impl From<&CliOptions> for ListOptions {
    fn from(cli: &CliOptions) -> Self {
        let visibility = if cli.only_hidden {
            Visibility::OnlyHidden
        } else if cli.almost_all {
            Visibility::AlmostAll
        } else if cli.all {
            Visibility::All
        } else {
            Visibility::Default
        };
        ListOptions {
            list_dirs: cli.list_dirs,
            recursive: cli.recursive,
            visibility,
        }
    }
}

/// Runs listings and writes their output.
pub struct Lister {
    options: ListOptions,
    render: RenderConfig,
    ids: IdResolver,
}

impl Lister {
    pub fn new(options: ListOptions, render: RenderConfig) -> Self {
        Lister {
            options,
            render,
            ids: IdResolver::new(),
        }
    }

    /// Lists `operands` (the current directory when empty) into `out`.
    ///
    /// Returns the exit status: 0 on success, 1 when some directory or child
    /// could not be read, 2 when an operand does not exist. Only write errors
    /// abort the listing.
    pub fn run<W: Write>(&self, operands: &[String], out: &mut W) -> Result<i32> {
        let operands: Vec<String> = if operands.is_empty() {
            vec![".".to_string()]
        } else {
            operands.to_vec()
        };

        let mut status = 0;
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for operand in &operands {
            let path = Path::new(operand);
            match self.classify_operand(path) {
                Ok(true) => dirs.push(operand.clone()),
                Ok(false) => match read_entry(path, operand.as_str(), &self.ids) {
                    Ok(entry) => files.push(entry),
                    Err(e) => {
                        tracing::error!("{}", e);
                        status = status.max(e.exit_code());
                    }
                },
                Err(e) => {
                    tracing::error!("{}", e);
                    status = status.max(e.exit_code());
                }
            }
        }

        if self.options.recursive {
            let (entries, failures) = self.collect_recursive(files, &dirs);
            if failures > 0 {
                status = status.max(1);
            }
            tracing::debug!("rendering {} entries", entries.len());
            self.write_batch(&entries, None, out)?;
            return Ok(status);
        }

        let mut printed = !files.is_empty();
        if printed {
            self.write_batch(&files, None, out)?;
        }

        let headers = operands.len() > 1;
        for dir in &dirs {
            if printed {
                writeln!(out)?;
            }
            if headers || printed {
                writeln!(out, "{}:", dir)?;
            }
            printed = true;

            match read_dir_entries(
                Path::new(dir),
                dir,
                self.options.visibility,
                false,
                &self.ids,
            ) {
                Ok(listing) => {
                    if listing.failures > 0 {
                        status = status.max(1);
                    }
                    self.write_batch(&listing.entries, Some(listing.total_size), out)?;
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    status = status.max(e.exit_code());
                }
            }
        }

        Ok(status)
    }

    /// Whether an operand's contents are listed (`true`) or the operand itself.
    /// Symlinks to directories count as directories unless `-d` was given.
    fn classify_operand(&self, path: &Path) -> Result<bool> {
        let meta = fs::symlink_metadata(path).map_err(|source| LsError::Access {
            path: path.to_path_buf(),
            source,
        })?;
        if self.options.list_dirs {
            return Ok(false);
        }
        if meta.file_type().is_symlink() {
            return Ok(fs::metadata(path).is_ok_and(|m| m.is_dir()));
        }
        Ok(meta.is_dir())
    }

    /// Walks the directory operands breadth first. Display names are paths
    /// relative to the operand they were found under.
    fn collect_recursive(&self, mut entries: Vec<Entry>, dirs: &[String]) -> (Vec<Entry>, usize) {
        let mut failures = 0;
        let mut queue: VecDeque<(PathBuf, String)> = dirs
            .iter()
            .map(|d| (PathBuf::from(d), d.clone()))
            .collect();

        while let Some((dir, display)) = queue.pop_front() {
            match read_dir_entries(&dir, &display, self.options.visibility, true, &self.ids) {
                Ok(listing) => {
                    failures += listing.failures;
                    for sub in listing.subdirs {
                        let name = sub
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        let sub_display = join_display(&display, &name);
                        queue.push_back((sub, sub_display));
                    }
                    entries.extend(listing.entries);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    failures += 1;
                }
            }
        }
        (entries, failures)
    }

    /// Renders one batch. `total_size` is given for a directory's contents and
    /// only shows up in long format.
    fn write_batch<W: Write>(
        &self,
        entries: &[Entry],
        total_size: Option<u64>,
        out: &mut W,
    ) -> Result<()> {
        let config = RenderConfig {
            total_size: total_size.filter(|_| self.render.long_format),
            ..self.render.clone()
        };
        for line in render(entries, &config) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
