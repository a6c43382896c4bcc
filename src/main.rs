//! main.rs
//! Entry point for rls

use runa_ls::app::{Lister, ListOptions, Terminal, build_render_config};
use runa_ls::config::Config;
use runa_ls::utils::cli::{CliAction, handle_args, print_help, print_version};
use runa_ls::utils::{init_logging, stdout_is_terminal, terminal_size};

use std::io::{BufWriter, Write};
use std::process;

fn main() {
    init_logging();

    let opts = match handle_args() {
        Ok(CliAction::List(opts)) => opts,
        Ok(CliAction::Help) => {
            print_help();
            return;
        }
        Ok(CliAction::Version) => {
            print_version();
            return;
        }
        Err(e) => {
            eprintln!("rls: {}", e);
            eprintln!("Try 'rls --help' for more information.");
            process::exit(e.exit_code());
        }
    };

    let config = Config::load();
    let (width, height) = terminal_size();
    let term = Terminal {
        is_terminal: stdout_is_terminal(),
        width,
        height,
    };
    let render = build_render_config(&opts, &config, term);
    let lister = Lister::new(ListOptions::from(&opts), render);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let code = match lister.run(&opts.operands, &mut out).and_then(|code| {
        out.flush()?;
        Ok(code)
    }) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            e.exit_code()
        }
    };
    drop(out);
    process::exit(code);
}
