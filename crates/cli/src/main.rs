use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use indexmap::IndexMap;
use log::{debug, info};
use menu_args_cli::cli_args::Args;
use menu_args_cli::prompt::terminal_prompter;
use menu_args_cli::ui::{format_command_line, run_menu, MenuAction};
use menu_args_core::builtin::print_menu;
use menu_args_core::definitions::MenuDefinition;
use menu_args_core::error::{Error, Result};
use menu_args_core::{config, execution, file_handling};

/// Loads the menu named on the command line, or the first one.
fn load_menu_definition(args: &Args) -> Result<MenuDefinition> {
    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{}`", config_path);

    let mut menus: IndexMap<String, MenuDefinition> = if Path::new(&config_path).exists() {
        file_handling::get_menu_definitions(&config_path)?
    } else {
        info!("No menu config at `{}`, using the built-in print menu", config_path);
        let builtin = print_menu()?;
        [(builtin.id.clone(), builtin)].into_iter().collect()
    };

    match &args.menu {
        Some(id) => menus.shift_remove(id).ok_or_else(|| Error::MenuNotFound(id.clone())),
        None => menus
            .shift_remove_index(0)
            .map(|(_, menu)| menu)
            .ok_or_else(|| Error::empty_menu_definition(config_path)),
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let definition = load_menu_definition(&args)?;
    let context = args.host_context()?;
    let mut menu = definition.build(&context)?;

    let mut prompter = terminal_prompter()?;
    if run_menu(&mut menu, &mut prompter)? == MenuAction::Quit {
        debug!("Menu closed without running");
        return Ok(());
    }

    let command_line = menu.assemble()?;
    println!("Executing command:\n{}", format_command_line(&command_line));

    if args.dry_run {
        println!("Dry run is specified, exiting without executing.");
        return Ok(());
    }

    execution::execute_command(&command_line)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
