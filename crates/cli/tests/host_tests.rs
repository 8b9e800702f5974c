use std::io::Cursor;

use menu_args_cli::cli_args::{context_from_files, STDIN_BUFFER};
use menu_args_cli::prompt::LinePrompter;
use menu_args_cli::ui::format_command_line;
use menu_args_core::builtin::print_menu;
use menu_args_core::context::ContextProvider;
use tempfile::NamedTempFile;

fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_print_menu_for_marked_files() {
    let files = vec!["/tmp/a.pdf".to_string(), "/tmp/b.pdf".to_string()];
    let context = context_from_files(&files).unwrap();
    let mut menu = print_menu().unwrap().build(&context).unwrap();

    let mut prompter = prompter("letter\n2\n");
    menu.widget_mut('m').unwrap().read(&mut prompter).unwrap();
    menu.widget_mut('n').unwrap().read(&mut prompter).unwrap();
    menu.widget_mut('s').unwrap().read(&mut prompter).unwrap();
    menu.widget_mut('s').unwrap().read(&mut prompter).unwrap();

    assert_eq!(
        format_command_line(&menu.assemble().unwrap()),
        "lp -osides=two-sided-long-edge -omedia=letter -n 2 /tmp/a.pdf /tmp/b.pdf"
    );
}

#[test]
fn test_stdin_buffer_contributes_no_operands() {
    let context = context_from_files(&[]).unwrap();
    assert_eq!(context.active_buffer().0, STDIN_BUFFER);

    let menu = print_menu().unwrap().build(&context).unwrap();
    assert_eq!(menu.assemble().unwrap(), vec!["lp"]);
}

#[test]
fn test_files_widget_replaces_buffer_with_prompted_file() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let context = context_from_files(&[]).unwrap();
    let mut menu = print_menu().unwrap().build(&context).unwrap();

    let mut prompter = prompter(&format!("{path}\n"));
    menu.widget_mut('f').unwrap().read(&mut prompter).unwrap();

    assert_eq!(menu.assemble().unwrap(), vec!["lp".to_string(), path]);
}

#[test]
fn test_unknown_media_is_kept_as_free_text() {
    let context = context_from_files(&[]).unwrap();
    let mut menu = print_menu().unwrap().build(&context).unwrap();

    menu.widget_mut('m')
        .unwrap()
        .read(&mut prompter("tabloid\n"))
        .unwrap();
    assert_eq!(menu.assemble().unwrap(), vec!["lp", "-omedia=tabloid"]);
}
