//! Reading and validating menu definitions.
//!
//! Menus live in a YAML file holding a list of [`MenuDefinition`]s. Loading
//! validates menu IDs, widget keys and switch choices before any widget is
//! built.

use std::collections::HashSet;
use std::fs::File;

use indexmap::IndexMap;

use crate::definitions::{MenuDefinition, WidgetDefinition};
use crate::error::Error::{
    EmptyCommand, EmptyId, IdWithSpace, NoChoices, NonUniqueChoiceValue, NonUniqueMenuId,
    NonUniqueWidgetKey,
};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    Ok(())
}

fn validate_widgets(menu: &MenuDefinition) -> Result<()> {
    let mut keys = HashSet::new();

    for widget in &menu.widgets {
        let key = widget.key_char()?;
        if !keys.insert(key) {
            return Err(NonUniqueWidgetKey(menu.id.clone(), key));
        }

        if let WidgetDefinition::Switch { choices, .. } = widget {
            if choices.is_empty() {
                return Err(NoChoices(
                    menu.id.clone(),
                    widget.description().to_string(),
                ));
            }

            let mut values = HashSet::new();
            for choice in choices {
                if !values.insert(choice.value.as_str()) {
                    return Err(NonUniqueChoiceValue(
                        menu.id.clone(),
                        widget.description().to_string(),
                        choice.value.clone(),
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Validates a list of menus: IDs are well formed and unique, commands are
/// non-empty, widget keys are single characters unique per menu and switches
/// have unique, non-empty choices.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate_menus(menus: &[MenuDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for menu in menus {
        validate_id(&menu.id)?;

        if !ids.insert(menu.id.as_str()) {
            return Err(NonUniqueMenuId(menu.id.clone()));
        }

        if menu.command.is_empty() {
            return Err(EmptyCommand(menu.id.clone()));
        }

        validate_widgets(menu)?;
    }

    Ok(())
}

/// Loads and validates menu definitions from a configuration file, keyed by
/// menu ID in file order.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configuration file is empty
/// - Any menu fails [`validate_menus`]
pub fn get_menu_definitions(config_path: &str) -> Result<IndexMap<String, MenuDefinition>> {
    let config_reader = get_reader("config", config_path)?;

    let parsed_menus: Vec<MenuDefinition> =
        serde_yaml::from_reader(config_reader).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    if parsed_menus.is_empty() {
        return Err(Error::empty_menu_definition(config_path.to_string()));
    }

    validate_menus(&parsed_menus)?;

    Ok(parsed_menus
        .into_iter()
        .map(|menu| (menu.id.clone(), menu))
        .collect())
}
