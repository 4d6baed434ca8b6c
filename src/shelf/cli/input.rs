//! Menu choices parsed from free text.
//!
//! Commands are recognised by their first letter, case-insensitive, so
//! "v", "View" and "view books" all pick the View menu. The same letter may
//! mean different things in different menus: `e` exits the main and view
//! menus but edits in the manage menu.

use std::str::FromStr;

pub const MAIN_OPTIONS: &[&str] = &["Manage Books", "View Books", "Settings", "Exit"];
pub const MANAGE_OPTIONS: &[&str] = &[
    "Add Book",
    "Remove Book",
    "Edit Book",
    "Find Book",
    "Back",
];
pub const BROWSE_OPTIONS: &[&str] = &["Next", "Previous", "<id> Select", "Exit"];
pub const SELECTED_OPTIONS: &[&str] = &["Remove", "Edit", "Back"];
pub const SETTINGS_OPTIONS: &[&str] = &["Page Size", "Color", "Wipe Screen", "Save", "Back"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Manage,
    View,
    Settings,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageChoice {
    Add,
    Remove,
    Edit,
    Find,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseChoice {
    Next,
    Previous,
    /// Raw id text; the API decides whether it is a valid id.
    Select(String),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedChoice {
    Remove,
    Edit,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    PageSize,
    Color,
    WipeScreen,
    Save,
    Back,
}

fn first_letter(s: &str) -> Option<char> {
    s.trim().chars().next().map(|c| c.to_ascii_lowercase())
}

fn invalid(s: &str) -> String {
    format!("Invalid option: {}", s.trim())
}

impl FromStr for MainChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match first_letter(s) {
            Some('m') => Ok(MainChoice::Manage),
            Some('v') => Ok(MainChoice::View),
            Some('s') => Ok(MainChoice::Settings),
            Some('e') => Ok(MainChoice::Exit),
            _ => Err(invalid(s)),
        }
    }
}

impl FromStr for ManageChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match first_letter(s) {
            Some('a') => Ok(ManageChoice::Add),
            Some('r') => Ok(ManageChoice::Remove),
            Some('e') => Ok(ManageChoice::Edit),
            Some('f') => Ok(ManageChoice::Find),
            Some('b') => Ok(ManageChoice::Back),
            _ => Err(invalid(s)),
        }
    }
}

impl FromStr for BrowseChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match first_letter(s) {
            Some('n') => Ok(BrowseChoice::Next),
            Some('p') => Ok(BrowseChoice::Previous),
            Some('e') => Ok(BrowseChoice::Exit),
            Some(c) if c.is_ascii_digit() => Ok(BrowseChoice::Select(s.trim().to_string())),
            _ => Err(invalid(s)),
        }
    }
}

impl FromStr for SelectedChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match first_letter(s) {
            Some('r') => Ok(SelectedChoice::Remove),
            Some('e') => Ok(SelectedChoice::Edit),
            Some('b') => Ok(SelectedChoice::Back),
            _ => Err(invalid(s)),
        }
    }
}

impl FromStr for SettingsChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match first_letter(s) {
            Some('p') => Ok(SettingsChoice::PageSize),
            Some('c') => Ok(SettingsChoice::Color),
            Some('w') => Ok(SettingsChoice::WipeScreen),
            Some('s') => Ok(SettingsChoice::Save),
            Some('b') => Ok(SettingsChoice::Back),
            _ => Err(invalid(s)),
        }
    }
}
