use std::io::{self, Write};

use crate::{domain::{Capability, Role}, session_state::Session};

pub struct MenuEntry<C>{
    pub choice: i32,
    pub label: &'static str,
    pub command: C
}

/// A numbered list of commands. Only the commands present in a menu can be
/// chosen from it; access control is the act of building the menu.
pub struct Menu<C>{
    title: Option<&'static str>,
    entries: Vec<MenuEntry<C>>
}

impl<C: Copy> Menu<C> {
    fn new(title: Option<&'static str>, entries: Vec<(i32, &'static str, C)>) -> Self{
        let entries = entries.into_iter()
            .map(|(choice, label, command)| MenuEntry{ choice, label, command })
            .collect();

        Menu{ title, entries }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()>{
        if let Some(title) = self.title {
            writeln!(out, "{}", title)?;
            writeln!(out, "{}", "-".repeat(title.len()))?;
        }
        for entry in &self.entries {
            writeln!(out, "{}. {}", entry.choice, entry.label)?;
        }
        Ok(())
    }

    pub fn command_for(&self, choice: i32) -> Option<C>{
        self.entries.iter()
            .find(|entry| entry.choice == choice)
            .map(|entry| entry.command)
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[MenuEntry<C>]{
        &self.entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand{
    CreateUser,
    LogIn,
    BypassLogin,
    Exit,
    GotoMenu,
    UpdateProfile,
    PlaceOrder,
    UpdateOrder,
    LogOut
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCommand{
    ViewMenu,
    SearchItemName,
    SearchItemType,
    ManageItems,
    Back
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageCommand{
    AddItem,
    DeleteItem,
    ModifyItem,
    Back
}

pub fn main_menu(session: &Session) -> Menu<MainCommand>{
    let entries = if session.is_authenticated() {
        vec![
            (1, "Goto Menu", MainCommand::GotoMenu),
            (2, "Update Profile", MainCommand::UpdateProfile),
            (3, "Place a Order", MainCommand::PlaceOrder),
            (4, "Update a Order", MainCommand::UpdateOrder),
            (9, "Log out", MainCommand::LogOut)
        ]
    } else {
        vec![
            (1, "Create user", MainCommand::CreateUser),
            (2, "Log in", MainCommand::LogIn),
            (3, "Bypass login (for lazy developers!)", MainCommand::BypassLogin),
            (9, "< EXIT", MainCommand::Exit)
        ]
    };

    Menu::new(Some("MAIN MENU"), entries)
}

const ITEM_ENTRIES: &[(Capability, i32, &str, ItemCommand)] = &[
    (Capability::ViewMenu, 1, "View menu", ItemCommand::ViewMenu),
    (Capability::SearchItemName, 2, "Search for an item", ItemCommand::SearchItemName),
    (Capability::SearchItemType, 3, "Search for a type of item", ItemCommand::SearchItemType),
    (Capability::ManageItems, 4, "Add/delete/modify item", ItemCommand::ManageItems)
];

pub fn item_menu(role: Role) -> Menu<ItemCommand>{
    let mut entries: Vec<(i32, &'static str, ItemCommand)> = ITEM_ENTRIES
        .iter()
        .filter(|(capability, ..)| role.can(*capability))
        .map(|&(_, choice, label, command)| (choice, label, command))
        .collect();
    entries.push((9, "Go to main menu", ItemCommand::Back));

    Menu::new(None, entries)
}

pub fn manage_menu() -> Menu<ManageCommand>{
    Menu::new(None, vec![
        (1, "Add item", ManageCommand::AddItem),
        (2, "Delete item", ManageCommand::DeleteItem),
        (3, "Modify item", ManageCommand::ModifyItem),
        (9, "Go to main menu", ManageCommand::Back)
    ])
}
