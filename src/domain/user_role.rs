use std::str::FromStr;

/// What a logged in user may do from the item menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability{
    ViewMenu,
    SearchItemName,
    SearchItemType,
    ManageItems
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role{
    Customer,
    Manager
}

const CUSTOMER_CAPABILITIES: &[Capability] = &[
    Capability::ViewMenu,
    Capability::SearchItemName,
    Capability::SearchItemType
];

const MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ViewMenu,
    Capability::SearchItemName,
    Capability::SearchItemType,
    Capability::ManageItems
];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Manager => "Manager"
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Customer => CUSTOMER_CAPABILITIES,
            Role::Manager => MANAGER_CAPABILITIES
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl FromStr for Role {
    type Err = String;

    // `type` may come back blank padded from fixed width columns
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Customer" => Ok(Role::Customer),
            "Manager" => Ok(Role::Manager),
            other => Err(format!("{} is not a known user type", other))
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
