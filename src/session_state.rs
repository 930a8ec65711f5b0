use crate::domain::Role;

// Login recorded for the developer shortcut on the anonymous menu
pub const BYPASS_LOGIN: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session{
    #[default]
    Anonymous,
    Authenticated{
        login: String,
        role: Role
    }
}

impl Session {
    pub fn log_in(&mut self, login: String, role: Role){
        tracing::info!(%login, %role, "Session authenticated");
        *self = Session::Authenticated{ login, role };
    }

    // Skips credential checks and grants the manager capability set.
    // Kept for testing the manager menus without seeded accounts.
    pub fn bypass_login(&mut self){
        tracing::warn!("Login bypassed");
        self.log_in(BYPASS_LOGIN.to_string(), Role::Manager);
    }

    pub fn log_out(&mut self){
        if let Session::Authenticated{ login, .. } = self {
            tracing::info!(%login, "Session ended");
        }
        *self = Session::Anonymous;
    }

    pub fn login(&self) -> Option<&str>{
        match self {
            Session::Authenticated{ login, .. } => Some(login),
            Session::Anonymous => None
        }
    }

    pub fn role(&self) -> Option<Role>{
        match self {
            Session::Authenticated{ role, .. } => Some(*role),
            Session::Anonymous => None
        }
    }

    pub fn is_authenticated(&self) -> bool{
        matches!(self, Session::Authenticated{ .. })
    }
}
