//! Credential checks for the admin and team-manager logins.
//!
//! Passwords are compared as stored, in plain text. There is no hashing,
//! rate limiting or lockout; a successful check is the whole session.

use tracing::{info, warn};

use crate::error::LoginError;
use crate::models::TeamManager;
use crate::store::FestivalStore;

/// The only admin username accepted.
pub const ADMIN_USERNAME: &str = "admin";

pub fn check_admin_credentials(username: &str, password: &str, stored_password: &str) -> bool {
    username == ADMIN_USERNAME && password == stored_password
}

/// The first record matching username, password and team.
pub fn check_team_manager_credentials<'a>(
    username: &str,
    password: &str,
    team: &str,
    records: &'a [TeamManager],
) -> Option<&'a TeamManager> {
    records
        .iter()
        .find(|r| r.username == username && r.password == password && r.team == team)
}

/// Admin login against the stored password.
pub fn login_admin(store: &FestivalStore, username: &str, password: &str) -> Result<(), LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    if check_admin_credentials(username, password, &store.load_admin_password()) {
        info!("Admin logged in");
        Ok(())
    } else {
        warn!(username, "Rejected admin login");
        Err(LoginError::InvalidAdminCredentials)
    }
}

/// Team-manager login against the stored records.
pub fn login_team_manager(
    store: &FestivalStore,
    username: &str,
    password: &str,
    team: &str,
) -> Result<TeamManager, LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    if team.is_empty() {
        return Err(LoginError::NoTeamSelected);
    }

    let records = store.load_team_managers();
    match check_team_manager_credentials(username, password, team, &records) {
        Some(record) => {
            info!(username, team, "Team manager logged in");
            Ok(record.clone())
        }
        None => {
            warn!(username, team, "Rejected team manager login");
            Err(LoginError::InvalidTeamManagerCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(username: &str, password: &str, team: &str) -> TeamManager {
        TeamManager {
            username: username.to_string(),
            password: password.to_string(),
            event: "Dance".to_string(),
            team: team.to_string(),
        }
    }

    #[test]
    fn test_admin_credentials() {
        assert!(check_admin_credentials("admin", "admin123", "admin123"));
        assert!(!check_admin_credentials("root", "admin123", "admin123"));
        assert!(!check_admin_credentials("admin", "Admin123", "admin123"));
    }

    #[test]
    fn test_team_manager_requires_all_three() {
        let records = vec![manager("asha", "pw", "Alpha"), manager("ravi", "pw2", "Beta")];
        assert_eq!(
            check_team_manager_credentials("ravi", "pw2", "Beta", &records),
            Some(&records[1])
        );
        assert!(check_team_manager_credentials("ravi", "pw2", "Alpha", &records).is_none());
        assert!(check_team_manager_credentials("ravi", "pw", "Beta", &records).is_none());
    }

    #[test]
    fn test_login_admin_uses_default_password() {
        let store = FestivalStore::in_memory();
        assert_eq!(login_admin(&store, "admin", "admin123"), Ok(()));
        assert_eq!(
            login_admin(&store, "admin", "nope"),
            Err(LoginError::InvalidAdminCredentials)
        );
        assert_eq!(login_admin(&store, "", "x"), Err(LoginError::MissingCredentials));
    }

    #[test]
    fn test_login_team_manager_form_checks() {
        let store = FestivalStore::in_memory();
        assert!(store.save_team_managers(&[manager("asha", "pw", "Alpha")]));

        assert_eq!(
            login_team_manager(&store, "asha", "", "Alpha"),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            login_team_manager(&store, "asha", "pw", ""),
            Err(LoginError::NoTeamSelected)
        );
        assert_eq!(
            login_team_manager(&store, "asha", "pw", "Beta"),
            Err(LoginError::InvalidTeamManagerCredentials)
        );
        assert_eq!(
            login_team_manager(&store, "asha", "pw", "Alpha").unwrap().team,
            "Alpha"
        );
    }

    #[test]
    fn test_blank_placeholder_record_cannot_log_in() {
        let store = FestivalStore::in_memory();
        assert!(store.save_team_managers(&[TeamManager::default()]));
        assert_eq!(
            login_team_manager(&store, "", "", ""),
            Err(LoginError::MissingCredentials)
        );
    }
}
