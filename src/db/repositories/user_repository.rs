use crate::db::error::RepositoryError;
use crate::db::models::user::{NewUser, User};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Accès aux utilisateurs. Injecté dans `AuthService` via `Arc<dyn UserRepository>`.
pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Trouver un utilisateur par ID
    fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Créer un nouvel utilisateur. Échoue si l'email existe déjà.
    fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;
}

/// Stockage en mémoire, remis à zéro à chaque redémarrage.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read()?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read()?;
        Ok(users.get(&id).cloned())
    }

    fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        // Check and insert under the same write lock
        let mut users = self.users.write()?;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(RepositoryError::UniqueViolation(format!(
                "email {} already registered",
                new_user.email
            )));
        }

        let user = User::from(new_user);
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
