use std::sync::Arc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::NewUser;
use crate::domain::user::ports::UserRepository;

/// Domain service for user operations: registration, login credential
/// verification, and the admin-side user management endpoints.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    pub async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        self.repository
            .create(NewUser {
                name: command.name.to_string(),
                surname: command.surname.to_string(),
                email: command.email.as_str().to_string(),
                password_hash,
            })
            .await
    }

    /// Verify login credentials and return the user.
    ///
    /// # Errors
    /// * `EmailNotRegistered` - No user with this email
    /// * `IncorrectCredentials` - Password does not match
    pub async fn login(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::EmailNotRegistered)?;

        if self.password_hasher.verify(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(UserError::IncorrectCredentials)
        }
    }

    /// Retrieve a user by id.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Apply a partial update (name, surname only).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    pub async fn update_user(
        &self,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;

        if let Some(name) = command.name {
            user.name = name;
        }
        if let Some(surname) = command.surname {
            user.surname = surname;
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Delete a user and, through the schema, its advertisements.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    pub async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }

    /// Mark a user as banned.
    pub async fn ban_user(&self, id: UserId) -> Result<User, UserError> {
        self.set_banned(id, true).await
    }

    /// Lift a user's ban.
    pub async fn unban_user(&self, id: UserId) -> Result<User, UserError> {
        self.set_banned(id, false).await
    }

    async fn set_banned(&self, id: UserId, banned: bool) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;
        user.is_banned = banned;
        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Promote a user to administrator.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Banned` - Target user is banned
    pub async fn appoint_admin(&self, id: UserId) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;

        if user.is_banned {
            return Err(UserError::Banned);
        }

        user.is_admin = true;
        self.repository.update(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::PersonName;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn update(&self, user: &User) -> Result<(), UserError>;
            async fn delete(&self, id: UserId) -> Result<(), UserError>;
        }
    }

    fn sample_user(id: i64) -> User {
        User {
            id: UserId(id),
            name: PersonName::new("Ivan".to_string()).unwrap(),
            surname: PersonName::new("Petrov".to_string()).unwrap(),
            email: EmailAddress::new(format!("user{}@example.com", id)).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            is_admin: false,
            is_banned: false,
            created_at: Utc::now(),
        }
    }

    fn create_command(email: &str) -> CreateUserCommand {
        CreateUserCommand {
            name: PersonName::new("Ivan".to_string()).unwrap(),
            surname: PersonName::new("Petrov".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email == "ivan@example.com")
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|new_user| {
                new_user.email == "ivan@example.com"
                    && new_user.password_hash.starts_with("$argon2")
                    && new_user.password_hash != "password123"
            })
            .times(1)
            .returning(|_| Ok(sample_user(1)));

        let service = UserService::new(Arc::new(repository));
        let result = service.create_user(create_command("ivan@example.com")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user(1))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));
        let result = service.create_user(create_command("user1@example.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyRegistered
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestUserRepository::new();

        let hash = auth::PasswordHasher::new().hash("correct_password").unwrap();
        let mut user = sample_user(1);
        user.password_hash = hash;

        let returned = user.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));
        let result = service.login("user1@example.com", "correct_password").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, UserId(1));
    }

    #[tokio::test]
    async fn test_login_unregistered_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));
        let result = service.login("ghost@example.com", "whatever").await;

        assert!(matches!(result.unwrap_err(), UserError::EmailNotRegistered));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        let hash = auth::PasswordHasher::new().hash("correct_password").unwrap();
        let mut user = sample_user(1);
        user.password_hash = hash;

        let returned = user.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));
        let result = service.login("user1@example.com", "wrong_password").await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::IncorrectCredentials
        ));
    }

    #[tokio::test]
    async fn test_update_user_applies_whitelisted_fields() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok(Some(sample_user(1))));
        repository
            .expect_update()
            .withf(|user| user.name.as_str() == "Maria" && user.surname.as_str() == "Petrov")
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));
        let command = UpdateUserCommand {
            name: Some(PersonName::new("Maria".to_string()).unwrap()),
            surname: None,
        };

        let updated = service.update_user(UserId(1), command).await.unwrap();
        assert_eq!(updated.name.as_str(), "Maria");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));
        let command = UpdateUserCommand {
            name: None,
            surname: None,
        };

        let result = service.update_user(UserId(7), command).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }

    #[tokio::test]
    async fn test_ban_and_unban_toggle_flag() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_user(1))));
        repository
            .expect_update()
            .withf(|user| user.is_banned)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));
        let banned = service.ban_user(UserId(1)).await.unwrap();
        assert!(banned.is_banned);

        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_id().times(1).returning(|_| {
            let mut user = sample_user(1);
            user.is_banned = true;
            Ok(Some(user))
        });
        repository
            .expect_update()
            .withf(|user| !user.is_banned)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));
        let unbanned = service.unban_user(UserId(1)).await.unwrap();
        assert!(!unbanned.is_banned);
    }

    #[tokio::test]
    async fn test_appoint_admin_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_user(1))));
        repository
            .expect_update()
            .withf(|user| user.is_admin)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));
        let promoted = service.appoint_admin(UserId(1)).await.unwrap();
        assert!(promoted.is_admin);
    }

    #[tokio::test]
    async fn test_appoint_admin_rejects_banned_target() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_find_by_id().times(1).returning(|_| {
            let mut user = sample_user(1);
            user.is_banned = true;
            Ok(Some(user))
        });
        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));
        let result = service.appoint_admin(UserId(1)).await;

        assert!(matches!(result.unwrap_err(), UserError::Banned));
    }
}
