use uuid::Uuid;
use validator::Validate;

use crate::entities::resume::{PersonalInfo, ResumeInsert};
use crate::entities::token::AuthResponse;
use crate::entities::user::{LoginUser, NewUser, NewUserResponse, PublicUser, UpdateProfile, User};
use crate::errors::{AppError, AuthError};
use crate::infrastructure::auth::password::{hash_password, verify_password};
use crate::repositories::resume::ResumeRepository;
use crate::repositories::token::TokenServiceRepository;
use crate::repositories::user::UserRepository;

pub struct AuthHandler<U, R, T>
where
    U: UserRepository,
    R: ResumeRepository,
    T: TokenServiceRepository,
{
    pub user_repo: U,
    pub resume_repo: R,
    pub token_service: T,
}

impl<U, R, T> AuthHandler<U, R, T>
where
    U: UserRepository,
    R: ResumeRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: U, resume_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            resume_repo,
            token_service,
        }
    }

    /// Registers a new user and seeds their default resume with a snapshot
    /// of the profile fields.
    pub async fn register(&self, request: NewUser) -> Result<NewUserResponse, AppError> {
        request.validate()?;

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);

        let user = self.user_repo.create_user(&user_insert).await?;

        self.resume_repo
            .create(&ResumeInsert {
                user_id: user.id,
                personal_info: PersonalInfo::from(&user),
            })
            .await?;

        Ok(NewUserResponse {
            id: user.id,
            message: "User registered successfully".to_string(),
        })
    }

    /// Logs in a user by validating credentials and generating JWTs.
    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = self
            .user_repo
            .get_user_by_email(&request.email.to_lowercase())
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let response = self.create_auth_response(&user)?;

        tracing::info!("User logged in successfully");
        Ok(response)
    }

    pub fn create_auth_response(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(user).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        let refresh_token = self.token_service.create_refresh_jwt(&user.id).map_err(|e| {
            tracing::warn!("Failed to create refresh JWT: {}", e);
            AuthError::TokenCreation
        })?;

        Ok(AuthResponse::new(access_token, refresh_token))
    }

    /// Refreshes the access token using the refresh token.
    pub async fn refresh_token(&self, token: &str) -> Result<AuthResponse, AuthError> {
        let decoded = self.token_service.decode_refresh_jwt(token)?;
        let user_id =
            Uuid::parse_str(&decoded.claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .user_repo
            .get_user_by_id(&user_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        self.create_auth_response(&user)
    }

    pub async fn me(&self, user_id: &Uuid) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial profile update and mirrors the result into the
    /// resume's personal-info snapshot.
    pub async fn update_profile(
        &self,
        user_id: &Uuid,
        update: UpdateProfile,
    ) -> Result<PublicUser, AppError> {
        let mut user = self
            .user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(location) = update.location {
            user.location = location;
        }
        if let Some(linkedin) = update.linkedin {
            user.linkedin = linkedin;
        }
        if let Some(github) = update.github {
            user.github = github;
        }
        if let Some(portfolio) = update.portfolio {
            user.portfolio = portfolio;
        }
        if let Some(profile_picture) = update.profile_picture {
            user.profile_picture = profile_picture;
        }

        let updated = self.user_repo.update_user(&user).await?;

        if let Some(mut resume) = self.resume_repo.find_by_user(user_id).await? {
            resume.personal_info.0 = PersonalInfo::from(&updated);
            self.resume_repo.save(&resume).await?;
        }

        Ok(PublicUser::from(updated))
    }
}
