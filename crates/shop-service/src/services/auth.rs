//! Authentication service
//!
//! Handles user registration, login, and token verification.

use shop_common::{hash_password, PasswordService};
use shop_core::{DomainError, Identity, User};
use tracing::{info, instrument, warn};

use crate::dto::{
    LoginRequest, NewAccount, RegisterRequest, RegisterResponse, TokenResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = ?request.email, username = ?request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        let NewAccount {
            full_name,
            email,
            username,
            password,
            role,
        } = request.into_account()?;

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().username_exists(&username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = hash_password(&password)?;

        let user = User::new(full_name, email, username, role);

        // The unique constraints still guard against a concurrent duplicate
        self.ctx.user_repo().create(&user, &password_hash).await?;

        if user.is_admin() {
            warn!(user_id = %user.id, "Admin account registered");
        } else {
            info!(user_id = %user.id, "User registered successfully");
        }

        Ok(RegisterResponse {
            message: "User created successfully".to_string(),
            user: UserResponse::from(&user),
        })
    }

    /// Login with email and password
    ///
    /// An unknown email and a wrong password produce the same error after the
    /// same amount of hashing work.
    #[instrument(skip(self, request), fields(email = ?request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let (email, password) = request.credentials()?;

        let passwords = PasswordService::new();

        let Some(user) = self.ctx.user_repo().find_by_email(email).await? else {
            warn!("Login failed: unknown email");
            return Err(passwords.reject(password).into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(passwords.reject(password).into());
        };

        passwords
            .verify_or_error(password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        let token = self
            .ctx
            .jwt_service()
            .issue(Identity::new(user.id, user.role))?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(TokenResponse::from(token))
    }

    /// Validate an access token and return the identity it asserts
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> ServiceResult<Identity> {
        let claims = self.ctx.jwt_service().verify(token)?;
        Ok(claims.identity())
    }
}
