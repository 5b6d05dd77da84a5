//! Authentication service: password hashing, JWT, login, and user lookups.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{RegisterRequest, User, UserRole};

/// Lifetime of a password-reset token.
const RESET_TOKEN_EXPIRY_SECS: i64 = 900;

/// JWT claims embedded in access and password-reset tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub role: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Hash a plaintext password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate a signed access token for the user.
pub fn generate_token(user: &User, jwt_secret: &str, expiry_secs: i64) -> Result<String, AppError> {
    sign_token(user, "access", jwt_secret, expiry_secs)
}

/// Generate a short-lived token usable only for resetting the password.
pub fn generate_reset_token(user: &User, jwt_secret: &str) -> Result<String, AppError> {
    sign_token(user, "reset", jwt_secret, RESET_TOKEN_EXPIRY_SECS)
}

fn sign_token(
    user: &User,
    token_type: &str,
    jwt_secret: &str,
    expiry_secs: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.username.clone(),
        user_id: user.id.to_string(),
        role: serde_json::to_string(&user.role)
            .unwrap_or_default()
            .trim_matches('"')
            .to_string(),
        token_type: token_type.to_string(),
        exp: (now + Duration::seconds(expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Create a new user with hashed password. Self-registered users always
/// get the USER role.
pub async fn register(pool: &PgPool, input: &RegisterRequest) -> Result<User, AppError> {
    let password_hash = hash_password(&input.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, username, email, mobile, password_hash, role)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.username)
    .bind(&input.email)
    .bind(&input.mobile)
    .bind(&password_hash)
    .bind(UserRole::User)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Username or email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(user)
}

/// Authenticate by username or email and password, returning the user and
/// a signed token. Bad credentials are indistinguishable from an unknown
/// account.
pub async fn login(
    pool: &PgPool,
    username_or_email: &str,
    password: &str,
    jwt_secret: &str,
    expiry_secs: i64,
) -> Result<(User, String), AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1 OR email = $1")
        .bind(username_or_email)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let token = generate_token(&user, jwt_secret, expiry_secs)?;
    Ok((user, token))
}

/// Issue a password-reset token for the account behind `email`, if any.
///
/// Always succeeds, so callers cannot probe which emails exist. Token
/// delivery happens out of band; the token is surfaced through the log.
pub async fn request_password_reset(
    pool: &PgPool,
    email: &str,
    jwt_secret: &str,
) -> Result<(), AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    if let Some(user) = user {
        let token = generate_reset_token(&user, jwt_secret)?;
        tracing::info!(username = %user.username, token = %token, "Password reset token issued");
    }

    Ok(())
}

/// Set a new password from a reset token. Rejects anything that is not a
/// valid, unexpired reset-purpose token.
pub async fn reset_password(
    pool: &PgPool,
    token: &str,
    new_password: &str,
    jwt_secret: &str,
) -> Result<(), AppError> {
    if new_password.len() < 6 {
        return Err(AppError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }

    let claims = validate_token(token, jwt_secret)?;
    if claims.token_type != "reset" {
        return Err(AppError::Unauthorized);
    }
    let user_id: Uuid = claims.user_id.parse().map_err(|_| AppError::Unauthorized)?;

    let password_hash = hash_password(new_password)?;
    let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
        .bind(&password_hash)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(())
}

/// Fetch a user by id.
pub async fn find_user_by_id(pool: &PgPool, id: Uuid) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// List all users, newest first.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(users)
}
