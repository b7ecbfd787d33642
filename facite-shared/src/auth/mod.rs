/// Authentication and authorization utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing with configurable cost
/// - [`jwt`]: One-hour HS256 session tokens carrying `{id, email, username}`
/// - [`middleware`]: Bearer-token extraction into an [`middleware::AuthContext`]
/// - [`authorization`]: Ownership checks for users, categories and tasks
///
/// # Example
///
/// ```no_run
/// use facite_shared::auth::password::{hash_password, verify_password, PasswordConfig};
/// use facite_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password", &PasswordConfig::default())?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(1, "ada@example.com", "ada");
/// let token = create_token(&claims, "secret-key")?;
/// assert_eq!(validate_token(&token, "secret-key")?.id, 1);
/// # Ok(())
/// # }
/// ```

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
