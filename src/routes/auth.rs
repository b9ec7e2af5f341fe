use crate::{
    auth::{generate_token, verify_password, AuthResponse, LoginRequest, TokenKeys},
    error::ApiError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login
///
/// Checks the username/password pair against the credential store and returns
/// a bearer token on success. An unknown username and a wrong password both
/// answer 401 with the same body, so responses cannot be used to enumerate
/// usernames.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    keys: web::Data<TokenKeys>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, ApiError> {
    let LoginRequest { username, password } = login_data.into_inner();

    match users.find_by_username(&username) {
        Some(user) => {
            if verify_password(&password, &user.password_hash)? {
                let token = generate_token(user.id, &keys)?;
                Ok(HttpResponse::Ok().json(AuthResponse { token }))
            } else {
                Err(ApiError::InvalidCredentials)
            }
        }
        None => Err(ApiError::InvalidCredentials),
    }
}
