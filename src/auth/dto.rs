use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for account creation.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after signup or login. The access token is the user's
/// id; no route on this service validates it.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: Uuid,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(user_id: Uuid) -> Self {
        Self {
            access_token: user_id,
            token_type: "bearer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_serialization() {
        let user_id = Uuid::new_v4();
        let json = serde_json::to_value(TokenResponse::bearer(user_id)).unwrap();
        assert_eq!(json["access_token"], user_id.to_string());
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn signup_request_deserialization() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"name":"N","email":"a@x.com","password":"p"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "N");
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.password, "p");
    }
}
