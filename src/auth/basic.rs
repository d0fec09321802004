use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rocket::Request;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::response::{self, Responder, Response};

use crate::config::{STUDIO_REALM, StudioCredentials};
use crate::error::AppError;

/// A request that presented the studio's basic-auth credentials.
#[derive(Debug, Clone)]
pub struct StudioAdmin {
    pub username: String,
}

/// Decodes an `Authorization: Basic ...` header value into `(user, password)`.
/// The password is everything after the first colon, so it may contain colons.
pub fn parse_basic_auth(header: &str) -> Result<(String, String), AppError> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::Authentication("Malformed authorization header".to_string()))?;

    if scheme != "Basic" {
        return Err(AppError::Authentication(format!(
            "Unsupported authorization scheme: {}",
            scheme
        )));
    }

    let decoded = String::from_utf8(STANDARD.decode(encoded.trim())?)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::Authentication("Credentials missing separator".to_string()))?;

    Ok((username.to_string(), password.to_string()))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for StudioAdmin {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth_span = tracing::info_span!("studio_auth_guard");
        let _guard = auth_span.enter();

        let credentials = match request.rocket().state::<StudioCredentials>() {
            Some(credentials) => credentials,
            _ => {
                tracing::error!("Studio credentials not found in managed state");
                return Outcome::Error((Status::InternalServerError, ()));
            }
        };

        let Some(header) = request.headers().get_one("Authorization") else {
            tracing::debug!("Studio request without credentials");
            return Outcome::Error((Status::Unauthorized, ()));
        };

        match parse_basic_auth(header) {
            Ok((username, password)) if credentials.matches(&username, &password) => {
                tracing::info!(username = %username, "Studio access granted");
                Outcome::Success(StudioAdmin { username })
            }
            Ok((username, _)) => {
                tracing::warn!(username = %username, "Studio credentials rejected");
                Outcome::Error((Status::Unauthorized, ()))
            }
            Err(err) => {
                err.log_and_record("Studio authorization header");
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}

/// `401 Unauthorized` carrying a `WWW-Authenticate: Basic` challenge.
pub struct BasicChallenge {
    realm: String,
}

impl BasicChallenge {
    pub fn new(realm: &str) -> Self {
        Self {
            realm: realm.to_string(),
        }
    }

    pub fn header_value(&self) -> String {
        format!("Basic realm=\"{}\", charset=\"UTF-8\"", self.realm)
    }
}

impl<'r> Responder<'r, 'static> for BasicChallenge {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from("Unauthorized".respond_to(req)?)
            .status(Status::Unauthorized)
            .raw_header("WWW-Authenticate", self.header_value())
            .ok()
    }
}

#[catch(401)]
pub fn studio_challenge(req: &Request) -> BasicChallenge {
    let realm = req
        .rocket()
        .state::<StudioCredentials>()
        .map(|credentials| credentials.realm.as_str())
        .unwrap_or(STUDIO_REALM);

    BasicChallenge::new(realm)
}
