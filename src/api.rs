//! REST surface of the store, independent of any HTTP server.
//!
//! [`dispatch`] maps a method, a path under `/api/` and an optional JSON
//! body to a status code and a JSON body. This is the only layer that turns
//! storage errors into status codes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};

use crate::backend::{ContentStore, Repository, StoreError, StoreResult};
use crate::content::{ContentKind, Record};
use crate::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, service,
    testimonial, workshop_testimonial,
};
use crate::ordering::{self, Direction};
use crate::validation::{self, Schema, ValidationError, ACHIEVEMENT_PATCH, CONTACT_SUBMISSION, FEATURE_PATCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(format!("Unsupported method: {}", other)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Status code plus JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Response { status, body },
            Err(e) => Response::message(500, format!("Failed to encode response: {}", e)),
        }
    }

    fn message(status: u16, message: impl Into<String>) -> Self {
        Response {
            status,
            body: json!({ "message": message.into() }),
        }
    }

    fn not_found() -> Self {
        Response::message(404, "Not found")
    }

    fn validation(error: &ValidationError) -> Self {
        Response {
            status: 400,
            body: json!({ "message": "Validation error", "errors": error.issues }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<StoreError> for Response {
    fn from(error: StoreError) -> Self {
        match &error {
            StoreError::NotFound { kind, .. } => Response::message(404, format!("{} not found", kind)),
            StoreError::Validation(validation) => Response::validation(validation),
            StoreError::Unsupported { .. } => Response::message(400, error.to_string()),
            StoreError::KeyExhausted { .. } => Response::message(409, error.to_string()),
            StoreError::Database(_) => {
                log::error!("Storage failure: {}", error);
                Response::message(500, "Internal storage error")
            }
        }
    }
}

/// Validation applied on top of plain decoding for one kind.
#[derive(Clone, Copy, Default)]
struct Checks {
    create: Option<&'static Schema>,
    update: Option<&'static Schema>,
}

/// Handle one request against `store`.
pub async fn dispatch<S>(store: &S, method: Method, path: &str, body: Option<Value>) -> Response
where
    S: ContentStore + ?Sized,
{
    let Some(rest) = path.strip_prefix("/api/") else {
        return Response::not_found();
    };
    let segments: Vec<&str> = rest.trim_end_matches('/').split('/').collect();
    let Some((kind, segments)) = segments.split_first() else {
        return Response::not_found();
    };
    let Ok(kind) = kind.parse::<ContentKind>() else {
        return Response::not_found();
    };
    log::debug!("{} {}", method, path);

    let request = Request { method, segments, body };
    let result = match kind {
        ContentKind::Achievements => {
            let checks = Checks {
                update: Some(&ACHIEVEMENT_PATCH),
                ..Default::default()
            };
            route::<achievement::Model, S>(store, request, checks).await
        }
        ContentKind::Features => {
            let checks = Checks {
                update: Some(&FEATURE_PATCH),
                ..Default::default()
            };
            route::<feature::Model, S>(store, request, checks).await
        }
        ContentKind::Contact => {
            let checks = Checks {
                create: Some(&CONTACT_SUBMISSION),
                ..Default::default()
            };
            route::<contact_submission::Model, S>(store, request, checks).await
        }
        ContentKind::Reviews => route::<review::Model, S>(store, request, Checks::default()).await,
        ContentKind::WorkshopTestimonials => {
            route::<workshop_testimonial::Model, S>(store, request, Checks::default()).await
        }
        ContentKind::Performers => route::<performer::Model, S>(store, request, Checks::default()).await,
        ContentKind::Services => route::<service::Model, S>(store, request, Checks::default()).await,
        ContentKind::Gallery => route::<gallery_item::Model, S>(store, request, Checks::default()).await,
        ContentKind::Testimonials => route::<testimonial::Model, S>(store, request, Checks::default()).await,
        ContentKind::Acts => route::<act::Model, S>(store, request, Checks::default()).await,
        ContentKind::Media => route::<media_item::Model, S>(store, request, Checks::default()).await,
        ContentKind::News => route::<news_post::Model, S>(store, request, Checks::default()).await,
    };

    result.unwrap_or_else(Response::from)
}

struct Request<'a> {
    method: Method,
    segments: &'a [&'a str],
    body: Option<Value>,
}

async fn route<M, S>(store: &S, request: Request<'_>, checks: Checks) -> StoreResult<Response>
where
    M: Record,
    S: Repository<M> + ?Sized,
{
    let Request { method, segments, body } = request;

    match (method, segments) {
        (Method::Get, []) => Ok(Response::json(200, &store.get_all_visible().await?)),
        (Method::Get, ["manage"]) => Ok(Response::json(200, &store.get_all().await?)),
        (Method::Get, ["category", category]) => {
            Ok(Response::json(200, &store.get_visible_in_category(category).await?))
        }
        (Method::Get, [id]) => {
            let Some(key) = parse_key::<M>(id) else {
                return Ok(Response::not_found());
            };
            match store.get(&key).await? {
                Some(record) => Ok(Response::json(200, &record)),
                None => Err(StoreError::not_found(M::KIND, &key)),
            }
        }
        (Method::Post, []) => {
            if let Some(schema) = checks.create {
                schema.check(body.as_ref().unwrap_or(&Value::Null))?;
            }
            let draft = validation::decode::<M::Draft>(body)?;
            let record = store.create(draft).await?;
            Ok(Response::json(201, &record))
        }
        (Method::Patch, [id]) => {
            let Some(key) = parse_key::<M>(id) else {
                return Ok(Response::not_found());
            };
            if let Some(schema) = checks.update {
                schema.check(body.as_ref().unwrap_or(&Value::Null))?;
            }
            let draft = validation::decode::<M::Draft>(body)?;
            Ok(Response::json(200, &store.update(&key, draft).await?))
        }
        (Method::Patch, [id, "toggle"]) => {
            let Some(key) = parse_key::<M>(id) else {
                return Ok(Response::not_found());
            };
            let active = body
                .as_ref()
                .and_then(|body| body.get("active"))
                .and_then(Value::as_bool)
                .ok_or_else(|| ValidationError::single("active", "Expected boolean"))?;
            Ok(Response::json(200, &ordering::set_active(store, &key, active).await?))
        }
        (Method::Patch, [id, action @ ("move-up" | "move-down")]) => {
            let Some(key) = parse_key::<M>(id) else {
                return Ok(Response::not_found());
            };
            let direction = if *action == "move-up" { Direction::Up } else { Direction::Down };
            Ok(Response::json(200, &ordering::move_record(store, &key, direction).await?))
        }
        (Method::Delete, [id]) => {
            let Some(key) = parse_key::<M>(id) else {
                return Ok(Response::not_found());
            };
            if store.delete(&key).await? {
                Ok(Response::message(200, format!("{} deleted successfully", M::KIND)))
            } else {
                Err(StoreError::not_found(M::KIND, &key))
            }
        }
        _ => Ok(Response::not_found()),
    }
}

fn parse_key<M: Record>(segment: &str) -> Option<M::Key> {
    segment.parse::<M::Key>().ok()
}
