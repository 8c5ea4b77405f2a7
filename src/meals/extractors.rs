use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use tracing::debug;

use super::dto::AddMealForm;

/// Reads the add form from either a URL-encoded or a multipart body.
///
/// Never rejects: a body that can't be read yields an empty form, which the
/// handler then drops as incomplete.
pub struct MealSubmission(pub AddMealForm);

#[async_trait]
impl<S> FromRequest<S> for MealSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("multipart/form-data"))
            .unwrap_or(false);

        let fields = if is_multipart {
            multipart_fields(req, state).await
        } else {
            match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(e) => {
                    debug!(error = %e, "unreadable form body");
                    Vec::new()
                }
            }
        };
        Ok(MealSubmission(AddMealForm::from_fields(fields)))
    }
}

/// Text fields of a multipart body, in order. File uploads are skipped.
async fn multipart_fields<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    let mut mp = match Multipart::from_request(req, state).await {
        Ok(mp) => mp,
        Err(e) => {
            debug!(error = %e, "unreadable multipart body");
            return Vec::new();
        }
    };

    let mut fields = Vec::new();
    while let Ok(Some(field)) = mp.next_field().await {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(e) => {
                debug!(error = %e, "multipart field could not be read");
                break;
            }
        }
    }
    fields
}
