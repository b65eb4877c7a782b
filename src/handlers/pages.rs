use crate::db::DatabaseError;
use crate::error::{ApiError, ApiResult};
use crate::models::user::{NewUser, UserForm, UserResponse};
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use tracing::{info, warn};
use validator::Validate;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub users: Vec<UserResponse>,
}

/// Root page listing every user, with a form to add one
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let users = state.users.list().await?;

    let page = IndexTemplate {
        users: users.into_iter().map(UserResponse::from).collect(),
    };

    page.render()
        .map(Html)
        .map_err(|e| ApiError::Internal(format!("Failed to render index page: {}", e)))
}

/// Form submission from the root page; always redirects back to `/`
pub async fn add_user(
    State(state): State<AppState>,
    form: Option<Form<UserForm>>,
) -> ApiResult<Redirect> {
    let Some(Form(form)) = form else {
        warn!("Ignoring user form submission that is not url-encoded");
        return Ok(Redirect::to("/"));
    };

    if form.validate().is_err() {
        warn!("Ignoring incomplete user form submission");
        return Ok(Redirect::to("/"));
    }

    let new_user = NewUser {
        username: form.username,
        email: form.email,
        password_hash: None,
    };

    match state.users.create(new_user).await {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, "User created from form");
        }
        Err(DatabaseError::AlreadyExists(field)) => {
            warn!("Ignoring form submission with duplicate {}", field);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to("/"))
}
