use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::user::application::domain::entities::UserPatch;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

// `status` is not accepted here; see the status route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    #[serde(default)]
    pub username: PatchField<String>,
    #[serde(default)]
    pub password: PatchField<String>,
    #[serde(default)]
    pub email: PatchField<String>,
    #[serde(default)]
    pub phone: PatchField<String>,
    #[serde(default)]
    pub real_name: PatchField<String>,
    #[serde(default)]
    pub id_card: PatchField<String>,
    #[serde(default)]
    pub gender: PatchField<String>,
    #[serde(default)]
    pub avatar_url: PatchField<String>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(req: PatchUserRequest) -> Self {
        UserPatch {
            username: req.username,
            password: req.password,
            email: req.email,
            phone: req.phone,
            real_name: req.real_name,
            id_card: req.id_card,
            gender: req.gender,
            avatar_url: req.avatar_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/users/{id:\\d+}/update")]
pub async fn patch_user_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<PatchUserRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.user.patch.execute(id, payload.into_inner().into()).await {
        Ok(outcome) => ApiResponse::success(outcome.summary()),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::user::application::domain::entities::User;
    use crate::modules::user::application::ports::incoming::use_cases::PatchUserUseCase;
    use crate::shared::patch::{GuardError, PatchOutcome};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_user;

    #[derive(Clone)]
    struct FailingPatchUser;

    #[async_trait]
    impl PatchUserUseCase for FailingPatchUser {
        async fn execute(
            &self,
            _id: i32,
            _patch: UserPatch,
        ) -> Result<PatchOutcome<User>, GuardError> {
            Err(GuardError::Internal("connection reset".to_string()))
        }
    }

    async fn call(builder: TestAppStateBuilder, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(patch_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_empty_body_is_noop() {
        let builder = TestAppStateBuilder::default();
        let user = builder
            .store()
            .insert_user(seeded_user("carol03", "110101199001011236"));

        let (status, body) = call(builder, &format!("/api/users/{}/update", user.id), json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], user.id);
        assert_eq!(body["data"]["affectedRows"], 0);
        assert_eq!(body["data"]["updatedFields"], json!([]));
    }

    #[actix_web::test]
    async fn test_updated_fields_are_reported() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let user = store.insert_user(seeded_user("carol03", "110101199001011236"));

        let (status, body) = call(
            builder,
            &format!("/api/users/{}/update", user.id),
            json!({ "realName": " Caroline ", "avatarUrl": null, "username": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["affectedRows"], 1);
        assert_eq!(body["data"]["updatedFields"], json!(["realName", "avatarUrl"]));

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.real_name.as_deref(), Some("Caroline"));
        assert!(stored.avatar_url.is_none());
        assert_eq!(stored.username, "carol03");
    }

    #[actix_web::test]
    async fn test_unknown_user_is_404() {
        let (status, body) = call(
            TestAppStateBuilder::default(),
            "/api/users/999/update",
            json!({ "phone": "not-a-phone" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_store_failure_is_500() {
        let builder = TestAppStateBuilder::default().with_patch_user(FailingPatchUser);

        let (status, body) = call(builder, "/api/users/1/update", json!({ "realName": "x" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
