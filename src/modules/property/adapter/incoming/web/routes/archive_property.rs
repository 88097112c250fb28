use actix_web::{post, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[post("/api/properties/{id:\\d+}/delete")]
pub async fn delete_property_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.archive.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[post("/api/properties/{id:\\d+}/restore")]
pub async fn restore_property_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.archive.restore(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_property;

    #[actix_web::test]
    async fn test_delete_then_restore() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let property = store.insert_property(seeded_property("GZ-TH-001"));

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(delete_property_handler)
                .service(restore_property_handler),
        )
        .await;

        let delete_uri = format!("/api/properties/{}/delete", property.id);
        let req = test::TestRequest::post().uri(&delete_uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(store.property(property.id).unwrap().is_deleted);

        let req = test::TestRequest::post().uri(&delete_uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri(&format!("/api/properties/{}/restore", property.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(!store.property(property.id).unwrap().is_deleted);
    }
}
