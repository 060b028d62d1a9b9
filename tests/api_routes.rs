mod common;

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::json;
    use uuid::Uuid;

    use super::common::{adapter, StubProvider};
    use yasik::api::models::{SessionView, TurnResponse};
    use yasik::chat::persona::{DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER};
    use yasik::chat::SessionRegistry;
    use yasik::llm::models::Role;

    macro_rules! app {
        ($registry:expr, $provider:expr) => {
            test::init_service(
                App::new()
                    .app_data($registry.clone())
                    .app_data(web::Data::new(adapter($provider)))
                    .configure(yasik::api::routes::configure),
            )
            .await
        };
    }

    fn registry() -> web::Data<SessionRegistry> {
        web::Data::new(SessionRegistry::new(DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER))
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(registry(), StubProvider::replying(&[]));
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_session_lifecycle() {
        let registry = registry();
        let app = app!(registry, StubProvider::replying(&[]));

        let resp = test::call_service(&app, test::TestRequest::post().uri("/sessions").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: SessionView = test::read_body_json(resp).await;
        assert_eq!(created.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(created.messages.is_empty());

        let ids: Vec<Uuid> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/sessions").to_request(),
        )
        .await;
        assert_eq!(ids, vec![created.id]);

        let uri = format!("/sessions/{}", created.id);
        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(registry.len().await, 0);
    }

    #[actix_web::test]
    async fn test_submit_question_and_prompt_command() {
        let registry = registry();
        let app = app!(registry, StubProvider::replying(&["떡볶이를 추천합니다"]));
        let (id, _) = registry.create().await;
        let uri = format!("/sessions/{}/messages", id);

        let turn: TurnResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::post().uri(&uri).set_json(json!({"text": "system: 매운 음식만"})).to_request(),
        )
        .await;
        assert!(matches!(turn, TurnResponse::PromptReplaced { ref system_prompt } if system_prompt == "매운 음식만"));

        let turn: TurnResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::post().uri(&uri).set_json(json!({"text": "매콤한 야식 추천해줘"})).to_request(),
        )
        .await;
        assert!(matches!(turn, TurnResponse::Reply { ref content, failed: false } if content == "떡볶이를 추천합니다"));

        let view: SessionView = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&format!("/sessions/{}", id)).to_request(),
        )
        .await;
        assert_eq!(view.system_prompt, "매운 음식만");
        let roles: Vec<Role> = view.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[actix_web::test]
    async fn test_blank_submission_is_bad_request() {
        let registry = registry();
        let app = app!(registry, StubProvider::replying(&[]));
        let (id, _) = registry.create().await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/sessions/{}/messages", id))
                .set_json(json!({"text": "   "}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_session_is_not_found() {
        let app = app!(registry(), StubProvider::replying(&[]));
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/sessions/{}/messages", Uuid::new_v4()))
                .set_json(json!({"text": "hi"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_system_prompt_form_route() {
        let registry = registry();
        let app = app!(registry, StubProvider::replying(&[]));
        let (id, _) = registry.create().await;
        let uri = format!("/sessions/{}/system_prompt", id);

        let view: SessionView = test::call_and_read_body_json(
            &app,
            test::TestRequest::put().uri(&uri).set_json(json!({"text": ""})).to_request(),
        )
        .await;
        assert_eq!(view.system_prompt, FORM_PLACEHOLDER);

        let view: SessionView = test::call_and_read_body_json(
            &app,
            test::TestRequest::put().uri(&uri).set_json(json!({"text": "국물 요리 위주"})).to_request(),
        )
        .await;
        assert_eq!(view.system_prompt, "국물 요리 위주");
    }

    #[actix_web::test]
    async fn test_sessions_are_isolated() {
        let registry = registry();
        let app = app!(registry, StubProvider::replying(&["답"]));
        let (first, _) = registry.create().await;
        let (second, _) = registry.create().await;

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/sessions/{}/messages", first))
                .set_json(json!({"text": "prompt: 첫 세션"}))
                .to_request(),
        )
        .await;
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/sessions/{}/messages", first))
                .set_json(json!({"text": "질문"}))
                .to_request(),
        )
        .await;

        let view: SessionView = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&format!("/sessions/{}", second)).to_request(),
        )
        .await;
        assert_eq!(view.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(view.messages.is_empty());
    }
}
