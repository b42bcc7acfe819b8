use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    test,
    web::Data,
};
use serde_json::Value;

use crate::{auth::jwt::TokenIssuer, routes, store::memory::MemoryStore};

pub const TEST_SECRET: &str = "test-secret";

/// The API routes backed by the given in-memory store.
pub fn test_app(
    store: Data<MemoryStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(store)
        .app_data(Data::new(TokenIssuer::new(TEST_SECRET)))
        .configure(|cfg| routes::configure::<MemoryStore>(cfg, "/api"))
}

pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}
