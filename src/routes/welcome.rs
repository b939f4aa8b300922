pub const WELCOME_MESSAGE: &str = "Welcome to Azure Functions!";

/// Liveness stub, answers on `GET /` and `POST /`.
pub async fn get_welcome() -> &'static str {
    info!("Processed a request in get_welcome");
    WELCOME_MESSAGE
}
