#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reminder_push_dispatcher::start_web_server().await
}
