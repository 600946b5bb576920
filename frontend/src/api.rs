use anyhow::{anyhow, Result};
use common::{
    messages::{ErrorResponse, Snapshot},
    RawMove,
};
use reqwasm::http::{Request, Response};

pub async fn get_board() -> Result<Snapshot> {
    let response = Request::get("/board").send().await?;
    if !response.ok() {
        return Err(anyhow!("Failed to get board: status {}", response.status()));
    }
    Ok(response.json().await?)
}

pub async fn make_move(raw_move: RawMove) -> Result<()> {
    let response = Request::post("/board/move")
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&raw_move)?)
        .send()
        .await?;
    check(response, "Move failed").await
}

pub async fn restart_game() -> Result<()> {
    let response = Request::post("/board/restart").send().await?;
    check(response, "Restart failed").await
}

// Rejections carry an ErrorResponse; fall back to the status code for
// anything else
async fn check(response: Response, context: &str) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(error) => error.message,
        Err(_) => format!("status {}", status),
    };
    Err(anyhow!("{}: {}", context, message))
}
