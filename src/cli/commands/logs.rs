use anyhow::Context;

use super::admin_client;
use crate::config::Config;
use crate::db::LoginLog;

pub(super) fn print_login_logs(logs: &[LoginLog]) {
    if logs.is_empty() {
        println!("No login attempts recorded.");
        return;
    }

    println!("Login attempts ({} total)", logs.len());
    println!("{:-<70}", "");

    for log in logs {
        let outcome = if log.success { "ok    " } else { "failed" };
        println!(
            "{} {} {} from {} ({})",
            log.timestamp,
            outcome,
            log.email,
            log.ip.as_deref().unwrap_or("unknown"),
            log.user_agent
        );
    }
}

pub async fn cmd_logs(config: &Config) -> anyhow::Result<()> {
    let logs = admin_client(config)?
        .list_logs()
        .await
        .context("Failed to fetch logs")?;

    print_login_logs(&logs);
    Ok(())
}
