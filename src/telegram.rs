use crate::config::Config;
use crate::i18n::{LanguageRegistry, BOT_STRINGS};
use crate::router::Router;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Telegram webhook types
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[allow(dead_code)]
    pub r#type: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
    parse_mode: String,
}

/// Escape all MarkdownV2 special characters (and the backslash itself).
///
/// Reference: https://core.telegram.org/bots/api#markdownv2-style
pub fn escape_markdownv2(text: &str) -> String {
    let special_chars = [
        '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
        '!',
    ];

    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Split a bot command into its name and optional argument.
///
/// Handles the `/cmd@BotName` form Telegram uses in group chats. Returns
/// `None` for plain text.
fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let (head, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    };
    let command = head.split('@').next().unwrap_or(head);
    let arg = if rest.is_empty() { None } else { Some(rest) };

    Some((command, arg))
}

/// Bullet list of the languages users may pick, pre-escaped.
fn language_options() -> String {
    let registry = LanguageRegistry::get();
    registry
        .list_all()
        .iter()
        .map(|lang| {
            format!(
                "/lang {} \\- {}",
                lang.code,
                escape_markdownv2(&registry.display_name(lang.code))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Work out the reply for one incoming text message.
pub async fn build_reply(router: &Router, user_id: i64, text: &str) -> String {
    let Some((command, arg)) = parse_command(text) else {
        return translate_reply(router, user_id, text).await;
    };

    let registry = LanguageRegistry::get();

    match command {
        "/start" => BOT_STRINGS.welcome.to_string(),
        "/help" => BOT_STRINGS.help.to_string(),
        "/lang" => match arg {
            Some(code) => {
                let code = code.to_lowercase();
                if registry.is_supported(&code) {
                    router.preferences().set_preference(user_id, &code);
                    info!("User {} set target language to {}", user_id, code);
                    BOT_STRINGS
                        .language_changed
                        .replace("{language}", &escape_markdownv2(&registry.display_name(&code)))
                } else {
                    warn!("User {} tried to set invalid language: {}", user_id, code);
                    BOT_STRINGS
                        .language_invalid
                        .replace("{code}", &escape_markdownv2(&code))
                        .replace("{options}", &language_options())
                }
            }
            None => {
                let current = router.preferences().get_preference(user_id);
                BOT_STRINGS
                    .language_current
                    .replace("{current}", &escape_markdownv2(&registry.display_name(&current)))
            }
        },
        _ => BOT_STRINGS.unknown_command.to_string(),
    }
}

async fn translate_reply(router: &Router, user_id: i64, text: &str) -> String {
    match router.route_detailed(text, user_id).await {
        Ok(routed) => {
            info!(
                "Translated message for user {} from {} to {}",
                user_id, routed.pair.source, routed.pair.target
            );
            let mut reply = BOT_STRINGS
                .translation_reply
                .replace("{target}", &escape_markdownv2(&routed.pair.target.to_uppercase()))
                .replace("{original}", &escape_markdownv2(text))
                .replace("{translated}", &escape_markdownv2(&routed.translated));

            if routed.used_fallback() {
                let registry = LanguageRegistry::get();
                let notice = BOT_STRINGS
                    .translation_fallback_notice
                    .replace("{preferred}", &escape_markdownv2(&registry.display_name(&routed.preferred)))
                    .replace("{target}", &escape_markdownv2(&registry.display_name(&routed.pair.target)));
                reply.push_str("\n\n");
                reply.push_str(&notice);
            }

            reply
        }
        Err(e) => {
            warn!("Translation error for user {}: {}", user_id, e);
            BOT_STRINGS.translation_failed.to_string()
        }
    }
}

pub async fn handle_webhook(config: &Config, router: &Router, update: Update) -> Result<()> {
    let message = match update.message {
        Some(msg) => msg,
        None => return Ok(()), // Not a message update, ignore
    };

    let text = match message.text {
        Some(t) => t,
        None => return Ok(()), // No text, ignore
    };

    let chat_id = message.chat.id;
    let user_id = message.from.as_ref().map(|u| u.id).unwrap_or(chat_id);

    info!("Received message from {} in chat {}", user_id, chat_id);

    let reply = build_reply(router, user_id, &text).await;
    send_message(config, chat_id, &reply).await
}

pub async fn send_message(config: &Config, chat_id: i64, text: &str) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!(
        "{}/bot{}/sendMessage",
        config.telegram_api_url.trim_end_matches('/'),
        config.telegram_bot_token
    );

    let request = SendMessageRequest {
        chat_id: chat_id.to_string(),
        text: text.to_string(),
        parse_mode: "MarkdownV2".to_string(),
    };

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to Telegram API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Telegram API error ({}): {}", status, body);
    }

    Ok(())
}
