/// User-facing bot messages.
///
/// NOTE: These strings are pre-escaped for Telegram MarkdownV2 format.
/// Values substituted into placeholders must be escaped with
/// `escape_markdownv2()` before substitution.
#[derive(Debug, Clone)]
pub struct BotStrings {
    // ==================== Welcome/Help Messages ====================
    /// Greeting for /start, in all three offered languages
    pub welcome: &'static str,

    /// Command list for /help
    pub help: &'static str,

    // ==================== Language Command Messages ====================
    /// Reply to /lang without an argument
    /// Placeholders: {current}
    pub language_current: &'static str,

    /// Reply after a successful /lang <code>
    /// Placeholders: {language}
    pub language_changed: &'static str,

    /// Reply to /lang with a code outside the registry
    /// Placeholders: {code}, {options}
    pub language_invalid: &'static str,

    // ==================== Translation Messages ====================
    /// Reply carrying a translation
    /// Placeholders: {target}, {translated}, {original}
    pub translation_reply: &'static str,

    /// Appended to a translation when the text was already in the user's
    /// target language and went to the fallback language instead
    /// Placeholders: {preferred}, {target}
    pub translation_fallback_notice: &'static str,

    /// Reply when detection or the backend failed
    pub translation_failed: &'static str,

    // ==================== Other Messages ====================
    /// Reply for commands the bot does not know
    pub unknown_command: &'static str,
}

pub const BOT_STRINGS: BotStrings = BotStrings {
    welcome: "*Kannada ↔ Hindi ↔ English Translation Bot*\n\n\
Hello\\! Send me a message to translate\\.\n\
ನಮಸ್ಕಾರ\\! ಭಾಷಾಂತರಿಸಲು ನನಗೆ ಸಂದೇಶ ಕಳುಹಿಸಿ\\.\n\
नमस्ते\\! अनुवाद करने के लिए मुझे एक संदेश भेजें।\n\n\
Type /help for commands\\.",

    help: "*Kannada ↔ Hindi ↔ English Translation Bot*\n\n\
*Commands:*\n\
/lang \\<code\\> \\- Set your output language \\(kn, hi, en\\)\n\
/lang \\- Show your current output language\n\
/start \\- Welcome message\n\
/help \\- This message\n\n\
Just send a message to translate\\!\n\
Messages already in your output language are translated to the fallback language instead\\.",

    language_current: "🌐 Your current target language is: {current}\n\n\
Use /lang \\<code\\> to change it\\.",

    language_changed: "✅ Your target language has been set to: {language}",

    language_invalid: "Invalid language code {code}\\. Available options:\n{options}",

    translation_reply: "*Translated* \\({target}\\):\n_{translated}_\n\n*Original*:\n{original}",

    translation_fallback_notice: "ℹ️ Your message was already in {preferred}, so it was translated to {target}\\.",

    translation_failed: "⚠️ Sorry, translation failed\\. Try again later\\.",

    unknown_command: "Unknown command\\. Use /help to see available commands\\.",
};
