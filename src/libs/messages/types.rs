/// All user-facing message variants.
///
/// Message text lives in the `Display` implementation (`display.rs`); code
/// refers to variants only, so wording changes never touch call sites.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModulePontomais,
    PontomaisConfigMissing,
    PromptLogin,
    PromptApiUrl,
    PromptPassword,

    // === SESSION MESSAGES ===
    SessionCleared,
    SessionExpiredRetrying,
    TooManyLoginAttempts(i32),

    // === API MESSAGES ===
    LoginFailed(String),           // HTTP status
    WorkDaysRequestFailed(String), // HTTP status
}
