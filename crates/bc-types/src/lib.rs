use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    Welcome,
    AccountSetup,
    ChannelSetup,
    Dashboard,
}

impl WizardStep {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Welcome => "welcome",
            WizardStep::AccountSetup => "account-setup",
            WizardStep::ChannelSetup => "channel-setup",
            WizardStep::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown wizard step: {0}")]
pub struct ParseWizardStepError(pub String);

impl FromStr for WizardStep {
    type Err = ParseWizardStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(WizardStep::Welcome),
            "account-setup" => Ok(WizardStep::AccountSetup),
            "channel-setup" => Ok(WizardStep::ChannelSetup),
            "dashboard" => Ok(WizardStep::Dashboard),
            other => Err(ParseWizardStepError(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log status: {0}")]
pub struct ParseLogStatusError(pub String);

impl FromStr for LogStatus {
    type Err = ParseLogStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(LogStatus::Success),
            "error" => Ok(LogStatus::Error),
            "info" => Ok(LogStatus::Info),
            other => Err(ParseLogStatusError(other.to_owned())),
        }
    }
}

// ── Records ──

/// Exchange account. The secret key is kept as entered; nothing here encrypts it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub secret_key: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub api_key: String,
    pub secret_key: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub url: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewChannel {
    pub name: String,
    pub url: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    /// Unix epoch milliseconds.
    pub timestamp: u64,
    pub message: String,
    pub status: LogStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLogEntry {
    pub message: String,
    pub status: LogStatus,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

impl NewLogEntry {
    pub fn new(message: impl Into<String>, status: LogStatus) -> Self {
        Self {
            message: message.into(),
            status,
            account_id: None,
            channel_id: None,
        }
    }

    pub fn for_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn for_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CryptoBoxClaim {
    pub id: String,
    /// Unix epoch milliseconds.
    pub timestamp: u64,
    pub coin_name: String,
    pub amount: f64,
    pub account_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCryptoBox {
    pub coin_name: String,
    pub amount: f64,
    pub account_id: String,
}

// ── Settings ──

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "enabled")]
    pub sound_enabled: bool,
    #[serde(default)]
    pub vibration_enabled: bool,
    #[serde(default = "enabled")]
    pub notifications_enabled: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Ru,
            sound_enabled: true,
            vibration_enabled: false,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Shallow merge: fields left `None` in the patch keep their current value.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(sound_enabled) = patch.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
        if let Some(vibration_enabled) = patch.vibration_enabled {
            self.vibration_enabled = vibration_enabled;
        }
        if let Some(notifications_enabled) = patch.notifications_enabled {
            self.notifications_enabled = notifications_enabled;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub sound_enabled: Option<bool>,
    #[serde(default)]
    pub vibration_enabled: Option<bool>,
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
}

// ── Notifications ──

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_step_strings_match_view_names() {
        for step in [
            WizardStep::Welcome,
            WizardStep::AccountSetup,
            WizardStep::ChannelSetup,
            WizardStep::Dashboard,
        ] {
            assert_eq!(step.as_str().parse::<WizardStep>(), Ok(step));
            let json = serde_json::to_string(&step).expect("serialize step");
            assert_eq!(json, format!("\"{step}\""));
        }
        assert!("setup".parse::<WizardStep>().is_err());
    }

    #[test]
    fn parses_language_and_status_names() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
        assert_eq!("error".parse::<LogStatus>(), Ok(LogStatus::Error));
        assert_eq!(
            "warn".parse::<LogStatus>(),
            Err(ParseLogStatusError("warn".into()))
        );
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            sound_enabled: Some(false),
            ..SettingsPatch::default()
        });

        assert!(!settings.sound_enabled);
        assert_eq!(settings.language, Language::Ru);
        assert!(!settings.vibration_enabled);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn partial_settings_object_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"language":"en","vibrationEnabled":true}"#).expect("parse");

        assert_eq!(settings.language, Language::En);
        assert!(settings.vibration_enabled);
        assert!(settings.sound_enabled);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn account_uses_camel_case_keys() {
        let account = Account {
            id: "account-1".into(),
            name: "Main".into(),
            api_key: "key".into(),
            secret_key: "secret".into(),
            is_active: true,
        };
        let value = serde_json::to_value(&account).expect("serialize account");
        assert_eq!(value["apiKey"], "key");
        assert_eq!(value["secretKey"], "secret");
        assert_eq!(value["isActive"], true);
    }

    #[test]
    fn log_entry_omits_missing_references() {
        let entry = LogEntry {
            id: "log-1".into(),
            timestamp: 1,
            message: "hello".into(),
            status: LogStatus::Info,
            account_id: None,
            channel_id: Some("channel-1".into()),
        };
        let value = serde_json::to_value(&entry).expect("serialize log");
        assert!(value.get("accountId").is_none());
        assert_eq!(value["channelId"], "channel-1");
        assert_eq!(value["status"], "info");
    }
}
