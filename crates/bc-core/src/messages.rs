//! User-facing text, keyed by the settings language.

use bc_types::{Language, Notification, Severity};

fn pick(language: Language, ru: &str, en: &str) -> String {
    match language {
        Language::Ru => ru.to_owned(),
        Language::En => en.to_owned(),
    }
}

fn toast(title: String, description: String, severity: Severity) -> Notification {
    Notification {
        title,
        description,
        severity,
    }
}

pub fn account_added(language: Language, name: &str) -> Notification {
    toast(
        pick(language, "Аккаунт добавлен", "Account added"),
        match language {
            Language::Ru => format!("{name} успешно добавлен"),
            Language::En => format!("{name} was added"),
        },
        Severity::Default,
    )
}

pub fn account_removed(language: Language) -> Notification {
    toast(
        pick(language, "Аккаунт удален", "Account removed"),
        pick(
            language,
            "Аккаунт успешно удален из системы",
            "The account was removed",
        ),
        Severity::Default,
    )
}

pub fn channel_added(language: Language, name: &str) -> Notification {
    toast(
        pick(language, "Канал добавлен", "Channel added"),
        match language {
            Language::Ru => format!("{name} успешно добавлен"),
            Language::En => format!("{name} was added"),
        },
        Severity::Default,
    )
}

pub fn channel_removed(language: Language) -> Notification {
    toast(
        pick(language, "Канал удален", "Channel removed"),
        pick(
            language,
            "Канал успешно удален из системы",
            "The channel was removed",
        ),
        Severity::Default,
    )
}

pub fn log_success(language: Language, message: &str) -> Notification {
    toast(
        pick(language, "Успешно", "Success"),
        message.to_owned(),
        Severity::Default,
    )
}

pub fn log_error(language: Language, message: &str) -> Notification {
    toast(
        pick(language, "Ошибка", "Error"),
        message.to_owned(),
        Severity::Destructive,
    )
}

pub fn monitoring_log(language: Language, running: bool) -> String {
    match (language, running) {
        (Language::Ru, true) => "Мониторинг криптобоксов запущен".to_owned(),
        (Language::Ru, false) => "Мониторинг криптобоксов остановлен".to_owned(),
        (Language::En, true) => "Crypto box monitoring started".to_owned(),
        (Language::En, false) => "Crypto box monitoring stopped".to_owned(),
    }
}

pub fn monitoring_toggled(language: Language, running: bool) -> Notification {
    let (title, description) = match (language, running) {
        (Language::Ru, true) => (
            "Мониторинг запущен",
            "Ваши аккаунты активно проверяют криптобоксы",
        ),
        (Language::Ru, false) => ("Мониторинг остановлен", "Мониторинг приостановлен"),
        (Language::En, true) => (
            "Monitoring started",
            "Your accounts are checking for crypto boxes",
        ),
        (Language::En, false) => ("Monitoring stopped", "Monitoring is paused"),
    };
    toast(title.to_owned(), description.to_owned(), Severity::Default)
}

pub fn no_active_accounts(language: Language) -> String {
    pick(
        language,
        "Нет активных аккаунтов для мониторинга",
        "No active accounts for monitoring",
    )
}

pub fn no_active_channels(language: Language) -> String {
    pick(
        language,
        "Нет активных каналов для мониторинга",
        "No active channels for monitoring",
    )
}

pub fn claim_log(language: Language, coin_name: &str, amount: f64) -> String {
    match language {
        Language::Ru => format!("Добыт криптобокс: {coin_name} ({amount})"),
        Language::En => format!("Claimed crypto box: {coin_name} ({amount})"),
    }
}

pub fn claim_received(language: Language, coin_name: &str, amount: f64) -> Notification {
    toast(
        pick(language, "Криптобокс активирован", "Crypto box claimed"),
        match language {
            Language::Ru => format!("{coin_name}: {amount} получено"),
            Language::En => format!("{coin_name}: {amount} received"),
        },
        Severity::Default,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_text_keeps_plain_amount() {
        assert_eq!(
            claim_log(Language::En, "BTC", 0.5),
            "Claimed crypto box: BTC (0.5)"
        );
        assert_eq!(claim_log(Language::Ru, "TON", 12.0), "Добыт криптобокс: TON (12)");
    }

    #[test]
    fn errors_are_destructive() {
        assert_eq!(log_error(Language::En, "boom").severity, Severity::Destructive);
        assert_eq!(log_success(Language::En, "ok").severity, Severity::Default);
    }
}
