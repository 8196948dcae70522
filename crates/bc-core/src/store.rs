use bc_storage::{
    ACCOUNTS_KEY, CHANNELS_KEY, CRYPTO_BOXES_KEY, KvStore, LOGS_KEY, SETTINGS_KEY, load_json,
    save_json,
};
use bc_types::{
    Account, Channel, CryptoBoxClaim, LogEntry, LogStatus, NewAccount, NewChannel, NewCryptoBox,
    NewLogEntry, Settings, SettingsPatch, WizardStep,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::ids::new_id;
use crate::messages;
use crate::notify::Notifier;
use crate::wizard::derive_step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    NoActiveAccounts,
    NoActiveChannels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoringOutcome {
    Started,
    Stopped,
    Blocked(BlockReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub active_accounts: usize,
    pub total_accounts: usize,
    pub active_channels: usize,
    pub total_channels: usize,
    pub running: bool,
    pub claims: usize,
}

/// Owner of all claimer state.
///
/// Every mutator applies its change, writes the touched storage key, then
/// re-derives the wizard step when the account or channel count moved.
/// Storage writes never fail the operation; errors are logged and dropped.
pub struct AppStore<S, N, C = SystemClock> {
    storage: S,
    notifier: N,
    clock: C,
    config: StoreConfig,
    step: WizardStep,
    accounts: Vec<Account>,
    channels: Vec<Channel>,
    logs: Vec<LogEntry>,
    claims: Vec<CryptoBoxClaim>,
    settings: Settings,
    running: bool,
}

impl<S, N> AppStore<S, N, SystemClock>
where
    S: KvStore,
    N: Notifier,
{
    /// Opens with the system clock and retention caps from the environment.
    pub fn open(storage: S, notifier: N) -> Self {
        Self::with_parts(storage, notifier, SystemClock, StoreConfig::from_env())
    }
}

impl<S, N, C> AppStore<S, N, C>
where
    S: KvStore,
    N: Notifier,
    C: Clock,
{
    /// Restores every key independently, then derives the starting step.
    pub fn with_parts(storage: S, notifier: N, clock: C, config: StoreConfig) -> Self {
        let accounts: Vec<Account> = restore(&storage, ACCOUNTS_KEY);
        let channels: Vec<Channel> = restore(&storage, CHANNELS_KEY);
        let settings: Settings = restore(&storage, SETTINGS_KEY);
        let mut logs: Vec<LogEntry> = restore(&storage, LOGS_KEY);
        let mut claims: Vec<CryptoBoxClaim> = restore(&storage, CRYPTO_BOXES_KEY);
        logs.truncate(config.log_retention);
        claims.truncate(config.claim_retention);

        let step = derive_step(WizardStep::Welcome, accounts.len(), channels.len());
        info!(
            "restored {} accounts, {} channels, {} logs, {} claims; starting at {}",
            accounts.len(),
            channels.len(),
            logs.len(),
            claims.len(),
            step
        );

        Self {
            storage,
            notifier,
            clock,
            config,
            step,
            accounts,
            channels,
            logs,
            claims,
            settings,
            running: false,
        }
    }

    // ── Accessors ──

    pub fn wizard_step(&self) -> WizardStep {
        self.step
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Newest first.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Newest first.
    pub fn claims(&self) -> &[CryptoBoxClaim] {
        &self.claims
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn logs_with_status(&self, status: LogStatus) -> Vec<&LogEntry> {
        self.logs.iter().filter(|log| log.status == status).collect()
    }

    pub fn account_name(&self, account_id: &str) -> Option<&str> {
        self.accounts
            .iter()
            .find(|account| account.id == account_id)
            .map(|account| account.name.as_str())
    }

    pub fn status_summary(&self) -> StatusSummary {
        StatusSummary {
            active_accounts: self.accounts.iter().filter(|a| a.is_active).count(),
            total_accounts: self.accounts.len(),
            active_channels: self.channels.iter().filter(|c| c.is_active).count(),
            total_channels: self.channels.len(),
            running: self.running,
            claims: self.claims.len(),
        }
    }

    // ── Wizard ──

    pub fn set_wizard_step(&mut self, step: WizardStep) {
        debug!("wizard step {} -> {}", self.step, step);
        self.step = step;
    }

    // ── Accounts ──

    pub fn add_account(&mut self, new: NewAccount) -> Account {
        let account = Account {
            id: new_id("account"),
            name: new.name,
            api_key: new.api_key,
            secret_key: new.secret_key,
            is_active: new.is_active,
        };
        self.accounts.push(account.clone());
        self.persist(ACCOUNTS_KEY, &self.accounts);
        self.rederive();
        self.notifier
            .notify(messages::account_added(self.settings.language, &account.name));
        account
    }

    /// Confirms removal even when `id` matched nothing; the return value tells the caller.
    pub fn remove_account(&mut self, id: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        let removed = self.accounts.len() != before;
        self.persist(ACCOUNTS_KEY, &self.accounts);
        if removed {
            self.rederive();
        } else {
            debug!("remove_account: no account with id {}", id);
        }
        self.notifier
            .notify(messages::account_removed(self.settings.language));
        removed
    }

    pub fn toggle_account_active(&mut self, id: &str) -> Option<bool> {
        let account = self.accounts.iter_mut().find(|account| account.id == id)?;
        account.is_active = !account.is_active;
        let is_active = account.is_active;
        self.persist(ACCOUNTS_KEY, &self.accounts);
        Some(is_active)
    }

    // ── Channels ──

    pub fn add_channel(&mut self, new: NewChannel) -> Channel {
        let channel = Channel {
            id: new_id("channel"),
            name: new.name,
            url: new.url,
            is_active: new.is_active,
        };
        self.channels.push(channel.clone());
        self.persist(CHANNELS_KEY, &self.channels);
        self.rederive();
        self.notifier
            .notify(messages::channel_added(self.settings.language, &channel.name));
        channel
    }

    pub fn remove_channel(&mut self, id: &str) -> bool {
        let before = self.channels.len();
        self.channels.retain(|channel| channel.id != id);
        let removed = self.channels.len() != before;
        self.persist(CHANNELS_KEY, &self.channels);
        if removed {
            self.rederive();
        } else {
            debug!("remove_channel: no channel with id {}", id);
        }
        self.notifier
            .notify(messages::channel_removed(self.settings.language));
        removed
    }

    pub fn toggle_channel_active(&mut self, id: &str) -> Option<bool> {
        let channel = self.channels.iter_mut().find(|channel| channel.id == id)?;
        channel.is_active = !channel.is_active;
        let is_active = channel.is_active;
        self.persist(CHANNELS_KEY, &self.channels);
        Some(is_active)
    }

    // ── Activity log ──

    pub fn add_log(&mut self, new: NewLogEntry) -> LogEntry {
        let entry = LogEntry {
            id: new_id("log"),
            timestamp: self.clock.now_epoch_ms(),
            message: new.message,
            status: new.status,
            account_id: new.account_id,
            channel_id: new.channel_id,
        };
        self.logs.insert(0, entry.clone());
        self.logs.truncate(self.config.log_retention);
        self.persist(LOGS_KEY, &self.logs);

        let language = self.settings.language;
        match entry.status {
            LogStatus::Success => self
                .notifier
                .notify(messages::log_success(language, &entry.message)),
            LogStatus::Error => self
                .notifier
                .notify(messages::log_error(language, &entry.message)),
            LogStatus::Info => {}
        }
        entry
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
        self.persist(LOGS_KEY, &self.logs);
    }

    // ── Settings ──

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Settings {
        self.settings.apply(patch);
        self.persist(SETTINGS_KEY, &self.settings);
        self.settings
    }

    // ── Monitoring ──

    /// Flips monitoring unconditionally. Returns the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!("monitoring running={}", self.running);

        let language = self.settings.language;
        self.add_log(NewLogEntry::new(
            messages::monitoring_log(language, self.running),
            LogStatus::Info,
        ));
        self.notifier
            .notify(messages::monitoring_toggled(language, self.running));
        self.running
    }

    /// Dashboard start/stop: starting needs an active account and an active channel.
    pub fn request_monitoring_toggle(&mut self) -> MonitoringOutcome {
        if !self.running {
            let language = self.settings.language;
            let blocked = if !self.accounts.iter().any(|a| a.is_active) {
                Some((BlockReason::NoActiveAccounts, messages::no_active_accounts(language)))
            } else if !self.channels.iter().any(|c| c.is_active) {
                Some((BlockReason::NoActiveChannels, messages::no_active_channels(language)))
            } else {
                None
            };
            if let Some((reason, message)) = blocked {
                self.add_log(NewLogEntry::new(message, LogStatus::Error));
                return MonitoringOutcome::Blocked(reason);
            }
        }

        if self.toggle_running() {
            MonitoringOutcome::Started
        } else {
            MonitoringOutcome::Stopped
        }
    }

    // ── Claims ──

    /// Records a claim, then always writes one success log and one claim toast.
    pub fn add_crypto_box(&mut self, new: NewCryptoBox) -> CryptoBoxClaim {
        let amount = if new.amount.is_finite() && new.amount > 0.0 {
            new.amount
        } else {
            0.0
        };
        let claim = CryptoBoxClaim {
            id: new_id("box"),
            timestamp: self.clock.now_epoch_ms(),
            coin_name: new.coin_name,
            amount,
            account_id: new.account_id,
        };
        self.claims.insert(0, claim.clone());
        self.claims.truncate(self.config.claim_retention);
        self.persist(CRYPTO_BOXES_KEY, &self.claims);

        let language = self.settings.language;
        self.add_log(
            NewLogEntry::new(
                messages::claim_log(language, &claim.coin_name, claim.amount),
                LogStatus::Success,
            )
            .for_account(claim.account_id.clone()),
        );
        self.notifier.notify(messages::claim_received(
            language,
            &claim.coin_name,
            claim.amount,
        ));
        claim
    }

    // ── Internals ──

    fn rederive(&mut self) {
        let next = derive_step(self.step, self.accounts.len(), self.channels.len());
        if next != self.step {
            debug!("wizard step derived {} -> {}", self.step, next);
            self.step = next;
        }
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = save_json(&self.storage, key, value) {
            warn!("failed to persist `{}`: {}", key, err);
        }
    }
}

fn restore<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KvStore,
{
    match load_json(storage, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            warn!("discarding stored `{}`: {}", key, err);
            T::default()
        }
    }
}
