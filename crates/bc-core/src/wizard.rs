use bc_types::WizardStep;

/// Step the store should show after the account or channel count changed.
///
/// Missing accounts send the user back to the start, missing channels to
/// channel setup. A fully configured user still on `welcome` lands on the
/// dashboard. Any other step is left alone.
pub fn derive_step(current: WizardStep, accounts: usize, channels: usize) -> WizardStep {
    if accounts == 0 {
        WizardStep::Welcome
    } else if channels == 0 {
        WizardStep::ChannelSetup
    } else if current == WizardStep::Welcome {
        WizardStep::Dashboard
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WizardStep; 4] = [
        WizardStep::Welcome,
        WizardStep::AccountSetup,
        WizardStep::ChannelSetup,
        WizardStep::Dashboard,
    ];

    #[test]
    fn no_accounts_forces_welcome() {
        for step in ALL {
            assert_eq!(derive_step(step, 0, 0), WizardStep::Welcome);
            assert_eq!(derive_step(step, 0, 3), WizardStep::Welcome);
        }
    }

    #[test]
    fn no_channels_forces_channel_setup() {
        for step in ALL {
            assert_eq!(derive_step(step, 1, 0), WizardStep::ChannelSetup);
        }
    }

    #[test]
    fn complete_setup_leaves_welcome_only() {
        assert_eq!(derive_step(WizardStep::Welcome, 1, 1), WizardStep::Dashboard);
        assert_eq!(
            derive_step(WizardStep::AccountSetup, 2, 1),
            WizardStep::AccountSetup
        );
        assert_eq!(
            derive_step(WizardStep::ChannelSetup, 1, 2),
            WizardStep::ChannelSetup
        );
        assert_eq!(derive_step(WizardStep::Dashboard, 1, 1), WizardStep::Dashboard);
    }
}
