//! Settings form model: four typed sections, a tab selector, and a reducer.
//!
//! DESIGN
//! ======
//! Every edit is a `SettingsUpdate`, tagged by the section it belongs to and
//! carrying a typed value for exactly one field. `Settings::apply` is the only
//! mutator, so an edit in one section cannot reach another.
//!
//! Saving has no backend: the form serializes itself, logs the JSON, and
//! raises a confirmation notice.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const SAVED_NOTICE: &str = "Settings saved successfully!";

// =============================================================
// Sections
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            bio: "Frontend developer passionate about React and modern web technologies.".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { email_notifications: true, push_notifications: false, weekly_digest: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub language: Language,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub data_sharing: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
    pub privacy: PrivacySettings,
}

// =============================================================
// Select options
// =============================================================

/// A select value that is not one of the listed options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} option '{value}'")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

/// A fixed set of values picked from a `<select>`.
pub trait SelectOption: Copy + PartialEq + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Value used in the `<option value>` and in serialized settings.
    fn as_str(self) -> &'static str;

    /// Text shown to the user.
    fn label(self) -> &'static str;
}

/// Implements `SelectOption`, `FromStr` and `Display` for an option enum.
macro_rules! select_options {
    ($name:ident, $field:literal, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        impl SelectOption for $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <$name as SelectOption>::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == raw)
                    .ok_or_else(|| UnknownOption { field: $field, value: raw.to_owned() })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

select_options!(Theme, "theme", {
    Light => ("light", "Light"),
    Dark => ("dark", "Dark"),
    System => ("system", "System"),
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

select_options!(Language, "language", {
    En => ("en", "English"),
    Es => ("es", "Spanish"),
    Fr => ("fr", "French"),
    De => ("de", "German"),
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Friends,
    Private,
}

select_options!(ProfileVisibility, "profile visibility", {
    Public => ("public", "Public"),
    Friends => ("friends", "Friends Only"),
    Private => ("private", "Private"),
});

// =============================================================
// Tabs
// =============================================================

/// The four mutually exclusive settings panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Appearance,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Appearance,
        SettingsTab::Privacy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Privacy => "Privacy",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            SettingsTab::Profile => "icon icon--user",
            SettingsTab::Notifications => "icon icon--bell",
            SettingsTab::Appearance => "icon icon--palette",
            SettingsTab::Privacy => "icon icon--shield",
        }
    }
}

// =============================================================
// Updates
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name(String),
    Email(String),
    Bio(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationField {
    EmailNotifications(bool),
    PushNotifications(bool),
    WeeklyDigest(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppearanceField {
    Theme(Theme),
    Language(Language),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivacyField {
    ProfileVisibility(ProfileVisibility),
    DataSharing(bool),
}

/// One field edit, tagged by the section it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsUpdate {
    Profile(ProfileField),
    Notifications(NotificationField),
    Appearance(AppearanceField),
    Privacy(PrivacyField),
}

impl SettingsUpdate {
    pub fn section(&self) -> SettingsTab {
        match self {
            SettingsUpdate::Profile(_) => SettingsTab::Profile,
            SettingsUpdate::Notifications(_) => SettingsTab::Notifications,
            SettingsUpdate::Appearance(_) => SettingsTab::Appearance,
            SettingsUpdate::Privacy(_) => SettingsTab::Privacy,
        }
    }
}

impl Settings {
    /// Replace the single leaf named by `update`.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::Profile(field) => match field {
                ProfileField::Name(v) => self.profile.name = v,
                ProfileField::Email(v) => self.profile.email = v,
                ProfileField::Bio(v) => self.profile.bio = v,
            },
            SettingsUpdate::Notifications(field) => match field {
                NotificationField::EmailNotifications(v) => self.notifications.email_notifications = v,
                NotificationField::PushNotifications(v) => self.notifications.push_notifications = v,
                NotificationField::WeeklyDigest(v) => self.notifications.weekly_digest = v,
            },
            SettingsUpdate::Appearance(field) => match field {
                AppearanceField::Theme(v) => self.appearance.theme = v,
                AppearanceField::Language(v) => self.appearance.language = v,
            },
            SettingsUpdate::Privacy(field) => match field {
                PrivacyField::ProfileVisibility(v) => self.privacy.profile_visibility = v,
                PrivacyField::DataSharing(v) => self.privacy.data_sharing = v,
            },
        }
    }
}

// =============================================================
// Form
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("could not serialize settings: {0}")]
    Serialize(String),
}

/// What a save produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveReceipt {
    pub json: String,
}

/// Page-local state of the settings screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub active_tab: SettingsTab,
    pub settings: Settings,
    /// Confirmation shown after a save; cleared by the next edit.
    pub notice: Option<&'static str>,
}

impl SettingsForm {
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    pub fn apply(&mut self, update: SettingsUpdate) {
        log::debug!("settings edit in {} section", update.section().label());
        self.settings.apply(update);
        self.notice = None;
    }

    /// Serialize and log the current settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Serialize` if JSON encoding fails.
    pub fn save(&mut self) -> Result<SaveReceipt, SettingsError> {
        let json = serde_json::to_string(&self.settings).map_err(|e| SettingsError::Serialize(e.to_string()))?;
        log::info!("settings saved: {json}");
        self.notice = Some(SAVED_NOTICE);
        Ok(SaveReceipt { json })
    }
}
