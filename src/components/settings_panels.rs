//! The four settings panels. Each reads from and writes to the page's
//! `SettingsForm` signal through `SettingsUpdate` only.

use leptos::prelude::*;

use crate::state::settings::{
    AppearanceField, Language, NotificationField, NotificationSettings, PrivacyField, ProfileField,
    ProfileVisibility, SelectOption, SettingsForm, SettingsUpdate, Theme,
};

fn edit(form: RwSignal<SettingsForm>, update: SettingsUpdate) {
    form.update(|f| f.apply(update));
}

/// `<option>` list for a select, marking `current` as selected.
fn option_list<T, F>(current: F) -> impl IntoView
where
    T: SelectOption,
    F: Fn() -> T + Copy + Send + Sync + 'static,
{
    T::ALL
        .iter()
        .copied()
        .map(|option| {
            view! {
                <option value=option.as_str() selected=move || current() == option>
                    {option.label()}
                </option>
            }
        })
        .collect_view()
}

/// Parse a changed `<select>` value, logging and dropping unknown values.
fn parse_selected<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().inspect_err(|e| log::warn!("{e}")).ok()
}

#[component]
fn PanelHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="settings-panel__header">
            <h3 class="settings-panel__title">{title}</h3>
            <p class="settings-panel__description">{description}</p>
        </div>
    }
}

#[component]
fn ToggleRow(
    label: &'static str,
    hint: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <div class="toggle-row__text">
                <span class="field__label">{label}</span>
                <p class="field__hint">{hint}</p>
            </div>
            <input
                class="switch"
                type="checkbox"
                role="switch"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </label>
    }
}

#[component]
pub fn ProfilePanel(form: RwSignal<SettingsForm>) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <PanelHeader
                title="Profile Settings"
                description="Update your personal information and profile details."
            />
            <div class="field">
                <label class="field__label" for="settings-name">"Full Name"</label>
                <input
                    id="settings-name"
                    class="input"
                    type="text"
                    prop:value=move || form.with(|f| f.settings.profile.name.clone())
                    on:input=move |ev| edit(form, SettingsUpdate::Profile(ProfileField::Name(event_target_value(&ev))))
                />
            </div>
            <div class="field">
                <label class="field__label" for="settings-email">"Email Address"</label>
                <input
                    id="settings-email"
                    class="input"
                    type="email"
                    prop:value=move || form.with(|f| f.settings.profile.email.clone())
                    on:input=move |ev| edit(form, SettingsUpdate::Profile(ProfileField::Email(event_target_value(&ev))))
                />
            </div>
            <div class="field">
                <label class="field__label" for="settings-bio">"Bio"</label>
                <textarea
                    id="settings-bio"
                    class="input"
                    rows="4"
                    prop:value=move || form.with(|f| f.settings.profile.bio.clone())
                    on:input=move |ev| edit(form, SettingsUpdate::Profile(ProfileField::Bio(event_target_value(&ev))))
                ></textarea>
            </div>
        </div>
    }
}

#[component]
pub fn NotificationsPanel(form: RwSignal<SettingsForm>) -> impl IntoView {
    let flag = move |read: fn(&NotificationSettings) -> bool| {
        Signal::derive(move || form.with(|f| read(&f.settings.notifications)))
    };
    let toggle = move |field: fn(bool) -> NotificationField| {
        Callback::new(move |on: bool| edit(form, SettingsUpdate::Notifications(field(on))))
    };

    view! {
        <div class="settings-panel">
            <PanelHeader
                title="Notification Settings"
                description="Configure how you receive notifications and updates."
            />
            <ToggleRow
                label="Email Notifications"
                hint="Receive notifications via email"
                checked=flag(|n| n.email_notifications)
                on_toggle=toggle(NotificationField::EmailNotifications)
            />
            <ToggleRow
                label="Push Notifications"
                hint="Receive push notifications in your browser"
                checked=flag(|n| n.push_notifications)
                on_toggle=toggle(NotificationField::PushNotifications)
            />
            <ToggleRow
                label="Weekly Digest"
                hint="Receive a weekly summary of activity"
                checked=flag(|n| n.weekly_digest)
                on_toggle=toggle(NotificationField::WeeklyDigest)
            />
        </div>
    }
}

#[component]
pub fn AppearancePanel(form: RwSignal<SettingsForm>) -> impl IntoView {
    let theme = move || form.with(|f| f.settings.appearance.theme);
    let language = move || form.with(|f| f.settings.appearance.language);

    view! {
        <div class="settings-panel">
            <PanelHeader
                title="Appearance Settings"
                description="Customize the look and feel of your application."
            />
            <div class="field">
                <label class="field__label" for="settings-theme">"Theme"</label>
                <select
                    id="settings-theme"
                    class="select"
                    on:change=move |ev| {
                        if let Some(v) = parse_selected::<Theme>(&event_target_value(&ev)) {
                            edit(form, SettingsUpdate::Appearance(AppearanceField::Theme(v)));
                        }
                    }
                >
                    {option_list(theme)}
                </select>
            </div>
            <div class="field">
                <label class="field__label" for="settings-language">"Language"</label>
                <select
                    id="settings-language"
                    class="select"
                    on:change=move |ev| {
                        if let Some(v) = parse_selected::<Language>(&event_target_value(&ev)) {
                            edit(form, SettingsUpdate::Appearance(AppearanceField::Language(v)));
                        }
                    }
                >
                    {option_list(language)}
                </select>
            </div>
        </div>
    }
}

#[component]
pub fn PrivacyPanel(form: RwSignal<SettingsForm>) -> impl IntoView {
    let visibility = move || form.with(|f| f.settings.privacy.profile_visibility);
    let data_sharing = Signal::derive(move || form.with(|f| f.settings.privacy.data_sharing));
    let on_data_sharing =
        Callback::new(move |on: bool| edit(form, SettingsUpdate::Privacy(PrivacyField::DataSharing(on))));

    view! {
        <div class="settings-panel">
            <PanelHeader
                title="Privacy Settings"
                description="Control your privacy and data sharing preferences."
            />
            <div class="field">
                <label class="field__label" for="settings-visibility">"Profile Visibility"</label>
                <select
                    id="settings-visibility"
                    class="select"
                    on:change=move |ev| {
                        if let Some(v) = parse_selected::<ProfileVisibility>(&event_target_value(&ev)) {
                            edit(form, SettingsUpdate::Privacy(PrivacyField::ProfileVisibility(v)));
                        }
                    }
                >
                    {option_list(visibility)}
                </select>
            </div>
            <ToggleRow
                label="Data Sharing"
                hint="Allow sharing of anonymized data for analytics"
                checked=data_sharing
                on_toggle=on_data_sharing
            />
        </div>
    }
}
