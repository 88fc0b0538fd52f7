//! Settings page: tabbed form over profile, notification, appearance, and
//! privacy preferences.
//!
//! DESIGN
//! ======
//! The form lives in one page-scoped `RwSignal<SettingsForm>`. Tabs only
//! switch the visible panel; every field edit goes through
//! `SettingsForm::apply`. Save has no backend: it logs the serialized
//! settings and shows a confirmation notice. The chosen theme is applied to
//! the document root as soon as it changes.

use leptos::prelude::*;

use crate::components::settings_panels::{AppearancePanel, NotificationsPanel, PrivacyPanel, ProfilePanel};
use crate::state::settings::{SettingsForm, SettingsTab};
use crate::util::theme;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::default());
    let active_tab = Memo::new(move |_| form.with(|f| f.active_tab));
    let chosen_theme = Memo::new(move |_| form.with(|f| f.settings.appearance.theme));

    Effect::new(move || {
        theme::apply(chosen_theme.get());
    });

    let on_save = move |_| {
        if let Some(Err(e)) = form.try_update(SettingsForm::save) {
            log::error!("{e}");
        }
    };

    let tabs = SettingsTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="settings-tab"
                    class:settings-tab--active=move || active_tab.get() == tab
                    role="tab"
                    aria-selected=move || (active_tab.get() == tab).to_string()
                    on:click=move |_| form.update(|f| f.select_tab(tab))
                >
                    <span class=tab.icon_class() aria-hidden="true"></span>
                    <span class="settings-tab__label">{tab.label()}</span>
                </button>
            }
        })
        .collect_view();

    let panel = move || match active_tab.get() {
        SettingsTab::Profile => view! { <ProfilePanel form/> }.into_any(),
        SettingsTab::Notifications => view! { <NotificationsPanel form/> }.into_any(),
        SettingsTab::Appearance => view! { <AppearancePanel form/> }.into_any(),
        SettingsTab::Privacy => view! { <PrivacyPanel form/> }.into_any(),
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Settings"</h1>
                <button class="button" on:click=on_save>
                    <span class="icon icon--save" aria-hidden="true"></span>
                    "Save Changes"
                </button>
            </div>
            <Show when=move || form.with(|f| f.notice.is_some())>
                <div class="notice" role="status">
                    {move || form.with(|f| f.notice.unwrap_or_default())}
                </div>
            </Show>
            <div class="card settings-card">
                <div class="settings-tabs" role="tablist">{tabs}</div>
                {panel}
            </div>
        </div>
    }
}
