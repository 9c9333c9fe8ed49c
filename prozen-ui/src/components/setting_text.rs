//! Free-text setting row.

use leptos::*;

/// Text input setting. Passes the raw text on; parsing is up to the caller.
#[component]
pub fn SettingText(
    name: &'static str,
    desc: &'static str,
    /// Shown while the field is empty
    placeholder: &'static str,
    /// Text the field starts with
    #[prop(into)]
    initial: String,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="setting-item">
            <div class="setting-item-info">
                <div class="setting-item-name">{name}</div>
                <div class="setting-item-description">{desc}</div>
            </div>
            <div class="setting-item-control">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=initial
                    on:input=move |ev| on_change.call(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
