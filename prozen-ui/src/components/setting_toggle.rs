use leptos::*;

#[component]
pub fn SettingToggle(
    name: &'static str,
    desc: &'static str,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="setting-item mod-toggle">
            <div class="setting-item-info">
                <div class="setting-item-name">{name}</div>
                <div class="setting-item-description">{desc}</div>
            </div>
            <div class="setting-item-control">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.call(event_target_checked(&ev))
                />
            </div>
        </div>
    }
}
