//! Slider row with a live numeric readout.

use leptos::*;
use prozen_core::format_readout;

/// Slider setting with name, description and value display.
#[component]
pub fn SettingSlider(
    /// Setting name
    name: &'static str,
    /// Help text under the name
    desc: &'static str,
    /// Current value signal
    value: Signal<f64>,
    /// Called when value changes
    on_change: Callback<f64>,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Step increment
    step: f64,
) -> impl IntoView {
    view! {
        <div class="setting-item">
            <div class="setting-item-info">
                <div class="setting-item-name">{name}</div>
                <div class="setting-item-description">{desc}</div>
            </div>
            <div class="setting-item-control">
                <input
                    type="range"
                    class="slider"
                    prop:min=min
                    prop:max=max
                    prop:step=step
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            on_change.call(v);
                        }
                    }
                />
            </div>
            <div style="min-width: 2.0em; text-align: right;">
                {move || format_readout(value.get())}
            </div>
        </div>
    }
}
