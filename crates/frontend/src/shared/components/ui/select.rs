use leptos::prelude::*;

/// Select component with label, empty placeholder option and an optional hint
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty string for "nothing selected"
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty first option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Message shown under the control, e.g. when the options failed to load
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || {
                    let degraded = if hint.get().is_some() { "form__select--degraded" } else { "" };
                    format!("form__select {} {}", degraded, additional_class())
                }
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || hint.get().map(|h| view! {
                <div class="form__hint form__hint--error">{h}</div>
            })}
        </div>
    }
}
