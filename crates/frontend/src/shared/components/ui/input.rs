use leptos::prelude::*;

/// Text input with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Read-only fields are shown but not editable
    #[prop(optional)]
    readonly: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let readonly_class = if readonly { "form__input--readonly" } else { "" };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {} {}", readonly_class, additional_class())
                type=input_t
                // property binding keeps the DOM in sync after programmatic resets
                prop:value=move || value.get()
                placeholder=input_placeholder
                readonly=readonly
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
