use super::view_model::{LabSubmissionVm, SubmitStatus};
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a002_lab_submission::PatientField;
use contracts::enums::DropdownCategory;
use contracts::shared::FetchPolicy;
use leptos::prelude::*;
use thaw::*;

/// Right-anchored drawer holding the lab submission form
#[component]
pub fn LabSubmissionDrawer(
    /// Drawer visibility; the mask and the close button set it to `false`
    open: RwSignal<bool>,
) -> impl IntoView {
    let vm = LabSubmissionVm::new(FetchPolicy::default());

    // Load on mount
    Effect::new(move |_| vm.load());

    view! {
        <OverlayDrawer open position=DrawerPosition::Right size=DrawerSize::Medium>
            <DrawerHeader>
                <DrawerHeaderTitle>
                    <DrawerHeaderTitleAction slot>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            {icon("close")}
                        </Button>
                    </DrawerHeaderTitleAction>
                    "Lab Order"
                </DrawerHeaderTitle>
            </DrawerHeader>
            <DrawerBody>
                <LabSubmissionDetails vm=vm />
            </DrawerBody>
        </OverlayDrawer>
    }
}

#[component]
fn LabSubmissionDetails(vm: LabSubmissionVm) -> impl IntoView {
    let details = vm.order_details();

    view! {
        <div class="details-container lab-submission-details">
            <Show when=move || vm.is_loading().get()>
                <div class="lab-submission-details__loading">
                    <Spinner />
                </div>
            </Show>

            {move || vm.orders_error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>{format!("Orders could not be loaded: {}", err)}</span>
                </MessageBar>
            })}

            <div class="details-form">
                <Select
                    id="order_code"
                    label="Order Code"
                    placeholder="-- Select order --"
                    value=vm.order_code()
                    options=vm.order_options()
                    disabled=vm.is_loading()
                    on_change=Callback::new(move |code: String| vm.select_order(code))
                />

                <Show when=move || vm.has_order().get()>
                    <div class="lab-submission-details__order">
                        <Input
                            id="order_name"
                            label="Order Name"
                            value=Signal::derive(move || details.get().order_name)
                            readonly=true
                        />
                        <Input
                            id="order_loinc_code"
                            label="Order LOINC Code"
                            value=Signal::derive(move || details.get().order_loinc_code)
                            readonly=true
                        />
                        <Input
                            id="loinc_name"
                            label="LOINC Name"
                            value=Signal::derive(move || details.get().loinc_name)
                            readonly=true
                        />
                        <Input
                            id="order_loinc_description"
                            label="Order LOINC Description"
                            value=Signal::derive(move || details.get().order_loinc_description)
                            readonly=true
                        />
                    </div>
                </Show>

                {DropdownCategory::ALL
                    .into_iter()
                    .map(|category| view! { <CategorySelect vm=vm category=category /> })
                    .collect_view()}

                {PatientField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <Input
                            id=field.key()
                            label=field.label()
                            input_type=field.input_type()
                            value=vm.patient_field(field)
                            on_input=Callback::new(move |value: String| vm.set_patient_field(field, value))
                        />
                    })
                    .collect_view()}
            </div>

            {move || match vm.submit_status.get() {
                SubmitStatus::Succeeded => Some(view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <span>"Record added"</span>
                    </MessageBar>
                }.into_any()),
                SubmitStatus::Failed(err) => Some(view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <span>{format!("Could not add record: {}", err)}</span>
                    </MessageBar>
                }.into_any()),
                SubmitStatus::Idle | SubmitStatus::Submitting => None,
            }}

            <div class="details-actions">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.add_command()
                        disabled=vm.is_submitting()
                    >
                        {icon("add")}
                        " Add"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.discard_command()
                        disabled=vm.is_submitting()
                    >
                        {icon("discard")}
                        " Discard"
                    </Button>
                </Space>
            </div>
        </div>
    }
}

/// One option-list selector bound to its category in the form state
#[component]
fn CategorySelect(vm: LabSubmissionVm, category: DropdownCategory) -> impl IntoView {
    view! {
        <Select
            id=category.key().to_lowercase()
            label=category.label()
            value=vm.selection(category)
            options=vm.category_options(category)
            hint=vm.category_error(category)
            disabled=vm.is_loading()
            on_change=Callback::new(move |value: String| vm.select_option(category, value))
        />
    }
}
