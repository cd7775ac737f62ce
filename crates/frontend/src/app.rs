use crate::domain::a002_lab_submission::ui::form::LabSubmissionDrawer;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // The drawer starts open; closing it keeps the form state.
    let drawer_open = RwSignal::new(true);

    view! {
        <ConfigProvider>
            <div class="app-shell">
                <header class="app-shell__header">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| drawer_open.update(|open| *open = !*open)
                    >
                        {icon("orders")}
                        " Lab Order"
                    </Button>
                </header>
                <LabSubmissionDrawer open=drawer_open />
            </div>
        </ConfigProvider>
    }
}
