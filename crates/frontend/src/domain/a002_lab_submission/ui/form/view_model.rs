//! ViewModel for the lab submission form
//!
//! The editable state is one `LabSubmissionForm` held in an `RwSignal`
//! and changed only through the commands below. Reference data (orders,
//! option lists) is written once by the loader.

use super::loader::{load_form_data, HttpLabFormSource, LabSubmissionSink, LoadedFormData};
use contracts::domain::a001_lab_order::{LabOrder, OrderDetails};
use contracts::domain::a002_lab_submission::{LabSubmissionDto, LabSubmissionForm, PatientField};
use contracts::enums::DropdownCategory;
use contracts::shared::{DropdownOptionSet, FetchPolicy};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormLoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct LabSubmissionVm {
    // === Reference data ===
    pub orders: RwSignal<Vec<LabOrder>>,
    pub orders_error: RwSignal<Option<String>>,
    pub options: RwSignal<DropdownOptionSet>,

    // === Form state ===
    pub form: RwSignal<LabSubmissionForm>,

    // === UI State ===
    pub load_state: RwSignal<FormLoadState>,
    pub submit_status: RwSignal<SubmitStatus>,

    policy: FetchPolicy,
}

impl LabSubmissionVm {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            orders_error: RwSignal::new(None),
            options: RwSignal::new(DropdownOptionSet::new()),
            form: RwSignal::new(LabSubmissionForm::new()),
            load_state: RwSignal::new(FormLoadState::Unloaded),
            submit_status: RwSignal::new(SubmitStatus::Idle),
            policy,
        }
    }

    // === Data loading ===

    /// Start the single fetch wave. Later calls are ignored.
    pub fn load(&self) {
        if self.load_state.get_untracked() != FormLoadState::Unloaded {
            return;
        }
        self.load_state.set(FormLoadState::Loading);

        let this = *self;
        leptos::task::spawn_local(async move {
            let data = load_form_data(&HttpLabFormSource, this.policy).await;
            if !this.apply_loaded(data) {
                log::debug!("Lab form disposed before data arrived; dropping result");
            }
        });
    }

    /// Write loaded data into the view. Returns `false` if the view was disposed.
    pub fn apply_loaded(&self, data: LoadedFormData) -> bool {
        let LoadedFormData {
            orders,
            orders_error,
            options,
        } = data;

        self.orders.try_update(|o| *o = orders).is_some()
            && self.orders_error.try_update(|e| *e = orders_error).is_some()
            && self.options.try_update(|o| *o = options).is_some()
            && self
                .load_state
                .try_update(|s| *s = FormLoadState::Loaded)
                .is_some()
    }

    // === Derived signals ===

    pub fn is_loading(&self) -> Signal<bool> {
        let load_state = self.load_state;
        Signal::derive(move || load_state.get() == FormLoadState::Loading)
    }

    pub fn has_order(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.has_order()))
    }

    /// Looked up from the order list on every change, never stored
    pub fn order_details(&self) -> Signal<OrderDetails> {
        let orders = self.orders;
        let form = self.form;
        Signal::derive(move || {
            orders.with(|orders| form.with(|f| OrderDetails::derive(orders, f.order_code())))
        })
    }

    pub fn order_code(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.order_code().to_string()))
    }

    /// (value, label) pairs for the order selector; the code is its own label.
    /// A repeated code is listed once, matching what `find_order` resolves.
    pub fn order_options(&self) -> Signal<Vec<(String, String)>> {
        let orders = self.orders;
        Signal::derive(move || {
            orders.with(|orders| {
                let mut seen = HashSet::new();
                orders
                    .iter()
                    .filter(|o| seen.insert(o.order_code.as_str()))
                    .map(|o| (o.order_code.clone(), o.order_code.clone()))
                    .collect()
            })
        })
    }

    pub fn category_options(&self, category: DropdownCategory) -> Signal<Vec<(String, String)>> {
        let options = self.options;
        Signal::derive(move || {
            options.with(|set| {
                set.options(category)
                    .iter()
                    .map(|v| (v.clone(), v.clone()))
                    .collect()
            })
        })
    }

    /// Degraded-data message for a category whose list failed to load
    pub fn category_error(&self, category: DropdownCategory) -> Signal<Option<String>> {
        let options = self.options;
        Signal::derive(move || {
            options.with(|set| {
                set.error(category)
                    .map(|e| format!("Options unavailable: {}", e))
            })
        })
    }

    pub fn selection(&self, category: DropdownCategory) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.selection(category).to_string()))
    }

    pub fn patient_field(&self, field: PatientField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.patient_field(field).to_string()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let submit_status = self.submit_status;
        Signal::derive(move || submit_status.get() == SubmitStatus::Submitting)
    }

    // === Mutations ===

    pub fn select_order(&self, order_code: String) {
        self.form.update(|f| f.select_order(order_code));
    }

    pub fn set_patient_field(&self, field: PatientField, value: String) {
        self.form.update(|f| f.set_patient_field(field, value));
    }

    pub fn select_option(&self, category: DropdownCategory, value: String) {
        self.form.update(|f| f.select_option(category, value));
    }

    // === Commands ===

    /// Submit the whole form as one record
    pub fn add_command(&self) {
        let Some(dto) = self.begin_submit() else {
            return;
        };
        let this = *self;
        leptos::task::spawn_local(async move {
            let result = HttpLabFormSource.create_submission(&dto).await;
            this.finish_submit(&dto, result);
        });
    }

    /// Same as `add_command`, awaiting the given sink in place
    pub async fn submit_with<S: LabSubmissionSink>(&self, sink: &S) {
        let Some(dto) = self.begin_submit() else {
            return;
        };
        let result = sink.create_submission(&dto).await;
        self.finish_submit(&dto, result);
    }

    /// Snapshot the form and enter `Submitting`. `None` while one is in flight.
    fn begin_submit(&self) -> Option<LabSubmissionDto> {
        if self.submit_status.get_untracked() == SubmitStatus::Submitting {
            return None;
        }
        let dto = self.form.with_untracked(|f| f.to_dto());
        self.submit_status.set(SubmitStatus::Submitting);
        Some(dto)
    }

    fn finish_submit(&self, dto: &LabSubmissionDto, result: Result<(), String>) {
        let status = match result {
            Ok(()) => {
                log::info!("Lab submission created for order '{}'", dto.order_code);
                SubmitStatus::Succeeded
            }
            Err(e) => {
                log::error!("Error creating lab submission: {}", e);
                SubmitStatus::Failed(e)
            }
        };
        let _ = self.submit_status.try_set(status);
    }

    /// Clear the order selection, patient fields and dropdown selections.
    /// Does nothing while a submission is in flight.
    pub fn discard_command(&self) {
        if self.submit_status.get_untracked() == SubmitStatus::Submitting {
            return;
        }
        self.form.update(|f| f.reset());
        self.submit_status.set(SubmitStatus::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::OptionListState;
    use futures::executor::block_on;
    use leptos::reactive::owner::Owner;
    use std::cell::RefCell;

    struct StubSink {
        result: Result<(), String>,
        received: RefCell<Vec<LabSubmissionDto>>,
    }

    impl StubSink {
        fn new(result: Result<(), String>) -> Self {
            Self {
                result,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl LabSubmissionSink for StubSink {
        async fn create_submission(&self, dto: &LabSubmissionDto) -> Result<(), String> {
            self.received.borrow_mut().push(dto.clone());
            self.result.clone()
        }
    }

    fn cbc() -> LabOrder {
        LabOrder {
            order_code: "A1".into(),
            order_name: "CBC".into(),
            order_loinc_code: "123-4".into(),
            loinc_name: "Complete Blood Count".into(),
            order_loinc_description: "desc".into(),
        }
    }

    fn loaded_vm() -> LabSubmissionVm {
        let vm = LabSubmissionVm::new(FetchPolicy::Isolated);
        let options = DropdownOptionSet::from_results(
            [
                (DropdownCategory::SpecimenType, Ok(vec!["Blood".to_string()])),
                (DropdownCategory::District, Err("HTTP 500".to_string())),
            ],
            FetchPolicy::Isolated,
        );
        assert!(vm.apply_loaded(LoadedFormData {
            orders: vec![cbc()],
            orders_error: None,
            options,
        }));
        vm
    }

    #[test]
    fn test_apply_loaded_populates_state() {
        let vm = loaded_vm();
        assert_eq!(vm.load_state.get_untracked(), FormLoadState::Loaded);
        assert_eq!(
            vm.order_options().get_untracked(),
            vec![("A1".to_string(), "A1".to_string())]
        );
        assert_eq!(
            vm.category_options(DropdownCategory::SpecimenType).get_untracked(),
            vec![("Blood".to_string(), "Blood".to_string())]
        );
        assert_eq!(
            vm.options.with_untracked(|o| o.state(DropdownCategory::Race).clone()),
            OptionListState::Pending
        );
    }

    #[test]
    fn test_failed_category_exposes_error() {
        let vm = loaded_vm();
        assert_eq!(
            vm.category_error(DropdownCategory::District).get_untracked(),
            Some("Options unavailable: HTTP 500".to_string())
        );
        assert_eq!(vm.category_error(DropdownCategory::SpecimenType).get_untracked(), None);
        assert!(vm.category_options(DropdownCategory::District).get_untracked().is_empty());
    }

    #[test]
    fn test_order_details_follow_selection() {
        let vm = loaded_vm();
        assert!(!vm.has_order().get_untracked());

        vm.select_order("A1".into());
        let details = vm.order_details().get_untracked();
        assert!(vm.has_order().get_untracked());
        assert_eq!(details.order_name, "CBC");
        assert_eq!(details.order_loinc_description, "desc");

        vm.select_order(String::new());
        assert!(vm.order_details().get_untracked().is_empty());
    }

    #[test]
    fn test_discard_resets_form_and_status() {
        let vm = loaded_vm();
        vm.select_order("A1".into());
        vm.set_patient_field(PatientField::Email, "ada@example.org".into());
        vm.select_option(DropdownCategory::SpecimenType, "Blood".into());
        vm.submit_status.set(SubmitStatus::Failed("HTTP 500".into()));

        vm.discard_command();

        assert_eq!(vm.order_code().get_untracked(), "");
        assert_eq!(vm.patient_field(PatientField::Email).get_untracked(), "");
        assert_eq!(vm.selection(DropdownCategory::SpecimenType).get_untracked(), "");
        assert_eq!(vm.submit_status.get_untracked(), SubmitStatus::Idle);
        // reference data survives a discard
        assert_eq!(vm.order_options().get_untracked().len(), 1);
    }

    fn fill(vm: &LabSubmissionVm) {
        vm.select_order("A1".into());
        vm.set_patient_field(PatientField::FirstName, "Ada".into());
        vm.set_patient_field(PatientField::PhoneNumber, "555-0100".into());
        for category in DropdownCategory::ALL {
            vm.select_option(category, format!("{} value", category.key()));
        }
    }

    #[test]
    fn test_loading_state_tracks_apply_loaded() {
        let vm = LabSubmissionVm::new(FetchPolicy::Isolated);
        assert!(!vm.is_loading().get_untracked());

        vm.load_state.set(FormLoadState::Loading);
        assert!(vm.is_loading().get_untracked());

        assert!(vm.apply_loaded(LoadedFormData::default()));
        assert!(!vm.is_loading().get_untracked());
        assert_eq!(vm.load_state.get_untracked(), FormLoadState::Loaded);
    }

    #[test]
    fn test_apply_loaded_after_dispose_is_dropped() {
        let owner = Owner::new();
        let vm = owner.with(|| LabSubmissionVm::new(FetchPolicy::Isolated));
        owner.cleanup();

        assert!(!vm.apply_loaded(LoadedFormData {
            orders: vec![cbc()],
            ..LoadedFormData::default()
        }));
    }

    #[test]
    fn test_submit_sends_form_snapshot_and_succeeds() {
        let vm = loaded_vm();
        fill(&vm);
        let expected = vm.form.with_untracked(|f| f.to_dto());
        let sink = StubSink::new(Ok(()));

        block_on(vm.submit_with(&sink));

        assert_eq!(sink.received.borrow().as_slice(), [expected]);
        assert_eq!(sink.received.borrow()[0].selections.len(), 15);
        assert_eq!(vm.submit_status.get_untracked(), SubmitStatus::Succeeded);
        assert!(!vm.is_submitting().get_untracked());
    }

    #[test]
    fn test_submit_failure_keeps_message() {
        let vm = loaded_vm();
        fill(&vm);
        let sink = StubSink::new(Err("HTTP 422".into()));

        block_on(vm.submit_with(&sink));

        assert_eq!(
            vm.submit_status.get_untracked(),
            SubmitStatus::Failed("HTTP 422".into())
        );
        // the form is kept so the user can retry
        assert_eq!(vm.order_code().get_untracked(), "A1");
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let vm = loaded_vm();
        fill(&vm);
        vm.submit_status.set(SubmitStatus::Submitting);
        let sink = StubSink::new(Ok(()));

        block_on(vm.submit_with(&sink));

        assert!(sink.received.borrow().is_empty());
        assert!(vm.is_submitting().get_untracked());
    }

    #[test]
    fn test_discard_ignored_while_in_flight() {
        let vm = loaded_vm();
        fill(&vm);
        let before = vm.form.get_untracked();
        let dto = vm.begin_submit().unwrap();

        vm.discard_command();
        assert!(vm.is_submitting().get_untracked());
        assert_eq!(vm.form.get_untracked(), before);

        vm.finish_submit(&dto, Ok(()));
        assert_eq!(vm.submit_status.get_untracked(), SubmitStatus::Succeeded);
        assert_eq!(vm.form.get_untracked(), before);

        vm.discard_command();
        assert_eq!(vm.form.get_untracked(), LabSubmissionForm::default());
        assert_eq!(vm.submit_status.get_untracked(), SubmitStatus::Idle);
    }

    #[test]
    fn test_repeated_order_code_listed_once() {
        let vm = LabSubmissionVm::new(FetchPolicy::Isolated);
        let mut duplicate = cbc();
        duplicate.order_name = "CBC (old)".into();
        assert!(vm.apply_loaded(LoadedFormData {
            orders: vec![cbc(), duplicate],
            ..LoadedFormData::default()
        }));

        assert_eq!(
            vm.order_options().get_untracked(),
            vec![("A1".to_string(), "A1".to_string())]
        );
        vm.select_order("A1".into());
        assert_eq!(vm.order_details().get_untracked().order_name, "CBC");
    }
}
