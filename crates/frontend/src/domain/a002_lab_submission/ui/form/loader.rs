//! One fetch wave for the lab submission form
//!
//! Orders and the fifteen dropdown lists are requested together and
//! joined. Errors never leave this module: they are logged and turned
//! into state for the view model to show.

use super::model;
use contracts::domain::a001_lab_order::LabOrder;
use contracts::domain::a002_lab_submission::LabSubmissionDto;
use contracts::enums::DropdownCategory;
use contracts::shared::{DropdownOptionSet, FetchPolicy};
use futures::future::{join, join_all};

/// Where the form gets its reference data from
#[allow(async_fn_in_trait)]
pub trait LabFormSource {
    async fn fetch_orders(&self) -> Result<Vec<LabOrder>, String>;
    async fn fetch_dropdown_data(&self, category: DropdownCategory) -> Result<Vec<String>, String>;
}

/// Where "Add" sends the finished record
#[allow(async_fn_in_trait)]
pub trait LabSubmissionSink {
    async fn create_submission(&self, dto: &LabSubmissionDto) -> Result<(), String>;
}

/// Backend over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpLabFormSource;

impl LabFormSource for HttpLabFormSource {
    async fn fetch_orders(&self) -> Result<Vec<LabOrder>, String> {
        model::fetch_orders().await
    }

    async fn fetch_dropdown_data(&self, category: DropdownCategory) -> Result<Vec<String>, String> {
        model::fetch_dropdown_data(category).await
    }
}

impl LabSubmissionSink for HttpLabFormSource {
    async fn create_submission(&self, dto: &LabSubmissionDto) -> Result<(), String> {
        model::create_submission(dto).await
    }
}

/// Everything one load produced, applied to the view in a single write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedFormData {
    pub orders: Vec<LabOrder>,
    pub orders_error: Option<String>,
    pub options: DropdownOptionSet,
}

pub async fn load_form_data<S: LabFormSource>(source: &S, policy: FetchPolicy) -> LoadedFormData {
    let dropdowns = join_all(DropdownCategory::ALL.into_iter().map(|category| async move {
        (category, source.fetch_dropdown_data(category).await)
    }));
    let (orders_result, dropdown_results) = join(source.fetch_orders(), dropdowns).await;

    let (orders, orders_error) = match orders_result {
        Ok(orders) => (orders, None),
        Err(e) => {
            log::error!("Error fetching orders: {}", e);
            (Vec::new(), Some(e))
        }
    };

    for (category, result) in &dropdown_results {
        if let Err(e) = result {
            log::error!("Error fetching dropdown data for {}: {}", category.key(), e);
        }
    }
    let options = DropdownOptionSet::from_results(dropdown_results, policy);

    log::info!(
        "Lab form data loaded: {} orders, {} failed categories",
        orders.len(),
        options.failed_categories().len()
    );

    LoadedFormData {
        orders,
        orders_error,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct StubSource {
        orders: Result<Vec<LabOrder>, String>,
        failing: Vec<DropdownCategory>,
        requested: RefCell<Vec<DropdownCategory>>,
    }

    impl StubSource {
        fn new(orders: Result<Vec<LabOrder>, String>) -> Self {
            Self {
                orders,
                failing: Vec::new(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing(mut self, category: DropdownCategory) -> Self {
            self.failing.push(category);
            self
        }
    }

    impl LabFormSource for StubSource {
        async fn fetch_orders(&self) -> Result<Vec<LabOrder>, String> {
            self.orders.clone()
        }

        async fn fetch_dropdown_data(
            &self,
            category: DropdownCategory,
        ) -> Result<Vec<String>, String> {
            self.requested.borrow_mut().push(category);
            if self.failing.contains(&category) {
                Err("HTTP 503".to_string())
            } else {
                Ok(vec![format!("{} option", category.label())])
            }
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

    #[test]
    fn test_loads_orders_and_every_category() {
        let source = StubSource::new(Ok(vec![cbc()]));
        let data = block_on(load_form_data(&source, FetchPolicy::Isolated));

        assert_eq!(data.orders, vec![cbc()]);
        assert_eq!(data.orders_error, None);
        for category in DropdownCategory::ALL {
            assert_eq!(
                data.options.options(category),
                [format!("{} option", category.label())]
            );
        }
        let mut requested = source.requested.borrow().clone();
        requested.sort();
        assert_eq!(requested, DropdownCategory::ALL.to_vec());
    }

    #[test]
    fn test_orders_failure_is_contained() {
        let source = StubSource::new(Err("HTTP 500".into()));
        let data = block_on(load_form_data(&source, FetchPolicy::Isolated));

        assert!(data.orders.is_empty());
        assert_eq!(data.orders_error.as_deref(), Some("HTTP 500"));
        // dropdowns are unaffected
        assert!(data.options.failed_categories().is_empty());
        assert_eq!(data.options.options(DropdownCategory::Race).len(), 1);
    }

    #[test]
    fn test_isolated_policy_degrades_single_category() {
        let source = StubSource::new(Ok(vec![cbc()])).failing(DropdownCategory::PhysicianNpi);
        let data = block_on(load_form_data(&source, FetchPolicy::Isolated));

        assert_eq!(
            data.options.failed_categories(),
            vec![DropdownCategory::PhysicianNpi]
        );
        assert!(data.options.options(DropdownCategory::PhysicianNpi).is_empty());
        assert_eq!(data.options.options(DropdownCategory::District).len(), 1);
        assert_eq!(data.orders.len(), 1);
    }

    #[test]
    fn test_all_or_nothing_policy_blanks_every_category() {
        let source = StubSource::new(Ok(vec![cbc()])).failing(DropdownCategory::Env);
        let data = block_on(load_form_data(&source, FetchPolicy::AllOrNothing));

        for category in DropdownCategory::ALL {
            assert!(data.options.options(category).is_empty());
            assert!(data.options.error(category).is_some());
        }
        // orders travel on their own request
        assert_eq!(data.orders, vec![cbc()]);
    }
}
