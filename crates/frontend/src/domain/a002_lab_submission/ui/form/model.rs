use crate::shared::api_utils::api_url;
use contracts::domain::a001_lab_order::LabOrder;
use contracts::domain::a002_lab_submission::LabSubmissionDto;
use contracts::enums::DropdownCategory;
use gloo_net::http::Request;

const ORDERS_PATH: &str = "/api/orders";
const DROPDOWN_PATH: &str = "/api/dropdown";
const SUBMISSION_PATH: &str = "/api/lab_submission";

fn dropdown_path(category: DropdownCategory) -> String {
    format!("{}/{}", DROPDOWN_PATH, category.key())
}

/// Fetch all lab orders
pub async fn fetch_orders() -> Result<Vec<LabOrder>, String> {
    let response = Request::get(&api_url(ORDERS_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<LabOrder>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch option values for one dropdown category
pub async fn fetch_dropdown_data(category: DropdownCategory) -> Result<Vec<String>, String> {
    let response = Request::get(&api_url(&dropdown_path(category)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<String>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a lab submission record
pub async fn create_submission(dto: &LabSubmissionDto) -> Result<(), String> {
    let response = Request::post(&api_url(SUBMISSION_PATH))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_path_uses_category_key() {
        assert_eq!(
            dropdown_path(DropdownCategory::PhysicianNpi),
            "/api/dropdown/PHYSICIAN_NPI"
        );
        for category in DropdownCategory::ALL {
            assert_eq!(
                dropdown_path(category),
                format!("/api/dropdown/{}", category.key())
            );
        }
    }
}
