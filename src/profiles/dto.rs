use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Brand-profile submission as the frontend sends it. All fields are
/// free-form strings; userId is taken on faith unless strict mode is on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub brand_name: String,
    pub industry: String,
    pub website_url: String,
    pub target_audience: String,
    pub monthly_ad_spend: String,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct CreateProfileResponse {
    pub id: Uuid,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let req: CreateProfileRequest = serde_json::from_str(
            r#"{
                "brandName": "Acme",
                "industry": "Fashion & Apparel",
                "websiteUrl": "https://acme.example",
                "targetAudience": "everyone",
                "monthlyAdSpend": "$5k",
                "userId": "not-even-a-uuid"
            }"#,
        )
        .unwrap();
        assert_eq!(req.brand_name, "Acme");
        assert_eq!(req.user_id, "not-even-a-uuid");
    }

    #[test]
    fn response_shape() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(CreateProfileResponse {
            id,
            message: "Brand profile created successfully",
        })
        .unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["message"], "Brand profile created successfully");
    }
}
