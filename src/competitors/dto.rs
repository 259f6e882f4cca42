use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::competitors::catalog::CompetitorInfo;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub industry: String,
}

/// Wire shape of one recommendation. The id is minted per response for
/// client-side keys only; it is not stable across requests.
#[derive(Debug, Serialize)]
pub struct Competitor {
    pub id: Uuid,
    pub name: &'static str,
    pub website: &'static str,
    pub industry: &'static str,
    pub logo: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl From<&CompetitorInfo> for Competitor {
    fn from(info: &CompetitorInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: info.name,
            website: info.website,
            industry: info.industry,
            logo: info.logo,
            description: info.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub competitors: Vec<Competitor>,
}
