//! Request and response records for the admin API.
//!
//! Response records default every field so partial payloads from the mock
//! and default backends still decode. The login response is the exception:
//! a reply without a token is not a login.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of a paginated listing.
///
/// The list may arrive as `items`, `data` or `records`. Exactly one of
/// them may be present; a payload carrying two is a duplicate field and
/// fails to decode, which the client treats as a failed attempt.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Page<T> {
    #[serde(alias = "data", alias = "records")]
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    #[serde(alias = "limit")]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            size: 0,
        }
    }
}

// --- Auth ---

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "non_empty_token")]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: UserProfile,
}

fn non_empty_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let token = String::deserialize(deserializer)?;
    if token.is_empty() {
        return Err(serde::de::Error::custom("access_token is empty"));
    }
    Ok(token)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
}

// --- Dashboard ---

/// Summary figures shown on both portals' landing pages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_partners: u64,
    pub total_partners: u64,
    pub total_energy: u64,
    pub available_energy: u64,
    pub today_orders: u64,
    pub total_revenue: f64,
}

// --- Partners ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Partner {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub wallet_address: String,
    pub status: String,
    pub energy_balance: u64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PartnerRequest {
    pub name: String,
    pub email: String,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// --- Energy pool ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyPool {
    pub total_energy: u64,
    pub available_energy: u64,
    pub allocated_energy: u64,
    pub frozen_trx: f64,
    pub accounts: Vec<EnergyAccount>,
}

/// A staking account contributing energy to the pool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyAccount {
    pub address: String,
    pub energy: u64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationRequest {
    pub partner_id: u64,
    pub energy_amount: u64,
    pub duration_hours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RechargeRequest {
    pub partner_id: u64,
    pub amount_trx: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// Result of recording an allocation or a recharge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyTransaction {
    pub id: u64,
    pub partner_id: u64,
    pub kind: String,
    pub amount: f64,
    pub status: String,
    pub created_at: Option<String>,
}

// --- Fees ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
    pub id: u64,
    pub name: String,
    pub fee_type: String,
    pub rate: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeeConfigRequest {
    pub name: String,
    pub fee_type: String,
    pub rate: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeRevenue {
    pub id: u64,
    pub partner_id: u64,
    pub amount: f64,
    pub currency: String,
    pub created_at: Option<String>,
}

// --- System administrators ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemAdmin {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminRequest {
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_stats_decode() {
        let stats: DashboardStats = serde_json::from_value(json!({"total_users": 100})).unwrap();
        assert_eq!(stats.total_users, 100);
        assert_eq!(stats.active_partners, 0);
    }

    #[test]
    fn test_page_aliases() {
        let page: Page<Partner> = serde_json::from_value(json!({
            "data": [{"id": 1, "name": "acme"}],
            "total": 31,
            "page": 2,
            "limit": 10
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "acme");
        assert_eq!(page.size, 10);
        assert_eq!(page.total, 31);
    }

    #[test]
    fn test_page_rejects_two_list_keys() {
        let result: Result<Page<Partner>, _> = serde_json::from_value(json!({
            "items": [],
            "data": [{"id": 1}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_login_response_requires_token() {
        let missing: Result<LoginResponse, _> = serde_json::from_value(json!({"detail": "ok"}));
        assert!(missing.is_err());

        let empty: Result<LoginResponse, _> = serde_json::from_value(json!({"access_token": ""}));
        assert!(empty.is_err());

        let resp: LoginResponse = serde_json::from_value(json!({"access_token": "tok123"})).unwrap();
        assert_eq!(resp.access_token, "tok123");
        assert!(resp.token_type.is_none());
        assert_eq!(resp.user, UserProfile::default());
    }

    #[test]
    fn test_optional_fields_skipped() {
        let req = PartnerRequest {
            name: "acme".into(),
            email: "ops@acme.io".into(),
            wallet_address: "TXYZ".into(),
            status: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("status").is_none());
    }
}
