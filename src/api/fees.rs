//! Fee configuration and fee revenue.

use crate::api::types::{FeeConfig, FeeConfigRequest, FeeRevenue, Page};
use crate::api::AdminApi;
use crate::client::{ClientResult, Endpoint};

impl AdminApi {
    pub async fn fee_configs(&self) -> ClientResult<Vec<FeeConfig>> {
        self.client.get("/fees/config").await
    }

    pub async fn create_fee_config(&self, req: &FeeConfigRequest) -> ClientResult<FeeConfig> {
        self.client.post("/fees/config", req).await
    }

    pub async fn update_fee_config(&self, id: u64, req: &FeeConfigRequest) -> ClientResult<FeeConfig> {
        self.client.put(&format!("/fees/config/{}", id), req).await
    }

    /// Revenue records. This listing pages with `limit` rather than `size`.
    pub async fn fee_revenue(&self, page: u32, limit: u32) -> ClientResult<Page<FeeRevenue>> {
        let endpoint = Endpoint::get("/fees/revenue").query("page", page).query("limit", limit);
        self.client.request(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{api, RouteTransport};
    use crate::api::types::FeeConfigRequest;
    use crate::client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_revenue_uses_limit() {
        let transport = RouteTransport::default().route(
            Method::Get,
            "/fees/revenue",
            200,
            json!({"records": [{"id": 1, "amount": 12.5, "currency": "TRX"}], "total": 1, "page": 3, "limit": 20}),
        );
        let (api, transport) = api(transport);

        let page = api.fee_revenue(3, 20).await.unwrap();
        assert_eq!(page.items[0].amount, 12.5);
        assert_eq!(page.size, 20);
        assert_eq!(transport.last().url.query(), Some("page=3&limit=20"));
    }

    #[tokio::test]
    async fn test_create_and_update_config() {
        let transport = RouteTransport::default()
            .route(Method::Get, "/fees/config", 200, json!([{"id": 1, "rate": 0.02, "enabled": true}]))
            .route(Method::Post, "/fees/config", 201, json!({"id": 2, "name": "rental", "rate": 0.03}))
            .route(Method::Put, "/fees/config/2", 200, json!({"id": 2, "name": "rental", "rate": 0.04}));
        let (api, _) = api(transport);

        let configs = api.fee_configs().await.unwrap();
        assert!(configs[0].enabled);

        let mut req = FeeConfigRequest {
            name: "rental".into(),
            fee_type: "percentage".into(),
            rate: 0.03,
            ..Default::default()
        };
        assert_eq!(api.create_fee_config(&req).await.unwrap().id, 2);

        req.rate = 0.04;
        assert_eq!(api.update_fee_config(2, &req).await.unwrap().rate, 0.04);
    }
}
