//! Energy pool snapshot and transactions.

use crate::api::types::{AllocationRequest, EnergyPool, EnergyTransaction, RechargeRequest};
use crate::api::AdminApi;
use crate::client::{ClientResult, Endpoint};

impl AdminApi {
    /// Current pool snapshot. Empty snapshot if no backend answers.
    pub async fn energy_pool(&self) -> EnergyPool {
        self.request_or_default(&Endpoint::get("/energy-pool")).await
    }

    pub async fn record_allocation(&self, req: &AllocationRequest) -> ClientResult<EnergyTransaction> {
        self.client.post("/energy-pool/allocations", req).await
    }

    pub async fn record_recharge(&self, req: &RechargeRequest) -> ClientResult<EnergyTransaction> {
        self.client.post("/energy-pool/recharges", req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{api, RouteTransport};
    use crate::api::types::{AllocationRequest, EnergyPool, RechargeRequest};
    use crate::client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_pool_snapshot() {
        let transport = RouteTransport::default().route(
            Method::Get,
            "/energy-pool",
            200,
            json!({"total_energy": 5_000_000, "available_energy": 1_200_000, "accounts": [{"address": "TAbc", "energy": 5_000_000}]}),
        );
        let (api, _) = api(transport);

        let pool = api.energy_pool().await;
        assert_eq!(pool.available_energy, 1_200_000);
        assert_eq!(pool.accounts.len(), 1);
    }

    #[tokio::test]
    async fn test_pool_degrades_to_empty() {
        let (api, _) = api(RouteTransport::default());
        assert_eq!(api.energy_pool().await, EnergyPool::default());
    }

    #[tokio::test]
    async fn test_allocation_and_recharge() {
        let transport = RouteTransport::default()
            .route(
                Method::Post,
                "/energy-pool/allocations",
                201,
                json!({"id": 11, "partner_id": 3, "kind": "allocation", "amount": 65000.0}),
            )
            .route(
                Method::Post,
                "/energy-pool/recharges",
                201,
                json!({"id": 12, "partner_id": 3, "kind": "recharge", "amount": 100.0}),
            );
        let (api, transport) = api(transport);

        let tx = api
            .record_allocation(&AllocationRequest {
                partner_id: 3,
                energy_amount: 65_000,
                duration_hours: 1,
            })
            .await
            .unwrap();
        assert_eq!(tx.kind, "allocation");
        assert_eq!(transport.last().body.unwrap()["energy_amount"], 65_000);

        let tx = api
            .record_recharge(&RechargeRequest {
                partner_id: 3,
                amount_trx: 100.0,
                tx_hash: None,
            })
            .await
            .unwrap();
        assert_eq!(tx.id, 12);
        assert!(transport.last().body.unwrap().get("tx_hash").is_none());
    }
}
