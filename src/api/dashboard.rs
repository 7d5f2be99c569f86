//! Dashboard summary.

use crate::api::types::DashboardStats;
use crate::api::AdminApi;
use crate::client::Endpoint;

impl AdminApi {
    /// Summary statistics. Zeroed stats if no backend answers.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.request_or_default(&Endpoint::get("/dashboard/stats")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{api, RouteTransport};
    use crate::api::types::DashboardStats;
    use crate::client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_decoded() {
        let transport = RouteTransport::default().route(
            Method::Get,
            "/dashboard/stats",
            200,
            json!({"total_users": 100}),
        );
        let (api, _) = api(transport);

        let stats = api.dashboard_stats().await;
        assert_eq!(stats.total_users, 100);
    }

    #[tokio::test]
    async fn test_stats_degrade_to_zero() {
        let (api, transport) = api(RouteTransport::default());

        let stats = api.dashboard_stats().await;
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(transport.count(), 2);
    }
}
