//! Partner records.

use crate::api::types::{Page, Partner, PartnerRequest};
use crate::api::AdminApi;
use crate::client::{ClientResult, Endpoint};

impl AdminApi {
    pub async fn partners(&self, page: u32, size: u32) -> ClientResult<Page<Partner>> {
        let endpoint = Endpoint::get("/partners").query("page", page).query("size", size);
        self.client.request(&endpoint).await
    }

    pub async fn partner(&self, id: u64) -> ClientResult<Partner> {
        self.client.get(&format!("/partners/{}", id)).await
    }

    pub async fn create_partner(&self, req: &PartnerRequest) -> ClientResult<Partner> {
        self.client.post("/partners", req).await
    }

    pub async fn update_partner(&self, id: u64, req: &PartnerRequest) -> ClientResult<Partner> {
        self.client.put(&format!("/partners/{}", id), req).await
    }
}
