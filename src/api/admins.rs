//! System administrator records.

use serde_json::Value;

use crate::api::types::{AdminRequest, Page, SystemAdmin};
use crate::api::AdminApi;
use crate::client::{ClientResult, Endpoint};

impl AdminApi {
    pub async fn admins(&self, page: u32, size: u32) -> ClientResult<Page<SystemAdmin>> {
        let endpoint = Endpoint::get("/admins").query("page", page).query("size", size);
        self.client.request(&endpoint).await
    }

    pub async fn admin(&self, id: u64) -> ClientResult<SystemAdmin> {
        self.client.get(&format!("/admins/{}", id)).await
    }

    pub async fn create_admin(&self, req: &AdminRequest) -> ClientResult<SystemAdmin> {
        self.client.post("/admins", req).await
    }

    pub async fn update_admin(&self, id: u64, req: &AdminRequest) -> ClientResult<SystemAdmin> {
        self.client.put(&format!("/admins/{}", id), req).await
    }

    /// Delete an administrator. Whatever body the backend returns is ignored.
    pub async fn delete_admin(&self, id: u64) -> ClientResult<()> {
        self.client
            .request::<Value>(&Endpoint::delete(format!("/admins/{}", id)))
            .await?;
        Ok(())
    }
}
