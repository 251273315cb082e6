use super::{
    client::ApiClient,
    resource::PARTS,
    types::{ApiError, ListQuery, Paginated, Part, PartCreate},
};

impl ApiClient {
    pub async fn get_parts(&self, query: &ListQuery) -> Result<Paginated<Part>, ApiError> {
        self.list_resource(PARTS, query).await
    }

    pub async fn create_part(&self, data: &PartCreate) -> Result<Part, ApiError> {
        self.create_resource(PARTS, data).await
    }

    pub async fn get_part(&self, id: i64) -> Result<Part, ApiError> {
        self.retrieve_resource(PARTS, id).await
    }

    pub async fn update_part(&self, id: i64, data: &PartCreate) -> Result<Part, ApiError> {
        self.update_resource(PARTS, id, data).await
    }

    pub async fn delete_part(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(PARTS, id).await
    }
}
