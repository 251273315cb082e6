use super::{
    client::ApiClient,
    resource::{CUSTOMERS, EMPLOYEES},
    types::{
        ApiError, Customer, CustomerCreate, CustomerDetail, Employee, EmployeeCreate,
        EmployeeQuery, ListQuery, Paginated,
    },
};

impl ApiClient {
    pub async fn get_customers(&self, query: &ListQuery) -> Result<Paginated<Customer>, ApiError> {
        self.list_resource(CUSTOMERS, query).await
    }

    pub async fn create_customer(&self, data: &CustomerCreate) -> Result<Customer, ApiError> {
        self.create_resource(CUSTOMERS, data).await
    }

    pub async fn get_customer(&self, id: i64) -> Result<CustomerDetail, ApiError> {
        self.retrieve_resource(CUSTOMERS, id).await
    }

    pub async fn update_customer(
        &self,
        id: i64,
        data: &CustomerCreate,
    ) -> Result<Customer, ApiError> {
        self.update_resource(CUSTOMERS, id, data).await
    }

    pub async fn delete_customer(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(CUSTOMERS, id).await
    }

    pub async fn get_employees(
        &self,
        query: &EmployeeQuery,
    ) -> Result<Paginated<Employee>, ApiError> {
        self.list_resource(EMPLOYEES, query).await
    }

    pub async fn create_employee(&self, data: &EmployeeCreate) -> Result<Employee, ApiError> {
        self.create_resource(EMPLOYEES, data).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(EMPLOYEES, id).await
    }
}
