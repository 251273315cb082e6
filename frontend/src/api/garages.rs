use super::{
    client::ApiClient,
    resource::{APPOINTMENTS, CATEGORIES, GARAGES, SERVICES, SUPPLIERS, VEHICLES},
    types::{
        ApiError, Appointment, AppointmentCreate, Category, CategoryCreate, Garage, GarageCreate,
        ListQuery, Paginated, Service, ServiceCreate, Supplier, SupplierCreate, Vehicle,
        VehicleCreate,
    },
};

impl ApiClient {
    pub async fn get_garages(&self, query: &ListQuery) -> Result<Paginated<Garage>, ApiError> {
        self.list_resource(GARAGES, query).await
    }

    pub async fn create_garage(&self, data: &GarageCreate) -> Result<Garage, ApiError> {
        self.create_resource(GARAGES, data).await
    }

    pub async fn get_garage(&self, id: i64) -> Result<Garage, ApiError> {
        self.retrieve_resource(GARAGES, id).await
    }

    pub async fn update_garage(&self, id: i64, data: &GarageCreate) -> Result<Garage, ApiError> {
        self.update_resource(GARAGES, id, data).await
    }

    pub async fn delete_garage(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(GARAGES, id).await
    }

    pub async fn get_vehicles(&self, query: &ListQuery) -> Result<Paginated<Vehicle>, ApiError> {
        self.list_resource(VEHICLES, query).await
    }

    pub async fn create_vehicle(&self, data: &VehicleCreate) -> Result<Vehicle, ApiError> {
        self.create_resource(VEHICLES, data).await
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, ApiError> {
        self.retrieve_resource(VEHICLES, id).await
    }

    pub async fn update_vehicle(&self, id: i64, data: &VehicleCreate) -> Result<Vehicle, ApiError> {
        self.update_resource(VEHICLES, id, data).await
    }

    pub async fn delete_vehicle(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(VEHICLES, id).await
    }

    pub async fn get_categories(&self, query: &ListQuery) -> Result<Paginated<Category>, ApiError> {
        self.list_resource(CATEGORIES, query).await
    }

    pub async fn create_category(&self, data: &CategoryCreate) -> Result<Category, ApiError> {
        self.create_resource(CATEGORIES, data).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.retrieve_resource(CATEGORIES, id).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        data: &CategoryCreate,
    ) -> Result<Category, ApiError> {
        self.update_resource(CATEGORIES, id, data).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(CATEGORIES, id).await
    }

    pub async fn get_services(&self, query: &ListQuery) -> Result<Paginated<Service>, ApiError> {
        self.list_resource(SERVICES, query).await
    }

    pub async fn create_service(&self, data: &ServiceCreate) -> Result<Service, ApiError> {
        self.create_resource(SERVICES, data).await
    }

    pub async fn get_service(&self, id: i64) -> Result<Service, ApiError> {
        self.retrieve_resource(SERVICES, id).await
    }

    pub async fn update_service(&self, id: i64, data: &ServiceCreate) -> Result<Service, ApiError> {
        self.update_resource(SERVICES, id, data).await
    }

    pub async fn delete_service(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(SERVICES, id).await
    }

    pub async fn get_appointments(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<Appointment>, ApiError> {
        self.list_resource(APPOINTMENTS, query).await
    }

    pub async fn create_appointment(
        &self,
        data: &AppointmentCreate,
    ) -> Result<Appointment, ApiError> {
        self.create_resource(APPOINTMENTS, data).await
    }

    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.retrieve_resource(APPOINTMENTS, id).await
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        data: &AppointmentCreate,
    ) -> Result<Appointment, ApiError> {
        self.update_resource(APPOINTMENTS, id, data).await
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(APPOINTMENTS, id).await
    }

    pub async fn get_suppliers(&self, query: &ListQuery) -> Result<Paginated<Supplier>, ApiError> {
        self.list_resource(SUPPLIERS, query).await
    }

    pub async fn create_supplier(&self, data: &SupplierCreate) -> Result<Supplier, ApiError> {
        self.create_resource(SUPPLIERS, data).await
    }

    pub async fn get_supplier(&self, id: i64) -> Result<Supplier, ApiError> {
        self.retrieve_resource(SUPPLIERS, id).await
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        data: &SupplierCreate,
    ) -> Result<Supplier, ApiError> {
        self.update_resource(SUPPLIERS, id, data).await
    }

    pub async fn delete_supplier(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(SUPPLIERS, id).await
    }
}
