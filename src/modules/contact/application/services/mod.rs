mod simulated_contact_service;

pub use simulated_contact_service::SimulatedContactService;
