pub mod aftersales_service;
pub mod customer_experience;
pub mod new_vehicle_sales;
pub mod parts_inventory;
pub mod used_vehicle_sales;
