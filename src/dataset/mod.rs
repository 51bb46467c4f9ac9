//! Data preparation: synthetic instances, delivery-dataset import, and
//! flat CSV files.
//!
//! Everything here performs I/O or randomness; the optimization modules
//! only ever see the resulting [`Instance`](crate::models::Instance).

mod delivery;
mod generator;
mod records;

pub use delivery::{instance_from_delivery, load_delivery_csv, read_delivery, DeliveryRecord};
pub use generator::{generate, GeneratorConfig};
pub use records::{
    read_centers, read_instance, read_packages, write_assignment, write_centers, write_instance,
    write_packages, CENTERS_FILE, PACKAGES_FILE,
};
