mod edid;
mod errors;
mod handler;

pub use edid::{find_edid_in, physical_size_from_edid, read_physical_size, sysfs_physical_size};
pub use errors::GeometryError;
pub use handler::{estimate_geometry, measure, measure_all, select_mode};
